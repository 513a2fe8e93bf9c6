//! Error types for `contacts-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("name cannot be empty")]
  EmptyName,

  #[error("phone number must be at least 10 digits: {0:?}")]
  InvalidPhone(String),

  #[error("invalid date {0:?}, use DD.MM.YYYY")]
  InvalidBirthday(String),

  #[error("unknown field kind: {0:?}")]
  UnknownField(String),

  #[error("phone number not found: {0}")]
  PhoneNotFound(String),
}

impl Error {
  /// Malformed input rejected by a field constructor.
  pub fn is_validation(&self) -> bool {
    matches!(
      self,
      Self::EmptyName
        | Self::InvalidPhone(_)
        | Self::InvalidBirthday(_)
        | Self::UnknownField(_)
    )
  }

  /// A lookup inside a record came up empty.
  pub fn is_not_found(&self) -> bool { matches!(self, Self::PhoneNotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! Field types: the validated values a record is built from.
//!
//! Every field is immutable once constructed and can only be obtained through
//! its validating constructor, so holding a [`Name`], [`Phone`] or
//! [`Birthday`] is proof the value is well formed.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The `DD.MM.YYYY` pattern used both to parse and to render dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Minimum number of digits a phone number must carry.
pub const MIN_PHONE_DIGITS: usize = 10;

// ─── Name ────────────────────────────────────────────────────────────────────

/// A contact's name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    if value.is_empty() {
      return Err(Error::EmptyName);
    }
    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

/// A phone number: ASCII digits only, at least [`MIN_PHONE_DIGITS`] long.
///
/// There is no upper bound on the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
  pub fn new(value: impl Into<String>) -> Result<Self> {
    let value = value.into();
    let all_digits = value.chars().all(|c| c.is_ascii_digit());
    if !all_digits || value.len() < MIN_PHONE_DIGITS {
      return Err(Error::InvalidPhone(value));
    }
    Ok(Self(value))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

// ─── Birthday ────────────────────────────────────────────────────────────────

/// A calendar date parsed from `DD.MM.YYYY`. Stored as a date, not a string.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
  /// Parse `value` with the fixed [`DATE_FORMAT`] pattern: exactly two day
  /// digits, two month digits and four year digits.
  pub fn parse(value: &str) -> Result<Self> {
    // chrono alone would accept short or signed years and leading spaces.
    let well_shaped = value.len() == 10
      && value.bytes().enumerate().all(|(i, b)| match i {
        2 | 5 => b == b'.',
        _ => b.is_ascii_digit(),
      });
    if !well_shaped {
      return Err(Error::InvalidBirthday(value.to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
      .map(Self)
      .map_err(|_| Error::InvalidBirthday(value.to_string()))
  }

  pub fn from_date(date: NaiveDate) -> Self { Self(date) }

  pub fn date(&self) -> NaiveDate { self.0 }
}

// ─── Field ───────────────────────────────────────────────────────────────────

/// Any one of the validated field types.
///
/// [`Record`](crate::Record) stores the concrete types; this is for callers
/// that only learn which field they are editing at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
  Name(Name),
  Phone(Phone),
  Birthday(Birthday),
}

impl Field {
  /// Build the variant named by `kind` from raw text.
  pub fn parse(kind: &str, raw: &str) -> Result<Self> {
    match kind {
      "name" => Name::new(raw).map(Self::Name),
      "phone" => Phone::new(raw).map(Self::Phone),
      "birthday" => Birthday::parse(raw).map(Self::Birthday),
      other => Err(Error::UnknownField(other.to_string())),
    }
  }

  /// The discriminant accepted by [`Field::parse`].
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Name(_) => "name",
      Self::Phone(_) => "phone",
      Self::Birthday(_) => "birthday",
    }
  }
}

// ─── Textual forms ───────────────────────────────────────────────────────────

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl fmt::Display for Birthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.format(DATE_FORMAT))
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Name(v) => v.fmt(f),
      Self::Phone(v) => v.fmt(f),
      Self::Birthday(v) => v.fmt(f),
    }
  }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl FromStr for Name {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::new(s) }
}

impl FromStr for Phone {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::new(s) }
}

impl FromStr for Birthday {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl TryFrom<String> for Name {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::new(value) }
}

impl TryFrom<String> for Phone {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::new(value) }
}

impl TryFrom<String> for Birthday {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> { Self::parse(&value) }
}

impl From<Name> for String {
  fn from(value: Name) -> Self { value.0 }
}

impl From<Phone> for String {
  fn from(value: Phone) -> Self { value.0 }
}

impl From<Birthday> for String {
  fn from(value: Birthday) -> Self { value.to_string() }
}

/// serde adapter rendering a [`NaiveDate`] as `DD.MM.YYYY`.
pub(crate) mod date_format {
  use chrono::NaiveDate;
  use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

  use super::DATE_FORMAT;

  pub fn serialize<S: Serializer>(
    date: &NaiveDate,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(D::Error::custom)
  }
}

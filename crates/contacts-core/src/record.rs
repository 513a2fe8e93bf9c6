//! A single contact: a name, its phones and an optional birthday.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{Birthday, Name, Phone},
};

/// One contact. The name is fixed at construction; phones and the birthday
/// are added incrementally.
///
/// Phones keep insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
  name:     Name,
  #[serde(default)]
  phones:   Vec<Phone>,
  #[serde(default)]
  birthday: Option<Birthday>,
}

impl Record {
  pub fn new(name: impl Into<String>) -> Result<Self> {
    Ok(Self {
      name:     Name::new(name)?,
      phones:   Vec::new(),
      birthday: None,
    })
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phones(&self) -> &[Phone] { &self.phones }

  pub fn birthday(&self) -> Option<&Birthday> { self.birthday.as_ref() }

  // ── Phones ──────────────────────────────────────────────────────────────

  /// Validate `raw` and append it.
  pub fn add_phone(&mut self, raw: &str) -> Result<()> {
    self.phones.push(Phone::new(raw)?);
    Ok(())
  }

  /// Remove every phone equal to `raw`. Returns how many were removed.
  pub fn remove_phone(&mut self, raw: &str) -> usize {
    let before = self.phones.len();
    self.phones.retain(|p| p.as_str() != raw);
    before - self.phones.len()
  }

  /// Replace every phone equal to `old` with `new`, returning how many were
  /// replaced.
  ///
  /// `new` is validated before anything changes, so on error the record is
  /// untouched. Duplicates of `old` all become `new`.
  pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize> {
    let replacement = Phone::new(new)?;
    let mut replaced = 0;
    for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
      *phone = replacement.clone();
      replaced += 1;
    }
    Ok(replaced)
  }

  /// The first phone equal to `raw`, in insertion order.
  pub fn find_phone(&self, raw: &str) -> Result<&Phone> {
    self
      .phones
      .iter()
      .find(|p| p.as_str() == raw)
      .ok_or_else(|| Error::PhoneNotFound(raw.to_string()))
  }

  // ── Birthday ────────────────────────────────────────────────────────────

  /// Validate `raw` as `DD.MM.YYYY` and set it, replacing any previous value.
  pub fn add_birthday(&mut self, raw: &str) -> Result<()> {
    self.birthday = Some(Birthday::parse(raw)?);
    Ok(())
  }
}

impl fmt::Display for Record {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Contact name: {}, phones: ", self.name)?;
    for (i, phone) in self.phones.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{phone}")?;
    }
    if let Some(birthday) = &self.birthday {
      write!(f, ", Birthday: {birthday}")?;
    }
    Ok(())
  }
}

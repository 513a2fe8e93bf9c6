//! The address book: every record, keyed by contact name.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
  birthdays::{self, UPCOMING_WINDOW_DAYS, UpcomingBirthday},
  record::Record,
};

/// Records keyed by name, iterated in insertion order.
///
/// Lookups by name never fail: a miss is `None` from [`AddressBook::find`]
/// and a no-op for [`AddressBook::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
  records: Vec<Record>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  fn position(&self, name: &str) -> Option<usize> {
    self.records.iter().position(|r| r.name().as_str() == name)
  }

  /// Register `record` under its name. An existing record with the same name
  /// is replaced in place, keeping its position.
  pub fn add_record(&mut self, record: Record) {
    match self.position(record.name().as_str()) {
      Some(idx) => {
        debug!(name = %record.name(), "replacing record");
        self.records[idx] = record;
      }
      None => {
        debug!(name = %record.name(), "adding record");
        self.records.push(record);
      }
    }
  }

  pub fn find(&self, name: &str) -> Option<&Record> {
    self.position(name).map(|idx| &self.records[idx])
  }

  pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
    self.position(name).map(|idx| &mut self.records[idx])
  }

  /// Remove and return the record for `name`, if any.
  pub fn delete(&mut self, name: &str) -> Option<Record> {
    let idx = self.position(name)?;
    debug!(name, "deleting record");
    Some(self.records.remove(idx))
  }

  pub fn len(&self) -> usize { self.records.len() }

  pub fn is_empty(&self) -> bool { self.records.is_empty() }

  pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.records.iter().map(|r| r.name().as_str())
  }

  /// Contacts whose birthday falls within the next
  /// [`UPCOMING_WINDOW_DAYS`] days of `today`, weekend dates moved to Monday.
  pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
    let upcoming = birthdays::upcoming(self, today, UPCOMING_WINDOW_DAYS);
    debug!(%today, count = upcoming.len(), "computed upcoming birthdays");
    upcoming
  }
}

impl<'a> IntoIterator for &'a AddressBook {
  type IntoIter = std::slice::Iter<'a, Record>;
  type Item = &'a Record;

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Later records replace earlier ones with the same name.
impl FromIterator<Record> for AddressBook {
  fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
    let mut book = Self::new();
    for record in iter {
      book.add_record(record);
    }
    book
  }
}

impl From<Vec<Record>> for AddressBook {
  fn from(records: Vec<Record>) -> Self { records.into_iter().collect() }
}

impl From<AddressBook> for Vec<Record> {
  fn from(book: AddressBook) -> Self { book.records }
}

impl fmt::Display for AddressBook {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, record) in self.records.iter().enumerate() {
      if i > 0 {
        f.write_str("\n")?;
      }
      write!(f, "{record}")?;
    }
    Ok(())
  }
}

//! Upcoming-birthday computation.
//!
//! Pure functions over records and an injected `today`; nothing here reads
//! the clock.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
  field::{Birthday, DATE_FORMAT, date_format},
  record::Record,
};

/// Birthdays strictly fewer than this many days ahead are upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact to congratulate and the (weekend-shifted) day to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
  pub name:                String,
  #[serde(with = "date_format")]
  pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
  /// The congratulation date as `DD.MM.YYYY`.
  pub fn formatted_date(&self) -> String {
    self.congratulation_date.format(DATE_FORMAT).to_string()
  }
}

impl fmt::Display for UpcomingBirthday {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.name, self.formatted_date())
  }
}

/// The birthday's anniversary in `year`. 29 February maps to 28 February in
/// non-leap years. `None` when `year` is outside chrono's range.
fn anniversary(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
  let date = birthday.date();
  date
    .with_year(year)
    .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
}

/// The first anniversary of `birthday` on or after `today`, or `None` if it
/// would fall outside the representable date range.
pub fn next_occurrence(
  birthday: &Birthday,
  today: NaiveDate,
) -> Option<NaiveDate> {
  let this_year = anniversary(birthday, today.year())?;
  if this_year < today {
    anniversary(birthday, today.year().checked_add(1)?)
  } else {
    Some(this_year)
  }
}

/// Move a Saturday or Sunday forward to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
  let shift = match date.weekday() {
    Weekday::Sat => 2,
    Weekday::Sun => 1,
    _ => 0,
  };
  date + Days::new(shift)
}

/// Records whose next birthday is fewer than `window_days` days after
/// `today`, in input order.
pub fn upcoming<'a, I>(
  records: I,
  today: NaiveDate,
  window_days: i64,
) -> Vec<UpcomingBirthday>
where
  I: IntoIterator<Item = &'a Record>,
{
  records
    .into_iter()
    .filter_map(|record| {
      let birthday = record.birthday()?;
      let occurrence = next_occurrence(birthday, today)?;
      let delta = (occurrence - today).num_days();
      (delta < window_days).then(|| UpcomingBirthday {
        name:                record.name().to_string(),
        congratulation_date: congratulation_date(occurrence),
      })
    })
    .collect()
}

//! Address-book scenarios exercising records, lookups and the birthday query
//! together.

use chrono::NaiveDate;

use crate::{AddressBook, Error, Record, UpcomingBirthday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
  let mut r = Record::new(name).unwrap();
  for p in phones {
    r.add_phone(p).unwrap();
  }
  if let Some(b) = birthday {
    r.add_birthday(b).unwrap();
  }
  r
}

fn book() -> AddressBook {
  let mut book = AddressBook::new();
  book.add_record(record(
    "John",
    &["1234567890", "5555555555"],
    Some("01.02.1992"),
  ));
  book.add_record(record("Jane", &["9876543210"], Some("02.12.1991")));
  book
}

// ─── Registration ────────────────────────────────────────────────────────────

#[test]
fn add_and_find() {
  let book = book();
  assert_eq!(book.len(), 2);
  let john = book.find("John").unwrap();
  assert_eq!(john.phones().len(), 2);
  assert_eq!(john.birthday().unwrap().to_string(), "01.02.1992");
}

#[test]
fn find_missing_returns_none() {
  assert!(book().find("absent").is_none());
  assert!(AddressBook::new().find("John").is_none());
}

#[test]
fn re_adding_overwrites_without_merging() {
  let mut book = book();
  book.add_record(record("John", &["0000000000"], None));
  assert_eq!(book.len(), 2);
  let john = book.find("John").unwrap();
  assert_eq!(john.phones()[0].as_str(), "0000000000");
  assert_eq!(john.phones().len(), 1);
  assert!(john.birthday().is_none());
  // The overwritten record keeps its original position.
  assert_eq!(book.names().collect::<Vec<_>>(), ["John", "Jane"]);
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[test]
fn delete_removes_record() {
  let mut book = book();
  let removed = book.delete("Jane").unwrap();
  assert_eq!(removed.name().as_str(), "Jane");
  assert!(book.find("Jane").is_none());
  assert_eq!(book.len(), 1);
}

#[test]
fn delete_missing_is_noop() {
  let mut book = book();
  let before = book.clone();
  assert!(book.delete("absent").is_none());
  assert_eq!(book, before);
}

#[test]
fn delete_preserves_order_of_the_rest() {
  let mut book = book();
  book.add_record(record("Bill", &[], None));
  book.delete("Jane");
  assert_eq!(book.names().collect::<Vec<_>>(), ["John", "Bill"]);
}

// ─── Mutation through the book ───────────────────────────────────────────────

#[test]
fn edit_phone_through_find_mut() {
  let mut book = book();
  let john = book.find_mut("John").unwrap();
  john.edit_phone("1234567890", "1112223333").unwrap();
  assert_eq!(
    book.find("John").unwrap().to_string(),
    "Contact name: John, phones: 1112223333; 5555555555, Birthday: 01.02.1992"
  );
  let found = book.find("John").unwrap().find_phone("5555555555").unwrap();
  assert_eq!(found.as_str(), "5555555555");
}

#[test]
fn find_phone_miss_is_an_error_but_find_miss_is_not() {
  let book = book();
  let err = book.find("Jane").unwrap().find_phone("1234567890").unwrap_err();
  assert_eq!(err, Error::PhoneNotFound("1234567890".into()));
  assert!(book.find("Nobody").is_none());
}

#[test]
fn display_lists_every_record() {
  let mut book = AddressBook::new();
  book.add_record(record("John", &["1234567890"], None));
  book.add_record(record("Jane", &["9876543210"], Some("02.12.1991")));
  assert_eq!(
    book.to_string(),
    "Contact name: John, phones: 1234567890\nContact name: Jane, phones: \
     9876543210, Birthday: 02.12.1991"
  );
  assert_eq!(AddressBook::new().to_string(), "");
}

// ─── Upcoming birthdays ──────────────────────────────────────────────────────

#[test]
fn upcoming_excludes_distant_birthdays() {
  assert!(book().upcoming_birthdays(date(2024, 1, 1)).is_empty());
}

#[test]
fn upcoming_lists_in_book_order_with_weekend_shift() {
  let mut book = book();
  book.add_record(record("Sun", &[], Some("30.06.1990")));
  book.add_record(record("NoBirthday", &[], None));
  book.add_record(record("Sat", &[], Some("29.06.1990")));
  book.add_record(record("Wed", &[], Some("03.07.1980")));
  book.add_record(record("TooLate", &[], Some("05.07.1980")));

  let got = book.upcoming_birthdays(date(2024, 6, 28));
  let rendered: Vec<_> = got.iter().map(UpcomingBirthday::to_string).collect();
  assert_eq!(rendered, [
    "Sun: 01.07.2024",
    "Sat: 01.07.2024",
    "Wed: 03.07.2024",
  ]);
}

#[test]
fn upcoming_on_empty_book() {
  assert!(AddressBook::new().upcoming_birthdays(date(2024, 6, 28)).is_empty());
}

// ─── serde ───────────────────────────────────────────────────────────────────

#[test]
fn book_serializes_as_record_list() {
  let book = book();
  let json = serde_json::to_value(&book).unwrap();
  assert!(json.is_array());
  assert_eq!(json[0]["name"], "John");
  let back: AddressBook = serde_json::from_value(json).unwrap();
  assert_eq!(back, book);
}

#[test]
fn deserializing_duplicate_names_keeps_the_last() {
  let json = serde_json::json!([
    { "name": "John", "phones": ["1234567890"] },
    { "name": "Jane" },
    { "name": "John", "phones": ["5555555555"] },
  ]);
  let book: AddressBook = serde_json::from_value(json).unwrap();
  assert_eq!(book.len(), 2);
  assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "5555555555");
}

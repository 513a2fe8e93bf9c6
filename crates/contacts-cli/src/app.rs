//! Assistant state and command dispatcher.

use chrono::{Local, NaiveDate};
use contacts_core::{AddressBook, Phone, Record, UserView};
use tracing::debug;

use crate::command::Command;

// ─── Clock ────────────────────────────────────────────────────────────────────

/// Where "today" comes from for the birthday query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Today {
  /// The local calendar date at the moment of the query.
  Local,
  /// A pinned date.
  Fixed(NaiveDate),
}

impl Today {
  pub fn resolve(self) -> NaiveDate {
    match self {
      Self::Local => Local::now().date_naive(),
      Self::Fixed(date) => date,
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level assistant state: the address book and where output goes.
pub struct App<V> {
  pub book: AddressBook,
  today:    Today,
  view:     V,
}

impl<V: UserView> App<V> {
  pub fn new(view: V, today: Today) -> Self {
    Self {
      book: AddressBook::new(),
      today,
      view,
    }
  }

  /// Process one input line. Returns `true` to continue, `false` to quit.
  pub fn handle_line(&mut self, line: &str) -> bool {
    match Command::parse(line) {
      Ok(command) => self.handle(command),
      Err(e) => {
        self.view.show(&e.to_string());
        true
      }
    }
  }

  /// Execute `command`. Core errors are shown, never propagated.
  pub fn handle(&mut self, command: Command) -> bool {
    debug!(?command, "handling command");
    let message = match command {
      Command::Exit => {
        self.view.show("Good bye!");
        return false;
      }
      Command::Hello => Ok("How can I help you?".to_string()),
      Command::Add { name, phone } => self.add(&name, &phone),
      Command::Change { name, old, new } => self.change(&name, &old, &new),
      Command::RemovePhone { name, phone } => self.remove_phone(&name, &phone),
      Command::Phone { name } => Ok(self.phones(&name)),
      Command::All => Ok(self.all()),
      Command::Delete { name } => Ok(self.delete(&name)),
      Command::AddBirthday { name, date } => self.add_birthday(&name, &date),
      Command::ShowBirthday { name } => Ok(self.show_birthday(&name)),
      Command::Birthdays => Ok(self.birthdays()),
    };

    match message {
      Ok(text) => self.view.show(&text),
      Err(e) => self.view.show(&format!("Error: {e}")),
    }
    true
  }

  // ── Commands ──────────────────────────────────────────────────────────────

  fn add(&mut self, name: &str, phone: &str) -> contacts_core::Result<String> {
    if let Some(record) = self.book.find_mut(name) {
      record.add_phone(phone)?;
      return Ok("Contact updated.".into());
    }
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    self.book.add_record(record);
    Ok("Contact added.".into())
  }

  fn change(
    &mut self,
    name: &str,
    old: &str,
    new: &str,
  ) -> contacts_core::Result<String> {
    let Some(record) = self.book.find_mut(name) else {
      return Ok(not_found());
    };
    record.find_phone(old)?;
    record.edit_phone(old, new)?;
    Ok("Contact updated.".into())
  }

  fn remove_phone(
    &mut self,
    name: &str,
    phone: &str,
  ) -> contacts_core::Result<String> {
    let Some(record) = self.book.find_mut(name) else {
      return Ok(not_found());
    };
    record.find_phone(phone)?;
    record.remove_phone(phone);
    Ok("Phone removed.".into())
  }

  fn phones(&self, name: &str) -> String {
    match self.book.find(name) {
      None => not_found(),
      Some(record) if record.phones().is_empty() => "No phones saved.".into(),
      Some(record) => record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; "),
    }
  }

  fn all(&self) -> String {
    if self.book.is_empty() {
      "No contacts saved.".into()
    } else {
      self.book.to_string()
    }
  }

  fn delete(&mut self, name: &str) -> String {
    match self.book.delete(name) {
      Some(_) => "Contact deleted.".into(),
      None => not_found(),
    }
  }

  fn add_birthday(
    &mut self,
    name: &str,
    date: &str,
  ) -> contacts_core::Result<String> {
    let Some(record) = self.book.find_mut(name) else {
      return Ok(not_found());
    };
    record.add_birthday(date)?;
    Ok("Birthday added.".into())
  }

  fn show_birthday(&self, name: &str) -> String {
    match self.book.find(name) {
      None => not_found(),
      Some(record) => record
        .birthday()
        .map_or_else(|| "Birthday not set.".into(), ToString::to_string),
    }
  }

  fn birthdays(&self) -> String {
    let upcoming = self.book.upcoming_birthdays(self.today.resolve());
    if upcoming.is_empty() {
      return "No upcoming birthdays.".into();
    }
    upcoming
      .iter()
      .map(ToString::to_string)
      .collect::<Vec<_>>()
      .join("\n")
  }
}

fn not_found() -> String { "Contact not found.".into() }

#[cfg(test)]
mod tests {
  use super::*;

  /// 2024-06-28 is a Friday.
  fn app() -> App<Vec<String>> {
    let today = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();
    App::new(Vec::new(), Today::Fixed(today))
  }

  /// Feed `lines` and return everything shown.
  fn run(app: &mut App<Vec<String>>, lines: &[&str]) -> Vec<String> {
    for line in lines {
      app.handle_line(line);
    }
    std::mem::take(&mut app.view)
  }

  #[test]
  fn greeting_and_exit() {
    let mut app = app();
    assert!(app.handle_line("hello"));
    assert!(!app.handle_line("exit"));
    assert_eq!(app.view, ["How can I help you?", "Good bye!"]);
  }

  #[test]
  fn add_creates_then_updates() {
    let mut app = app();
    let out = run(&mut app, &[
      "add John 1234567890",
      "add John 5555555555",
      "phone John",
    ]);
    assert_eq!(out, [
      "Contact added.",
      "Contact updated.",
      "1234567890; 5555555555",
    ]);
  }

  #[test]
  fn invalid_phone_does_not_create_contact() {
    let mut app = app();
    let out = run(&mut app, &["add John 123", "all"]);
    assert_eq!(out, [
      "Error: phone number must be at least 10 digits: \"123\"",
      "No contacts saved.",
    ]);
    assert!(app.book.find("John").is_none());
  }

  #[test]
  fn change_and_remove_phone() {
    let mut app = app();
    let out = run(&mut app, &[
      "add John 1234567890",
      "add John 5555555555",
      "change John 1234567890 1112223333",
      "change John 0000000000 1112223333",
      "remove-phone John 5555555555",
      "phone John",
    ]);
    assert_eq!(out, [
      "Contact added.",
      "Contact updated.",
      "Contact updated.",
      "Error: phone number not found: 0000000000",
      "Phone removed.",
      "1112223333",
    ]);
  }

  #[test]
  fn missing_contact_is_reported() {
    let mut app = app();
    let out = run(&mut app, &[
      "phone Nobody",
      "change Nobody 1234567890 1112223333",
      "delete Nobody",
      "show-birthday Nobody",
    ]);
    assert!(out.iter().all(|line| line == "Contact not found."));
    assert_eq!(out.len(), 4);
  }

  #[test]
  fn birthdays_flow() {
    let mut app = app();
    let out = run(&mut app, &[
      "add Jane 9876543210",
      "show-birthday Jane",
      "add-birthday Jane 30.06.1990",
      "show-birthday Jane",
      "add John 1234567890",
      "add-birthday John 01.02.1992",
      "birthdays",
    ]);
    assert_eq!(out, [
      "Contact added.",
      "Birthday not set.",
      "Birthday added.",
      "30.06.1990",
      "Contact added.",
      "Birthday added.",
      "Jane: 01.07.2024",
    ]);
  }

  #[test]
  fn bad_birthday_and_empty_query() {
    let mut app = app();
    let out = run(&mut app, &[
      "add Jane 9876543210",
      "add-birthday Jane 1990-06-30",
      "birthdays",
    ]);
    assert_eq!(out[1], "Error: invalid date \"1990-06-30\", use DD.MM.YYYY");
    assert_eq!(out[2], "No upcoming birthdays.");
  }

  #[test]
  fn all_and_delete() {
    let mut app = app();
    let out = run(&mut app, &[
      "add John 1234567890",
      "add Jane 9876543210",
      "delete Jane",
      "all",
    ]);
    assert_eq!(out[2], "Contact deleted.");
    assert_eq!(out[3], "Contact name: John, phones: 1234567890");
  }

  #[test]
  fn parse_errors_are_shown() {
    let mut app = app();
    let out = run(&mut app, &["dance", "add John", ""]);
    assert_eq!(out, [
      "Invalid command.",
      "Usage: add <name> <phone>",
      "Enter a command.",
    ]);
  }
}

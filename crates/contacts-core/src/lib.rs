//! Core types for the contacts assistant: validated fields, records, the
//! address book and the upcoming-birthday query.
//!
//! This crate is pure and synchronous. It performs no I/O and never reads the
//! clock; "today" is always supplied by the caller, and rendering is delegated
//! to a [`view::UserView`] the caller provides.

pub mod birthdays;
pub mod directory;
pub mod error;
pub mod field;
pub mod record;
pub mod view;

pub use birthdays::{UPCOMING_WINDOW_DAYS, UpcomingBirthday};
pub use directory::AddressBook;
pub use error::{Error, Result};
pub use field::{Birthday, Field, Name, Phone};
pub use record::Record;
pub use view::UserView;

#[cfg(test)]
mod tests;

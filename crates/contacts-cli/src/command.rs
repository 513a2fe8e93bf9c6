//! Parsing of one input line into a [`Command`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Hello,
  Add { name: String, phone: String },
  Change { name: String, old: String, new: String },
  RemovePhone { name: String, phone: String },
  Phone { name: String },
  All,
  Delete { name: String },
  AddBirthday { name: String, date: String },
  ShowBirthday { name: String },
  Birthdays,
  Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("Enter a command.")]
  Empty,

  #[error("Invalid command.")]
  Unknown(String),

  #[error("Usage: {0}")]
  Usage(&'static str),
}

/// Pull exactly `N` arguments, or fail with `usage`.
fn args<const N: usize>(
  rest: &[&str],
  usage: &'static str,
) -> Result<[String; N], ParseError> {
  if rest.len() != N {
    return Err(ParseError::Usage(usage));
  }
  Ok(std::array::from_fn(|i| rest[i].to_string()))
}

impl Command {
  /// Parse a whitespace-separated line. The command word is case-insensitive.
  pub fn parse(line: &str) -> Result<Self, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
      return Err(ParseError::Empty);
    };
    let rest: Vec<&str> = words.collect();

    let command = match head.to_lowercase().as_str() {
      "hello" => Self::Hello,
      "add" => {
        let [name, phone] = args::<2>(&rest, "add <name> <phone>")?;
        Self::Add { name, phone }
      }
      "change" => {
        let [name, old, new] = args::<3>(&rest, "change <name> <old phone> <new phone>")?;
        Self::Change { name, old, new }
      }
      "remove-phone" => {
        let [name, phone] = args::<2>(&rest, "remove-phone <name> <phone>")?;
        Self::RemovePhone { name, phone }
      }
      "phone" => {
        let [name] = args::<1>(&rest, "phone <name>")?;
        Self::Phone { name }
      }
      "all" => Self::All,
      "delete" => {
        let [name] = args::<1>(&rest, "delete <name>")?;
        Self::Delete { name }
      }
      "add-birthday" => {
        let [name, date] = args::<2>(&rest, "add-birthday <name> <DD.MM.YYYY>")?;
        Self::AddBirthday { name, date }
      }
      "show-birthday" => {
        let [name] = args::<1>(&rest, "show-birthday <name>")?;
        Self::ShowBirthday { name }
      }
      "birthdays" => Self::Birthdays,
      "close" | "exit" => Self::Exit,
      _ => return Err(ParseError::Unknown(head.to_string())),
    };
    Ok(command)
  }
}

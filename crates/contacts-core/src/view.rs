//! The display capability the core's callers render through.

/// Anything that can show a line of text to the user.
///
/// The core never constructs an implementation; presentation layers (a
/// console, a log file, a chat transport) supply their own.
pub trait UserView {
  fn show(&mut self, text: &str);
}

/// Collects shown lines in memory.
impl UserView for Vec<String> {
  fn show(&mut self, text: &str) { self.push(text.to_string()); }
}

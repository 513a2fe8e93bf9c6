//! Console implementation of [`UserView`].

use std::io::Write;

use contacts_core::UserView;

/// Writes each shown line to `out`, newline-terminated.
pub struct ConsoleView<W> {
  out: W,
}

impl<W: Write> ConsoleView<W> {
  pub fn new(out: W) -> Self { Self { out } }
}

impl<W: Write> UserView for ConsoleView<W> {
  fn show(&mut self, text: &str) {
    if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
      tracing::warn!(error = %e, "failed to write to console");
    }
  }
}

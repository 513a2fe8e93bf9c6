//! `contacts`: interactive assistant over an in-memory address book.
//!
//! # Usage
//!
//! ```
//! contacts
//! contacts --today 2024-06-28
//! contacts --config ~/.config/contacts/contacts.toml
//! ```
//!
//! Type `hello` for a greeting, `close` or `exit` to quit.

mod app;
mod command;
mod view;

use std::{
  io::{self, BufRead, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use app::{App, Today};
use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use view::ConsoleView;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Assistant for an in-memory contact book")]
struct Cli {
  /// Path to an optional TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "contacts.toml")]
  config: PathBuf,

  /// Pin the reference date for `birthdays` instead of using the clock.
  #[arg(long, value_name = "YYYY-MM-DD")]
  today: Option<NaiveDate>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Settings merged from the config file and `CONTACTS_*` variables.
#[derive(Debug, Deserialize)]
struct Settings {
  #[serde(default = "default_prompt")]
  prompt: String,
  #[serde(default)]
  today:  Option<NaiveDate>,
}

fn default_prompt() -> String { "> ".to_string() }

impl Settings {
  fn load(path: &Path) -> Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("CONTACTS"))
      .build()
      .with_context(|| format!("reading config file {}", path.display()))?
      .try_deserialize()
      .context("parsing settings")
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so they never interleave with the conversation.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config)?;

  // Flag overrides config file / environment, which overrides the clock.
  let today = cli
    .today
    .or(settings.today)
    .map_or(Today::Local, Today::Fixed);
  tracing::info!(?today, "starting assistant");

  let mut app = App::new(ConsoleView::new(io::stdout()), today);
  run(&mut app, &settings.prompt)
}

// ─── Input loop ───────────────────────────────────────────────────────────────

fn run(app: &mut App<ConsoleView<io::Stdout>>, prompt: &str) -> Result<()> {
  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();

  app.handle_line("hello");
  loop {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;

    let Some(line) = lines.next() else {
      // EOF behaves like `exit`.
      app.handle_line("exit");
      break;
    };
    let line = line.context("reading stdin")?;
    if !app.handle_line(&line) {
      break;
    }
  }

  Ok(())
}

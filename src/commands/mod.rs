//! Command dispatch.
//!
//! Maps a [`ParsedArgs`] onto repository calls and renders the result as
//! text. Output goes to a caller-supplied writer so the same code serves the
//! terminal and the tests.
//!
//! Version and Help never touch storage. Every other command opens the
//! database once, runs, and closes it again before returning.

pub mod add;
pub mod info;
pub mod list;
pub mod state;
pub mod update;

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::args::{Command, ParsedArgs};
use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_debug;
use std::io::Write;

/// Storage handle opened on first use.
struct Storage<'c> {
    config: &'c Config,
    db: Option<Db>,
}

impl<'c> Storage<'c> {
    fn new(config: &'c Config) -> Self {
        Storage { config, db: None }
    }

    fn tasks(&mut self) -> Result<Tasks<'_>> {
        let db = match self.db.take() {
            Some(db) => db,
            None => self.config.open_db()?,
        };
        Tasks::new(self.db.insert(db))
    }

    fn close(self) -> Result<()> {
        match self.db {
            Some(db) => db.close(),
            None => Ok(()),
        }
    }
}

/// Runs `parsed` to completion, writing user-facing output to `out`.
///
/// Invalid command lines print the version and usage text and succeed.
pub fn dispatch<W: Write>(parsed: &ParsedArgs, config: &Config, out: &mut W) -> Result<()> {
    if !parsed.valid {
        msg_debug!(Message::InvalidArguments);
        return info::usage(out);
    }

    let mut storage = Storage::new(config);
    let result = execute(parsed, config, &mut storage, out);
    let closed = storage.close();
    result.and(closed)
}

fn execute<W: Write>(parsed: &ParsedArgs, config: &Config, storage: &mut Storage, out: &mut W) -> Result<()> {
    match parsed.command {
        Command::Add => add::cmd(&storage.tasks()?, &parsed.values, config, out),
        Command::List => list::cmd(&storage.tasks()?, parsed.filter, config, out),
        Command::Count => list::count(&storage.tasks()?, parsed.filter, out),
        Command::Update => update::cmd(&storage.tasks()?, &parsed.values, out),
        Command::Complete => state::complete(&storage.tasks()?, &parsed.values, out),
        Command::Reopen => state::reopen(&storage.tasks()?, &parsed.values, out),
        Command::Delete => state::delete(&storage.tasks()?, &parsed.values, out),
        Command::Version => info::version(out),
        Command::Help => info::usage(out),
    }
}

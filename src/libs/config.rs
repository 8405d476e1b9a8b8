//! Configuration loading for the todo application.
//!
//! Two settings drive the tool: where the task database lives and which
//! strftime layout is used to parse and display dates. They are resolved in
//! layers, each overriding the previous one:
//!
//! 1. Built-in defaults: `<data dir>/todo.db` and `%Y-%m-%d`
//! 2. `config.json` in the application data directory, if present
//! 3. The `TODO_DB_PATH` and `TODO_DATE_FORMAT` environment variables
//!
//! The data directory follows platform conventions:
//! - **Windows**: `%LOCALAPPDATA%\todo`
//! - **macOS**: `~/Library/Application Support/todo`
//! - **Linux**: `~/.local/share/todo`
//!
//! ```rust,no_run
//! use todo::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db = config.open_db()?;
//! # Ok::<(), todo::libs::error::TodoError>(())
//! ```

use super::data_storage::DataStorage;
use super::error::{Result, TodoError};
use super::formatter::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use crate::db::db::Db;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "todo.db";

pub const ENV_DB_PATH: &str = "TODO_DB_PATH";
pub const ENV_DATE_FORMAT: &str = "TODO_DATE_FORMAT";

/// Resolved runtime configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Location of the SQLite database file.
    pub db_path: PathBuf,

    /// strftime layout for due-date input and for every printed date.
    pub date_format: String,
}

/// On-disk shape of `config.json`; every field may be omitted.
#[derive(Deserialize, Default, Debug)]
struct ConfigFile {
    db_path: Option<PathBuf>,
    date_format: Option<String>,
}

impl Config {
    /// Default configuration rooted at the given data directory.
    pub fn with_storage(storage: &DataStorage) -> Self {
        Config {
            db_path: storage.path(DB_FILE_NAME),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Resolves the configuration from the platform data directory and the
    /// process environment.
    pub fn read() -> Result<Config> {
        let storage = DataStorage::new()?;
        Self::read_from(&storage, |key| std::env::var(key).ok())
    }

    /// Resolves the configuration rooted at `storage`, taking overrides from
    /// `env` instead of the process environment.
    pub fn read_from<F>(storage: &DataStorage, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_storage(storage);

        let config_file_path = storage.path(CONFIG_FILE_NAME);
        if config_file_path.exists() {
            debug!(path = %config_file_path.display(), "reading configuration file");
            let config_str = fs::read_to_string(&config_file_path)?;
            let file: ConfigFile = serde_json::from_str(&config_str)?;
            if let Some(db_path) = file.db_path {
                config.db_path = db_path;
            }
            if let Some(date_format) = file.date_format {
                config.date_format = date_format;
            }
        }

        if let Some(db_path) = env(ENV_DB_PATH).filter(|v| !v.is_empty()) {
            config.db_path = PathBuf::from(db_path);
        }
        if let Some(date_format) = env(ENV_DATE_FORMAT).filter(|v| !v.is_empty()) {
            config.date_format = date_format;
        }

        config.validate()?;
        debug!(db_path = %config.db_path.display(), date_format = %config.date_format, "configuration resolved");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(TodoError::Config("database path is empty".into()));
        }
        if !is_valid_date_format(&self.date_format) {
            return Err(TodoError::Config(format!("invalid date format '{}'", self.date_format)));
        }
        Ok(())
    }

    /// Writes the configuration as pretty-printed JSON into `storage`.
    pub fn save(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Opens the task database, creating its directory when missing.
    pub fn open_db(&self) -> Result<Db> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Db::open(&self.db_path)
    }
}

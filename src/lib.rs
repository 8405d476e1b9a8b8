//! # Todo - a single-user command-line task tracker
//!
//! Tasks carry a description, an optional due date and a completion state,
//! and are persisted in a local SQLite database.
//!
//! ## Layers
//!
//! - **Configuration**: database location and date layout ([`libs::config`])
//! - **Argument parsing**: command, status filter and typed option values ([`libs::args`])
//! - **Task repository**: CRUD and filtered queries ([`db::tasks`])
//! - **Command dispatch**: repository calls and text output ([`commands`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo::commands::dispatch;
//! use todo::libs::{args::parse_args, config::Config};
//!
//! let config = Config::read()?;
//! let parsed = parse_args(std::env::args_os(), &config.date_format);
//! dispatch(&parsed, &config, &mut std::io::stdout())?;
//! # Ok::<(), todo::libs::error::TodoError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;

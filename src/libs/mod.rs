//! Core library modules: configuration, argument parsing, the task model,
//! date handling, errors and user-facing messages.

pub mod args;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod task;

//! Storage layer built on SQLite.
//!
//! One connection is opened per invocation and released when the command
//! finishes. Cross-process consistency is left to SQLite's file locking;
//! the connection waits on a busy lock rather than failing immediately.

/// Connection handle: open, pragmas, close.
pub mod db;

/// Task repository: insert, fetch, update, state changes, delete, filtered count and list.
pub mod tasks;

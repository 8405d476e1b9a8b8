//! Output macros with debug-mode routing.
//!
//! Command output is written to the dispatcher's writer; these macros cover
//! the diagnostic side. In normal mode errors go straight to stderr. When
//! `TODO_DEBUG` or `RUST_LOG` is set, they are routed through `tracing`
//! instead, so that they interleave with the structured diagnostics emitted by the library.
//!
//! - **`msg_error!`**: Error output to stderr with ❌ prefix
//! - **`msg_debug!`**: Debug-only output, suppressed in normal mode
//!
//! ```rust
//! use todo::{msg_debug, msg_error};
//! use todo::libs::messages::Message;
//!
//! msg_error!(Message::FatalError("database is locked".into()));
//! msg_debug!(format!("Opening database at {}", "/tmp/todo.db"));
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

pub const ENV_DEBUG: &str = "TODO_DEBUG";

/// Returns `true` when `TODO_DEBUG` or `RUST_LOG` is set.
///
/// Environment variables are read once per process; later calls return the
/// cached value.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(ENV_DEBUG).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints an error to stderr with ❌ prefix, or logs it at error level in debug mode.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Logs a debug message; produces no output outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

//! User-facing message catalogue and output macros.
//!
//! All text the tool prints lives in [`Message`]; the `msg_*` macros decide
//! whether it goes to the console or through `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

//! Command handler layer.
//!
//! ## Files
//! - `build.rs` — `build`, the only command that writes.
//! - `inspect.rs` — `order`, `graph` and `check`.
//!
//! Handlers match CLI input, call into `services/*`, and print. Each returns
//! `Ok(false)` when the command is not theirs.

pub mod build;
pub mod inspect;

pub use build::handle_build_command;
pub use inspect::handle_inspect_commands;

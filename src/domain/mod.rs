//! Shared data model layer.
//!
//! ## Files
//! - `models.rs` — report and JSON envelope structs.
//! - `errors.rs` — `StitchError`, the typed failures surfaced to the CLI.
//!
//! Domain types stay data-only: no filesystem side effects here.
//!
//! Changes to `models.rs` change the `--json` output; keep
//! `docs/contracts/*` in sync.

pub mod errors;
pub mod models;

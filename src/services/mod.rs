//! Service layer: the dependency engine plus its I/O collaborators.
//!
//! ## Service map
//! - `extract.rs` — `*require '<path>'*` directive scanning and resolution.
//! - `graph.rs` — index-based dependency graph.
//! - `sort.rs` — Kahn topological sort.
//! - `cycle.rs` — cycle search for diagnostics.
//! - `diagnostics.rs` — recoverable warnings and the sink trait.
//! - `assemble.rs` — rendering, hashing and writing the output document.
//! - `pipeline.rs` — discovery → graph → order, shared by every command.
//! - `config.rs` — `stitch.toml` loading and flag precedence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Engine modules (`extract`, `graph`, `sort`, `cycle`) do no I/O.
//! - Keep command handlers thin; delegate to services.

pub mod assemble;
pub mod config;
pub mod cycle;
pub mod diagnostics;
pub mod extract;
pub mod graph;
pub mod output;
pub mod pipeline;
pub mod sort;

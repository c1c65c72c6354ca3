//! Service layer: one module per file utility.
//!
//! ## Service map
//! - `sales.rs` — per-token sales totals, sorted report.
//! - `outline.rs` — indented outline → per-project task counts.
//! - `config_store.rs` — flat `key=value` config read/write/merge.
//! - `logbook.rs` — timestamped append-only log lines.
//! - `replace.rs` — literal find-and-replace across a file.
//! - `grid.rs` — sequential number grid writer.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Scanners work on `BufRead`/`Write` so they test without touching disk.
//! - File-level wrappers own the handles and attach the path to errors.
//! - Keep command handlers thin; delegate to services.

pub mod config_store;
pub mod grid;
pub mod logbook;
pub mod outline;
pub mod output;
pub mod replace;
pub mod sales;

//! Command handler layer.
//!
//! ## Files
//! - `reports.rs` — `sales` / `outline` report commands.
//! - `files.rs` — `grid` / `log` / `replace` / `config` commands.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate file work to `services/*`.
//! - Keep behavior and output schema stable.

pub mod files;
pub mod reports;

pub use files::handle_file_commands;
pub use reports::handle_report_commands;

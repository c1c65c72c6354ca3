//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report structs in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.

pub mod models;

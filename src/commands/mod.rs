//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `journal.rs` — log/list/check against the workout journal.
//! - `report.rs` — report views and chart rendering.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod journal;
pub mod report;

pub use journal::handle_journal_commands;
pub use report::handle_report_commands;

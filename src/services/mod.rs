//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `journal.rs` — CSV journal persistence, config, entry validation, audit log.
//! - `normalize.rs` — raw row coercion into canonical workout records.
//! - `report.rs` — frequency/volume/PR/cardio aggregation.
//! - `chart.rs` — SVG bar chart rendering.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod chart;
pub mod journal;
pub mod normalize;
pub mod output;
pub mod report;

//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep record/report/config structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — journal records, report tables, config, output envelope.
//!
//! ## Rule of thumb
//! Domain types are data-only: derived values (e.g. volume) are pure
//! methods, never filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and the CSV journal
//! schema. Keep schema-impacting changes explicit and synchronized with
//! `docs/contracts/*`.

pub mod models;

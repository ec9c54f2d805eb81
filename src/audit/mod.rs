//! Audit logging for Budgie
//!
//! Every committed change is appended to `audit.log` as one JSON line with
//! the before/after values and a readable summary.
//!
//! - `AuditEntry`: one record (timestamp, operation, entity, values, summary)
//! - `AuditLogger`: appends and reads the JSONL file
//! - `generate_diff` / `budget_diff`: readable change summaries

mod diff;
mod entry;
mod logger;

pub use diff::{budget_diff, generate_diff};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

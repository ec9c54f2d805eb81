//! Service layer for Budgie
//!
//! Wraps the allocation engine with undo history, persistence and auditing.

pub mod allocation;

pub use allocation::{AddOutcome, AllocationService};

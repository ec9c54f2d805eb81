//! Core data models for Budgie
//!
//! Categories, the paycheck they divide, the ordered store that holds them
//! and the document that bundles both.

pub mod category;
pub mod icon;
pub mod ids;
pub mod money;
pub mod paycheck;
pub mod state;
pub mod store;

pub use category::{default_categories, Category, CategoryPatch, LockKind, LockMode, PALETTE};
pub use icon::{migrate_icon, Icon};
pub use ids::CategoryId;
pub use money::{parse_amount, parse_number, Money};
pub use paycheck::Paycheck;
pub use state::{AllocationSummary, BudgetState, Snapshot};
pub use store::CategoryStore;

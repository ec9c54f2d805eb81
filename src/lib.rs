//! Budgie - split a paycheck across budget categories
//!
//! This library provides the allocation engine behind the `budgie` binary.
//! Categories hold percentage shares of a paycheck; they can be locked to a
//! percentage or a dollar amount, paused, reordered and rebalanced, and every
//! committed change can be undone.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Categories, the paycheck and the budget document
//! - `engine`: Rebalancing rules as pure functions over the budget
//! - `history`: Bounded undo/redo snapshots
//! - `reorder`: Drag sessions over the active categories
//! - `storage`: JSON file storage layer
//! - `services`: Applies engine edits with history, persistence and audit
//! - `audit`: Audit logging system
//! - `export`: Text, CSV, JSON and YAML output
//! - `cli`, `display`, `tui`: User interfaces
//! - `config`, `logging`, `error`: Paths, settings, tracing and error types
//!
//! # Example
//!
//! ```rust,ignore
//! use budgie::config::{paths::BudgiePaths, settings::Settings};
//! use budgie::services::AllocationService;
//! use budgie::storage::Storage;
//!
//! let paths = BudgiePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let service = AllocationService::new(&storage);
//! service.set_paycheck("2500")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod history;
pub mod logging;
pub mod models;
pub mod reorder;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::BudgieError;

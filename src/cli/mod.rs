//! CLI command handlers
//!
//! Bridges the clap argument parsing with the allocation service.

pub mod audit;
pub mod budget;
pub mod category;
pub mod export;
pub mod paycheck;

pub use audit::handle_audit_command;
pub use budget::{handle_distribute_command, handle_redo_command, handle_undo_command};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportCommands};
pub use paycheck::{handle_paycheck_command, PaycheckCommands};

use crate::engine::EngineEvent;
use crate::models::BudgetState;

/// Print a note for each engine event
pub(crate) fn report_events(state: &BudgetState, events: impl IntoIterator<Item = EngineEvent>) {
    for event in events {
        println!("Note: {}", event.describe(&state.categories));
    }
}

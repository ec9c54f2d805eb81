//! Whole-budget CLI commands: even distribution and undo/redo

use crate::config::settings::Settings;
use crate::display::format_category_table;
use crate::error::BudgieResult;
use crate::services::AllocationService;
use crate::storage::Storage;

/// Split 100% evenly over the active categories, ignoring locks
pub fn handle_distribute_command(storage: &Storage, settings: &Settings) -> BudgieResult<()> {
    let service = AllocationService::new(storage);
    service.distribute_evenly()?;

    let state = service.state()?;
    println!("Distributed evenly across {} categories", state.categories.active_count());
    println!("{}", format_category_table(&state, &settings.currency_symbol));
    Ok(())
}

pub fn handle_undo_command(storage: &Storage) -> BudgieResult<()> {
    let service = AllocationService::new(storage);
    if service.undo()? {
        println!("Undone");
    } else {
        println!("Nothing to undo");
    }
    Ok(())
}

pub fn handle_redo_command(storage: &Storage) -> BudgieResult<()> {
    let service = AllocationService::new(storage);
    if service.redo()? {
        println!("Redone");
    } else {
        println!("Nothing to redo");
    }
    Ok(())
}

//! Paycheck CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_summary;
use crate::error::BudgieResult;
use crate::services::AllocationService;
use crate::storage::Storage;

use super::report_events;

/// Paycheck subcommands
#[derive(Subcommand)]
pub enum PaycheckCommands {
    /// Show the paycheck and how much of it is allocated
    Show,

    /// Set the paycheck and rebalance free categories
    Set {
        /// Amount (e.g. "2400" or "$2,400.50")
        amount: String,
    },

    /// Clear the paycheck (shares are kept, dollars show as --)
    Clear,
}

/// Handle a paycheck command
pub fn handle_paycheck_command(
    storage: &Storage,
    settings: &Settings,
    cmd: Option<PaycheckCommands>,
) -> BudgieResult<()> {
    let service = AllocationService::new(storage);

    match cmd.unwrap_or(PaycheckCommands::Show) {
        PaycheckCommands::Show => {}
        PaycheckCommands::Set { amount } => {
            let events = service.set_paycheck(&amount)?;
            report_events(&service.state()?, events);
        }
        PaycheckCommands::Clear => {
            service.clear_paycheck()?;
        }
    }

    let state = service.state()?;
    print!(
        "{}",
        format_summary(&state.paycheck, &state.summary(), &settings.currency_symbol)
    );
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use budgie::cli::{
    handle_audit_command, handle_category_command, handle_distribute_command,
    handle_export_command, handle_paycheck_command, handle_redo_command, handle_undo_command,
};
use budgie::config::{paths::BudgiePaths, settings::Settings};
use budgie::logging::init_logging;
use budgie::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budgie",
    version,
    about = "Split a paycheck across budget categories",
    long_about = "Budgie divides a paycheck into percentage shares. Categories can be \
                  locked to a percentage or a dollar amount, paused, reordered and \
                  rebalanced, with undo for every change."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Show or change the paycheck
    Paycheck {
        #[command(subcommand)]
        command: Option<budgie::cli::PaycheckCommands>,
    },

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(budgie::cli::CategoryCommands),

    /// Give every active category an equal share, ignoring locks
    Distribute,

    /// Undo the last change
    Undo,

    /// Redo the last undone change
    Redo,

    /// Export the allocation
    #[command(subcommand)]
    Export(budgie::cli::ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings and categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgiePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _log_guard = init_logging(&paths, &settings)?;

    // Initialize storage
    let storage = Storage::new(paths.clone(), &settings)?;
    let source = storage.load_all()?;
    info!(?source, base = %paths.base_dir().display(), "budget loaded");

    match cli.command {
        None | Some(Commands::Tui) => {
            budgie::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Paycheck { command }) => {
            handle_paycheck_command(&storage, &settings, command)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Distribute) => {
            handle_distribute_command(&storage, &settings)?;
        }
        Some(Commands::Undo) => {
            handle_undo_command(&storage)?;
        }
        Some(Commands::Redo) => {
            handle_redo_command(&storage)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Budgie at: {}", paths.base_dir().display());
            let created = budgie::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            if created {
                println!("Initialization complete!");
                println!();
                println!("Default categories have been created.");
                println!("Run 'budgie paycheck set <amount>' to enter your paycheck.");
            } else {
                println!("A budget already exists; nothing was overwritten.");
            }
        }
        Some(Commands::Config) => {
            println!("Budgie Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Log directory:    {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Undo depth:       {}", settings.history_capacity);
            println!("  Report width:     {}", settings.report_width);
            println!("  Log level:        {}", settings.log_level);
            println!("  Audit enabled:    {}", settings.audit_enabled);
        }
    }

    Ok(())
}

//! CLI commands for data export
//!
//! Renders the budget in one of the export formats and delivers it to
//! stdout or a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;
use tracing::warn;

use crate::config::settings::Settings;
use crate::error::BudgieResult;
use crate::export::{
    export_allocations_csv, export_full_json, export_full_yaml, export_text_report, ReportOptions,
};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Fixed-width text report of the active categories
    Text {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report width in characters (defaults to report_width in config.json)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// CSV table of the active categories with totals
    Csv {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Full document as JSON
    Json {
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Full document as YAML
    Yaml {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> BudgieResult<()> {
    let state = storage.budget.get()?;
    let mut buffer = Vec::new();

    let output = match cmd {
        ExportCommands::Text { output, width } => {
            let options = ReportOptions {
                width: width.unwrap_or(settings.report_width),
                currency_symbol: settings.currency_symbol.clone(),
            };
            export_text_report(&state, &options, &mut buffer)?;
            output
        }
        ExportCommands::Csv { output } => {
            export_allocations_csv(&state, &mut buffer)?;
            output
        }
        ExportCommands::Json { output, pretty } => {
            export_full_json(&state, &mut buffer, pretty)?;
            buffer.push(b'\n');
            output
        }
        ExportCommands::Yaml { output } => {
            export_full_yaml(&state, &mut buffer)?;
            output
        }
    };

    deliver(&buffer, output.as_deref());
    Ok(())
}

/// Write rendered output; failures are logged, never returned
fn deliver(bytes: &[u8], output: Option<&Path>) {
    let result = match output {
        Some(path) => File::create(path).and_then(|mut file| file.write_all(bytes)),
        None => io::stdout().lock().write_all(bytes),
    };

    match (result, output) {
        (Ok(()), Some(path)) => println!("Exported to: {}", path.display()),
        (Ok(()), None) => {}
        (Err(e), _) => {
            let target = output
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdout".to_string());
            warn!(%target, error = %e, "export delivery failed");
            eprintln!("Could not write export to {}: {}", target, e);
        }
    }
}

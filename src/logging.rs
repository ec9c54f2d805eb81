//! Diagnostic logging
//!
//! Logs go to `<base>/logs/budgie.log.YYYY-MM-DD`, never to the terminal, so
//! they cannot tear the TUI.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::paths::BudgiePaths;
use crate::config::settings::Settings;
use crate::error::{BudgieError, BudgieResult};

const LOG_FILE_PREFIX: &str = "budgie.log";

/// Install the file subscriber
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `Settings::log_level`. The returned guard flushes pending lines when
/// dropped, so keep it alive until the program exits.
pub fn init_logging(paths: &BudgiePaths, settings: &Settings) -> BudgieResult<WorkerGuard> {
    let log_dir = paths.log_dir();
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| BudgieError::Io(format!("Failed to create log directory: {}", e)))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter_for(settings))
        .with(file_layer)
        .try_init()
        .map_err(|e| BudgieError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

fn filter_for(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

//! File-backed diagnostic logging.
//!
//! The terminal belongs to the TUI, so log lines go to a file instead.

use std::fs::OpenOptions;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::SetupError;

/// Environment variable that overrides `log.level`
pub const LOG_ENV_VAR: &str = "KANBAN_LOG";

/// Build the filter from KANBAN_LOG if set, otherwise from the config
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, SetupError> {
    let directive = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| config.level.clone());
    EnvFilter::try_new(&directive).map_err(|source| SetupError::LogFilter { directive, source })
}

/// Open the log file and install the global subscriber.
///
/// The returned guard flushes pending lines on drop and must live until exit.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, SetupError> {
    let filter = build_filter(config)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|source| SetupError::LogFile {
            path: config.file.clone(),
            source,
        })?;

    let (writer, guard) = tracing_appender::non_blocking(file);

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(guard)
}

//! File-based tracing setup.
//!
//! The TUI owns stdout/stderr, so diagnostics go to a log file under
//! `${INSCHAT_HOME}/logs/`. Filtering is controlled by the `INSCHAT_LOG`
//! environment variable (standard `EnvFilter` syntax).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "INSCHAT_LOG";

/// Name of the log file inside the logs directory.
const LOG_FILE: &str = "inschat.log";

/// Initializes the global tracing subscriber writing to `logs_dir`.
///
/// Returns the worker guard; the caller must keep it alive for the process
/// lifetime or buffered log lines are lost. Calling this twice is a no-op
/// for the second caller.
pub fn init(logs_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("create logs directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(logs_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}

//! File logging for diagnostics. The terminal belongs to the table view, so
//! tracing output goes to a daily-rotated file under the config directory.

use crate::errors::{AppError, AppResult};
use std::path::Path;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

pub const LOG_PREFIX: &str = "rworklog";

pub fn enable_logging(log_dir: &Path, level: &str) -> AppResult<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(7)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| AppError::Config(format!("cannot open log directory: {e}")))?;

    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_PKG_NAME"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(appender)
        .try_init()
        .map_err(|e| AppError::Other(format!("logging already initialized: {e}")))
}

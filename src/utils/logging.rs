//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to
//! `~/.voyage/logs/voyage.log` only. Filter with `RUST_LOG`.

use super::persistence;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILENAME: &str = "voyage.log";

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn init_file_logging() -> io::Result<WorkerGuard> {
    let dir = persistence::log_dir()?;
    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILENAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    tracing::info!(log_file = %dir.join(LOG_FILENAME).display(), "logging initialized");
    Ok(guard)
}

//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive runs log to a size-rotated file
//! through a non-blocking writer; plain runs log to stderr.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Rotate the log file once it reaches 5 MB.
const MAX_LOG_BYTES: u64 = 5 * 1024 * 1024;
/// Rotated files kept next to the live one (`innerflame.log.1`).
const KEEP_ROTATED: usize = 1;

pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// File logging returns a [`WorkerGuard`] that must stay alive until exit;
/// dropping it flushes buffered lines.
pub fn init_tracing(
    default_filter: &str,
    target: LogTarget<'_>,
) -> io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    match target {
        LogTarget::File(path) => {
            let appender = rolling_appender(path, MAX_LOG_BYTES)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|err| io::Error::other(err.to_string()))?;
            Ok(Some(guard))
        }
        LogTarget::Stderr => {
            builder
                .with_writer(io::stderr)
                .try_init()
                .map_err(|err| io::Error::other(err.to_string()))?;
            Ok(None)
        }
    }
}

fn rolling_appender(
    path: &Path,
    max_bytes: u64,
) -> io::Result<BasicRollingFileAppender> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    BasicRollingFileAppender::new(
        path,
        RollingConditionBasic::new().max_size(max_bytes),
        KEEP_ROTATED,
    )
}

//! Logging Infrastructure
//!
//! Structured logging setup for hosts embedding the pricing engine. The
//! engine itself only emits `tracing` events.

use anyhow::Context;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// File name prefix for rolling log files
const LOG_FILE_PREFIX: &str = "pricing-engine";

/// Initialize the logger at `info` level on stdout
pub fn init_logger() -> anyhow::Result<()> {
    init_logger_with_file(None, false, None)
}

/// Initialize the logger with optional JSON format and file output
///
/// `log_level` accepts any `EnvFilter` directive (`"debug"`,
/// `"pricing_engine=trace,info"`). When `log_dir` exists, output goes to a
/// daily rolling file inside it instead of stdout.
///
/// Fails if the directive is invalid or a global subscriber is already set.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: bool,
    log_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log filter '{}'", level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = match (log_dir.filter(|dir| dir.exists()), json) {
        (Some(dir), true) => builder
            .json()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (Some(dir), false) => builder
            .with_ansi(false)
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

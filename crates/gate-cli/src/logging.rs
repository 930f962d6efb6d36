//! Logging setup.
//!
//! The TUI owns the terminal, so interactive runs log to a file under
//! `${GATE_HOME}/logs`; the plain subcommands log to stderr.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes stderr logging for non-interactive commands.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Initializes file logging for TUI runs.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// keep it alive for the lifetime of the app.
pub fn init_file(dir: PathBuf) -> Result<WorkerGuard> {
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, "gate.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Default to info level; RUST_LOG overrides.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

//! File logging for the terminal host.
//!
//! The game owns the terminal, so log lines go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`.
///
/// Filter comes from `RUST_LOG`, default `info`. A second call is a no-op.
pub fn init_tracing(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

//! Log file setup.
//!
//! The terminal is in raw mode on the alternate screen while the gallery runs,
//! so logs go to a file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber writing to `path`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns `Ok(false)`
/// when another subscriber was already installed.
pub fn init_file_logging(path: &Path) -> Result<bool> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    Ok(installed)
}

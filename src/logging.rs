//! File-backed `tracing` setup.
//!
//! The terminal is owned by the UI, so diagnostics never go to stdout or
//! stderr. Setting `GISTHUB_LOG` to a filter expression (e.g. `debug` or
//! `gisthub=trace`) writes events to `gisthub.log` under the cache directory.

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "GISTHUB_LOG";
const LOG_FILE: &str = "gisthub.log";

/// Install the global tracing subscriber if logging was requested.
///
/// Returns without installing anything when `GISTHUB_LOG` is unset, so a
/// default run carries no logging overhead.
pub fn init() -> Result<()> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    if filter.is_empty() {
        return Ok(());
    }

    let dir = app_dirs::get_cache_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("unable to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("unable to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!("logging initialized");
    Ok(())
}

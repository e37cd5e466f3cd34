//! File logging. The terminal belongs to the picker, so every event goes to
//! `emokbd.log` in the state directory.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::{Error, Result};

/// Install the global subscriber. `level` overrides `[logging] level`.
pub fn init_logging(log_file: &Path, config: &LoggingConfig, level: Option<&str>) -> Result<()> {
    let directive = level.unwrap_or(&config.level);
    let filter = EnvFilter::try_new(directive)
        .map_err(|err| Error::Logging(format!("invalid level '{}': {}", directive, err)))?;

    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_file.display(),
        "logging started"
    );
    Ok(())
}

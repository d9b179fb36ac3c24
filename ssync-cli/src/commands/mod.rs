pub mod analyze;
pub mod compare;
pub mod sync;

use anyhow::{Context, Result};
use ssync_core::{config, CoreError};

/// Defaults from `~/.ssync/config.yaml`; built-in defaults when there is no home.
pub(crate) fn load_config() -> Result<config::Config> {
    match config::load() {
        Err(CoreError::HomeNotFound) => Ok(config::Config::default()),
        other => other.context("failed to load ~/.ssync/config.yaml"),
    }
}

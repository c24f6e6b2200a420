use std::time::Duration;

use anyhow::{Result, ensure};

use crate::cli::CliArgs;

/// Static document mapping language names to their file extensions.
pub const DEFAULT_MAPPING_URL: &str = "https://gist.githubusercontent.com/ppisarczyk/43962d06686722d26d176fad46879d41/raw/211547723b4621a622fc56978d74aa416cbd1729/Programming_Languages_Extensions.json";

/// Simple application configuration derived from CLI arguments and defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub initial_query: String,
    pub debounce: Duration,
    pub mapping_url: String,
}

impl Config {
    /// Build configuration from CLI arguments with sensible defaults.
    pub fn from_cli(cli: &CliArgs) -> Result<Self> {
        ensure!(cli.debounce_ms > 0, "debounce-ms must be greater than zero");

        let initial_query = cli.username.clone().unwrap_or_default();
        let mapping_url = cli
            .mapping_url
            .clone()
            .unwrap_or_else(|| DEFAULT_MAPPING_URL.to_string());
        ensure!(!mapping_url.is_empty(), "mapping-url must not be empty");

        Ok(Self {
            initial_query,
            debounce: Duration::from_millis(cli.debounce_ms),
            mapping_url,
        })
    }
}

//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;
use tracing::{debug, info};

use super::types::AppConfig;
use crate::common::errors::Result;

/// Prefix of environment overrides (`ODDS__CONVERSION__STRATEGY=standard_ladder`)
pub const ENV_PREFIX: &str = "ODDS";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with `ODDS__`, sections split by `__`)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            debug!(path, "Loading configuration file");
            builder = builder.add_source(File::with_name(path).required(false));
        } else {
            debug!(path, "Configuration file not found, using defaults");
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config: AppConfig = builder.build()?.try_deserialize()?;

    info!(
        strategy = ?config.conversion.strategy,
        moneyline = ?config.conversion.moneyline,
        ladder_rungs = config.ladder.rungs.len(),
        "Configuration loaded"
    );

    Ok(config)
}

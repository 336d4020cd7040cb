mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and the environment.
///
/// A missing default file yields built-in defaults; a missing explicit
/// `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    let explicit = env::var("CONFIG_PATH").ok();
    let config_path = explicit
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    debug!("Loading configuration from: {}", config_path);

    let mut config = match load_from_path(&config_path).await {
        Ok(config) => config,
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound && explicit.is_none() => {
            debug!("No {} found, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

/// Parses a YAML configuration file without applying environment overrides.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(yaml: &str) -> Result<Config> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

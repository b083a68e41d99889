mod types;

pub use types::*;

use crate::{Error, Result};
use reqwest::Url;
use std::{env, path::Path};
use tracing::debug;

pub const CREDENTIALS_ENV: &str = "SBER_AUTH";

/// Loads the configuration file (if any), applies environment overrides and
/// checks that a GigaChat credential is present.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let config = load_from_path(&config_path).await?;
    let config = apply_env(config, |key| env::var(key).ok());
    validate(&config)?;

    Ok(config)
}

pub async fn load_from_path(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();

    if !tokio::fs::try_exists(config_path).await? {
        debug!(
            "No configuration file at {}, using defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overlays `SBER_AUTH`, `HOST` and `PORT` onto the loaded configuration.
pub fn apply_env(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(credentials) = lookup(CREDENTIALS_ENV).filter(|v| !v.trim().is_empty()) {
        config.gigachat.credentials = Some(credentials);
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
    config
}

pub fn validate(config: &Config) -> Result<()> {
    let has_credentials = config
        .gigachat
        .credentials
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty());

    if !has_credentials {
        return Err(Error::config(format!(
            "{} is not set in the environment",
            CREDENTIALS_ENV
        )));
    }
    if config.sources.is_empty() {
        return Err(Error::config("sources must not be empty"));
    }
    for source in &config.sources {
        let url = Url::parse(source)
            .map_err(|e| Error::config(format!("invalid source URL '{}': {}", source, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "source URL '{}' must use http or https",
                source
            )));
        }
    }

    Ok(())
}

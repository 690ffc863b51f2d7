//! Environment-driven server configuration.

use std::{path::PathBuf, time::Duration};

use crate::server::error::config::ConfigError;

const DEFAULT_INGAME_IDS_PATH: &str = "assets/ingame_ids.json";
const DEFAULT_BACKGROUND_IMAGES_DIR: &str = "assets/backgrounds";
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 60;

/// Server configuration read from environment variables at startup.
pub struct Config {
    /// Database connection string; migrations run against it at startup.
    pub database_url: String,
    /// Valkey/Redis connection string for the session store.
    pub valkey_url: String,
    /// JSON file holding the in-game identifier tables.
    pub ingame_ids_path: PathBuf,
    /// Directory listed by the background images endpoint.
    pub background_images_dir: PathBuf,
    /// Time budget for paginated listing queries.
    pub query_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let query_timeout = match optional_var("QUERY_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "QUERY_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_QUERY_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            ingame_ids_path: optional_var("INGAME_IDS_PATH")
                .unwrap_or_else(|| DEFAULT_INGAME_IDS_PATH.to_string())
                .into(),
            background_images_dir: optional_var("BACKGROUND_IMAGES_DIR")
                .unwrap_or_else(|| DEFAULT_BACKGROUND_IMAGES_DIR.to_string())
                .into(),
            query_timeout: Duration::from_secs(query_timeout),
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

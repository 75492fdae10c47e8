//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `SHOPLIST_DATA_DIR` - Data directory (default `./shoplist-data`)
//! - `SHOPLIST_BACKUP_DIR` - Export directory (default `<data dir>/Documents/ShoppingList`)
//! - `SHOPLIST_LOG_FORMAT` - `pretty` or `json` (default `pretty`)
//! - `RUST_LOG` - Log filter (default `shoplist=info`)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./shoplist-data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Shoplist CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Root of the local data
    pub data_dir: PathBuf,
    /// Directory backups are exported to
    pub backup_dir: PathBuf,
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty or unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_non_empty_env_or_default(
            "SHOPLIST_DATA_DIR",
            DEFAULT_DATA_DIR,
        )?);
        let backup_dir = match get_optional_env("SHOPLIST_BACKUP_DIR") {
            Some(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "SHOPLIST_BACKUP_DIR".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            Some(dir) => PathBuf::from(dir),
            None => data_dir.join("Documents").join("ShoppingList"),
        };
        let log_format = get_env_or_default("SHOPLIST_LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPLIST_LOG_FORMAT".to_string(), e))?;

        Ok(Self {
            data_dir,
            backup_dir,
            log_format,
        })
    }

    /// Directory holding one JSON file per settings store.
    #[must_use]
    pub fn settings_dir(&self) -> PathBuf {
        self.data_dir.join("settings")
    }

    /// File holding the shopping lists, products and autocompletes.
    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join("records.json")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable with a default value, rejecting empty values.
fn get_non_empty_env_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    let value = get_env_or_default(key, default);
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(value)
}

//! Configuration management
//!
//! Loads `config.toml` layered with `AUTH_DESK__*` environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::auth::ValidationPolicy;
use crate::storage::{DEFAULT_SESSION_KEY, DEFAULT_USERS_KEY};

/// Complete application configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// Where and under which keys account data is persisted
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// JSON file backing the key-value store
    pub data_file: String,

    /// Key holding the serialized user database
    pub users_key: String,

    /// Key holding the logged-in email
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: "data/local_storage.json".to_string(),
            users_key: DEFAULT_USERS_KEY.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        // Installed layout first, then the working directory
        let config_paths = ["local-auth-desk/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Config::builder()
                .add_source(File::with_name(config_path))
                .add_source(Environment::with_prefix("AUTH_DESK").separator("__"))
                .build()
            {
                Ok(settings) => {
                    let config: AppConfig = settings.try_deserialize()?;
                    config.validate()?;
                    return Ok(config);
                }
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            config::ConfigError::Message(format!("No config file found in {config_paths:?}"))
        }))
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.storage.data_file.is_empty() {
            return Err(config::ConfigError::Message(
                "storage.data_file cannot be empty".into(),
            ));
        }

        if self.storage.users_key.is_empty() || self.storage.session_key.is_empty() {
            return Err(config::ConfigError::Message(
                "storage keys cannot be empty".into(),
            ));
        }

        if self.storage.users_key == self.storage.session_key {
            return Err(config::ConfigError::Message(
                "users_key and session_key must differ".into(),
            ));
        }

        if self.validation.min_name_length == 0 || self.validation.min_password_length == 0 {
            return Err(config::ConfigError::Message(
                "minimum lengths must be greater than 0".into(),
            ));
        }

        if self.validation.max_age_years == 0 {
            return Err(config::ConfigError::Message(
                "max_age_years must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl StorageConfig {
    /// Get the data file as PathBuf
    pub fn data_file_path(&self) -> PathBuf {
        PathBuf::from(&self.data_file)
    }
}

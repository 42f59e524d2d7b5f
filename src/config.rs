//! Configuration management for the credential loader
//!
//! Values come from built-in defaults, an optional `config.toml` in the working
//! directory, and `USER_LOADER_*` environment variables, in that order.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_USERS_FILE: &str = "users.csv";
const DEFAULT_DELIMITER: &str = ",";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_DUPLICATE_POLICY: &str = "permissive";
const DEFAULT_LOG_LEVEL: &str = "info";

/// How to treat several rows carrying the same username and password
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// At least one match authenticates
    #[default]
    Permissive,
    /// Exactly one match authenticates
    Strict,
}

/// Loader configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoaderConfig {
    /// Source read by the CLI when no path is given
    /// Environment: USER_LOADER_USERS_FILE
    pub users_file: String,

    /// Single ASCII field delimiter
    pub delimiter: String,

    /// chrono format of the creation_date column
    pub date_format: String,

    pub duplicate_policy: DuplicatePolicy,

    /// Default env_logger filter when RUST_LOG is unset
    pub log_level: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            users_file: DEFAULT_USERS_FILE.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Load configuration from ./config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file stem with environment overrides
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("users_file", DEFAULT_USERS_FILE)?
            .set_default("delimiter", DEFAULT_DELIMITER)?
            .set_default("date_format", DEFAULT_DATE_FORMAT)?
            .set_default("duplicate_policy", DEFAULT_DUPLICATE_POLICY)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("USER_LOADER"))
            .build()?;

        let config: LoaderConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.users_file.is_empty() {
            return Err(ConfigError::Message("users_file cannot be empty".into()));
        }

        if self.delimiter.len() != 1 || !self.delimiter.is_ascii() {
            return Err(ConfigError::Message(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }

        if self.date_format.is_empty() {
            return Err(ConfigError::Message("date_format cannot be empty".into()));
        }

        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }
}

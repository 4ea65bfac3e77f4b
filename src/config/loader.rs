//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{DutyConfig, DEFAULT_RESET_PATH, DEFAULT_SET_PATH, DEFAULT_STATUS_PATH};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the config file.
pub const CONFIG_FILE_ENV: &str = "DUTY_CONFIG_FILE";

/// Config file used when nothing else is specified.
pub const DEFAULT_CONFIG_FILE: &str = "./duty.toml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DutyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML document.
///
/// Empty admin paths fall back to their defaults. Warnings are left to the
/// caller via [`collect_warnings`](crate::config::validation::collect_warnings).
pub fn parse_config(content: &str) -> Result<DutyConfig, ConfigError> {
    let mut config: DutyConfig = toml::from_str(content)?;
    apply_path_defaults(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn apply_path_defaults(config: &mut DutyConfig) {
    if config.status.is_empty() {
        config.status = DEFAULT_STATUS_PATH.to_string();
    }
    if config.reset.is_empty() {
        config.reset = DEFAULT_RESET_PATH.to_string();
    }
    if config.set.is_empty() {
        config.set = DEFAULT_SET_PATH.to_string();
    }
}

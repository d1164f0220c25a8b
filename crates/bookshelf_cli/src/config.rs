//! Process configuration read from the environment.
//!
//! # Invariants
//! - Values are validated here, before logging starts.
//! - An unset log directory disables file logging instead of failing.

use bookshelf_core::default_log_level;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub const ENV_LOG_LEVEL: &str = "BOOKSHELF_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "BOOKSHELF_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelativeLogDir(dir) => {
                write!(f, "{ENV_LOG_DIR} must be an absolute path, got `{dir}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(ENV_LOG_LEVEL).ok(),
            std::env::var(ENV_LOG_DIR).ok(),
        )
    }

    fn from_values(level: Option<String>, dir: Option<String>) -> Result<Self, ConfigError> {
        let log_level = level
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        let log_dir = match dir.map(|value| value.trim().to_string()) {
            Some(value) if value.is_empty() => None,
            Some(value) if !Path::new(&value).is_absolute() => {
                return Err(ConfigError::RelativeLogDir(value));
            }
            other => other,
        };

        Ok(Self { log_level, log_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, ConfigError};
    use bookshelf_core::default_log_level;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = CliConfig::from_values(None, Some("  ".to_string())).unwrap();
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = CliConfig::from_values(Some("info".to_string()), Some("logs".to_string()))
            .unwrap_err();
        assert_eq!(err, ConfigError::RelativeLogDir("logs".to_string()));
    }
}

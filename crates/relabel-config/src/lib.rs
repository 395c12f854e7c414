//! Configuration management for relabel

pub mod logging;

use relabel_foundation::protocol::MatchStrategy;
use relabel_foundation::{RelabelError, RelabelResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Command id the rename handler registers under unless configured otherwise
pub const DEFAULT_RENAME_COMMAND: &str = "relabel.refactoring.rename";

/// Prefix of environment variable overrides, e.g. `RELABEL__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "RELABEL__";

const CONFIG_PATHS: [&str; 2] = ["relabel.toml", ".relabel/config.toml"];

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub rename: RenameConfig,
}

/// Log output format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format for development
    #[default]
    Pretty,
    /// Structured JSON format for production
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Rename command configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameConfig {
    /// Workspace command id served by the rename handler
    pub command_id: String,
    /// Used when similar declarations are requested without a match strategy
    pub default_match_strategy: MatchStrategy,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            command_id: DEFAULT_RENAME_COMMAND.to_string(),
            default_match_strategy: MatchStrategy::Exact,
        }
    }
}

impl AppConfig {
    /// Load configuration from config files and the environment
    ///
    /// Priority order (highest to lowest):
    /// 1. Environment variables (`RELABEL__*`, `__` separates nested keys)
    /// 2. `relabel.toml` or `.relabel/config.toml`, first one found
    /// 3. Default values
    pub fn load() -> RelabelResult<Self> {
        use figment::providers::{Format, Serialized, Toml};
        use figment::Figment;

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = CONFIG_PATHS.iter().map(Path::new).find(|p| p.exists()) {
            tracing::info!(path = %path.display(), "Loading TOML configuration");
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(figment.merge(Self::env_provider()))
    }

    /// Load configuration from an explicit file over the defaults, then the environment
    pub fn load_from(path: &Path) -> RelabelResult<Self> {
        use figment::providers::{Format, Serialized, Toml};
        use figment::Figment;

        if !path.exists() {
            return Err(RelabelError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "Loading explicit configuration file");

        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Self::env_provider());

        Self::extract(figment)
    }

    fn env_provider() -> figment::providers::Env {
        figment::providers::Env::prefixed(ENV_PREFIX).split("__")
    }

    fn extract(figment: figment::Figment) -> RelabelResult<Self> {
        let config: AppConfig = figment
            .extract()
            .map_err(|e| RelabelError::config(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;

        tracing::debug!(
            command_id = %config.rename.command_id,
            log_level = %config.logging.level,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> RelabelResult<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(RelabelError::config(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        if self.rename.command_id.trim().is_empty() {
            return Err(RelabelError::config("Rename command id cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.rename.command_id, DEFAULT_RENAME_COMMAND);
        assert_eq!(config.rename.default_match_strategy, MatchStrategy::Exact);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.rename.command_id = "  ".to_string();
        assert!(config.validate().is_err());
    }
}

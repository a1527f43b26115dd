//! Configuration management for schemaview.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. An explicit file passed on the command line
//! 3. Project-local `schemaview.toml` file
//! 4. User config `~/.config/schemaview/config.toml`
//! 5. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema model configuration.
    pub model: ModelConfig,

    /// Tree presentation configuration.
    pub view: ViewConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./schemaview.toml` (project local)
    /// 2. `~/.config/schemaview/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(LOCAL_CONFIG_FILE).exists() {
            return Self::from_file(LOCAL_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(suffix) = std::env::var("SCHEMAVIEW_TITLE_SUFFIX") {
            self.model.title_suffix = suffix;
        }
        if let Ok(marker) = std::env::var("SCHEMAVIEW_REQUIRED_MARKER") {
            self.view.required_marker = marker;
        }
        if let Ok(file) = std::env::var("SCHEMAVIEW_LOG_FILE") {
            self.logging.file = Some(PathBuf::from(file));
        }
        if let Ok(level) = std::env::var("SCHEMAVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Schema model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Suffix removed from object titles used as type labels.
    /// An empty string disables stripping.
    pub title_suffix: String,

    /// Draft assumed for documents without `$schema`.
    pub default_draft: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            default_draft: DEFAULT_DRAFT.to_string(),
        }
    }
}

/// Tree presentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Marker appended to required property labels.
    pub required_marker: String,

    /// Whether the Type column starts visible.
    pub show_type_column: bool,

    /// Width of the details pane (percent of the screen).
    pub details_width_percent: u16,

    /// Whether `definitions` groups start expanded.
    pub expand_definitions: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            required_marker: DEFAULT_REQUIRED_MARKER.to_string(),
            show_type_column: DEFAULT_SHOW_TYPE_COLUMN,
            details_width_percent: DEFAULT_DETAILS_WIDTH_PERCENT,
            expand_definitions: DEFAULT_EXPAND_DEFINITIONS,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// File that receives log output while the TUI owns the terminal.
    pub file: Option<PathBuf>,

    /// Log level filter (`RUST_LOG` takes precedence).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.title_suffix, DEFAULT_TITLE_SUFFIX);
        assert_eq!(config.model.default_draft, DRAFT_04);
        assert_eq!(config.view.required_marker, DEFAULT_REQUIRED_MARKER);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[model]"));
        assert!(toml_str.contains("[view]"));
        assert!(toml_str.contains("[logging]"));
    }
}

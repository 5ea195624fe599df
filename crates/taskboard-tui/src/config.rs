/*
[INPUT]:  Optional YAML configuration file
[OUTPUT]: Parsed application configuration with defaults
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use taskboard_store::SortKey;

/// Top-level configuration for the task board
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Sort order selected at startup
    #[serde(default)]
    pub default_sort: SortKey,
    /// UI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Number of log lines kept for the activity panel
    #[serde(default = "default_log_buffer_capacity")]
    pub log_buffer_capacity: usize,
    /// Whether the activity panel is visible at startup
    #[serde(default)]
    pub show_log_panel: bool,
    /// Tracing filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Tasks added when the board opens (kept in memory only)
    #[serde(default)]
    pub seed_tasks: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            tick_rate_ms: default_tick_rate_ms(),
            log_buffer_capacity: default_log_buffer_capacity(),
            show_log_panel: false,
            log_level: default_log_level(),
            seed_tasks: Vec::new(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_buffer_capacity() -> usize {
    500
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the default location if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            anyhow::bail!("tick_rate_ms must be greater than zero");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("log_level cannot be empty");
        }
        Ok(())
    }
}

/// `<config_dir>/taskboard/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskboard").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_sort, SortKey::CreatedAt);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn parses_all_fields() {
        let yaml = r#"
default_sort: priority
tick_rate_ms: 100
log_buffer_capacity: 50
show_log_panel: true
log_level: debug
seed_tasks:
  - Buy milk
  - Water plants
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_sort, SortKey::Priority);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_buffer_capacity, 50);
        assert!(config.show_log_panel);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.seed_tasks, vec!["Buy milk", "Water plants"]);
    }

    #[test]
    fn unknown_sort_key_is_an_error() {
        assert!(AppConfig::from_yaml("default_sort: alphabetical").is_err());
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let err = AppConfig::from_yaml("tick_rate_ms: 0").unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));
    }
}

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub schedule: ScheduleSettings,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.schedule.recent_window_days == 0 {
            errors.push("recent_window_days must be at least 1".to_string());
        }

        if self.schedule.max_page_limit == 0 {
            errors.push("max_page_limit must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = ScheduleSettings::default();
        Self {
            schedule: ScheduleSettings {
                recent_window_days: if self.schedule.recent_window_days == 0 {
                    defaults.recent_window_days
                } else {
                    self.schedule.recent_window_days
                },
                max_page_limit: if self.schedule.max_page_limit == 0 {
                    defaults.max_page_limit
                } else {
                    self.schedule.max_page_limit
                },
            },
        }
    }
}

/// Cleaning-schedule query settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,
    #[serde(default = "default_max_page_limit")]
    pub max_page_limit: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            recent_window_days: default_recent_window_days(),
            max_page_limit: default_max_page_limit(),
        }
    }
}

fn default_recent_window_days() -> u32 {
    7
}

fn default_max_page_limit() -> u32 {
    1000
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

use super::{AppConfig, AppConfigError, ScheduleConfig};
use std::path::PathBuf;

/// Configuration for opening a repository on disk.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
    pub schedule: ScheduleConfig,
}

impl Config {
    /// Reads `config.toml` under `base_path`, falling back to defaults for a
    /// missing file or invalid values.
    pub fn load(base_path: PathBuf) -> Result<Self, AppConfigError> {
        let app = AppConfig::load(&AppConfig::path(&base_path))?.with_defaults_for_invalid();
        Ok(Self {
            base_path,
            schedule: ScheduleConfig::from(&app.schedule),
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("dhobi.redb")
    }
}

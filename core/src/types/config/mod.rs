mod app;
mod base;
mod schedule;

pub use app::{AppConfig, AppConfigError, ScheduleSettings};
pub use base::Config;
pub use schedule::ScheduleConfig;

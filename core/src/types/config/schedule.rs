use super::ScheduleSettings;
use crate::schedule::DEFAULT_RECENT_WINDOW;
use crate::types::page::MAX_PAGE_LIMIT;
use std::time::Duration;

/// Query policy settings consumed by the repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Trailing window used by recently-cleaned listings when the caller
    /// gives none.
    pub recent_window: Duration,
    pub max_page_limit: usize,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            recent_window: DEFAULT_RECENT_WINDOW,
            max_page_limit: MAX_PAGE_LIMIT,
        }
    }
}

impl From<&ScheduleSettings> for ScheduleConfig {
    fn from(settings: &ScheduleSettings) -> Self {
        Self {
            recent_window: Duration::from_secs(u64::from(settings.recent_window_days) * 24 * 60 * 60),
            max_page_limit: settings.max_page_limit as usize,
        }
    }
}

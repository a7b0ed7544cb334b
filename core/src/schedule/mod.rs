//! Cleaning-schedule calculator.
//!
//! Pure functions that derive `next_cleaning_date` and classify items
//! against a caller-supplied `now`. Nothing here reads a clock or touches
//! storage.

use crate::types::CleaningInterval;
use std::time::{Duration, SystemTime};
use thiserror::Error;

/// Trailing window used for "recently cleaned" when none is configured.
pub const DEFAULT_RECENT_WINDOW: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cleaning interval must be non-negative, got {0} seconds")]
    NegativeInterval(i64),

    #[error("next cleaning date is outside the representable time range")]
    Overflow,
}

/// Validates a raw interval in seconds.
pub fn validate_interval(interval_seconds: i64) -> Result<CleaningInterval, ScheduleError> {
    CleaningInterval::try_new(interval_seconds)
        .map_err(|_| ScheduleError::NegativeInterval(interval_seconds))
}

/// Returns `last_cleaned + interval_seconds`.
pub fn compute_next_cleaning(
    last_cleaned: SystemTime,
    interval_seconds: i64,
) -> Result<SystemTime, ScheduleError> {
    next_cleaning_after(last_cleaned, validate_interval(interval_seconds)?)
}

pub fn next_cleaning_after(
    last_cleaned: SystemTime,
    interval: CleaningInterval,
) -> Result<SystemTime, ScheduleError> {
    last_cleaned
        .checked_add(interval.as_duration())
        .ok_or(ScheduleError::Overflow)
}

/// An item is due once its next cleaning date has been reached.
pub fn is_due(next_cleaning_date: SystemTime, now: SystemTime) -> bool {
    next_cleaning_date <= now
}

/// True iff `now - window <= last_cleaned <= now`.
///
/// Cleanings recorded in the future relative to `now` are not recent.
pub fn is_recently_cleaned(last_cleaned: SystemTime, now: SystemTime, window: Duration) -> bool {
    if last_cleaned > now {
        return false;
    }

    match now.checked_sub(window) {
        Some(window_start) => window_start <= last_cleaned,
        // Window reaches past the earliest representable time.
        None => true,
    }
}

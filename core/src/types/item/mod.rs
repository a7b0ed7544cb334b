//! Public item types.
//!
//! `ItemDraft` is what callers submit, `ClothingItem` is what they get back.
//! Persisted state lives in [`ItemRecord`], whose constructor and
//! [`SchedulePatch`] are the only ways to set the schedule fields.

use crate::schedule::{self, ScheduleError};
use crate::types::{CleaningInterval, ItemId, ItemName, ItemType};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

pub(crate) mod versioned_record;

pub use versioned_record::latest_record::ItemRecord;

/// Caller input for creating an item. Fields are unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    #[serde(rename = "clothingItemType")]
    pub item_type: String,
    #[serde(default)]
    pub image: String,
    pub last_cleaned: SystemTime,
    pub cleaning_interval_seconds: i64,
}

/// A stored clothing item as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub name: ItemName,
    #[serde(rename = "clothingItemType")]
    pub item_type: ItemType,
    pub image: String,
    pub last_cleaned: SystemTime,
    #[serde(rename = "cleaning_interval_seconds")]
    pub cleaning_interval: CleaningInterval,
    pub next_cleaning_date: SystemTime,
}

/// The fieldset written by interval updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePatch {
    pub cleaning_interval: CleaningInterval,
}

impl SchedulePatch {
    pub fn new(cleaning_interval: CleaningInterval) -> Self {
        Self { cleaning_interval }
    }

    /// Sets the interval and recomputes `next_cleaning_date` from the
    /// record's stored `last_cleaned`. The record is untouched on error.
    pub fn apply(&self, record: &mut ItemRecord) -> Result<(), ScheduleError> {
        let next_cleaning_date =
            schedule::next_cleaning_after(record.last_cleaned, self.cleaning_interval)?;

        record.cleaning_interval = self.cleaning_interval;
        record.next_cleaning_date = next_cleaning_date;
        Ok(())
    }
}

/// Outcome of a bulk interval update over one item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeIntervalUpdate {
    pub item_type: String,
    #[serde(rename = "new_interval_seconds")]
    pub new_interval: CleaningInterval,
    pub modified_count: usize,
}

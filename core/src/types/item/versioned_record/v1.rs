use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::RecordVariant;
use crate::schedule::{self, ScheduleError};
use crate::types::{CleaningInterval, ClothingItem, ItemId, ItemName, ItemType};

/// Persisted item state.
///
/// `next_cleaning_date` always equals `last_cleaned + cleaning_interval`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub(crate) name: ItemName,
    pub(crate) item_type: ItemType,
    pub(crate) image: String,
    pub(crate) last_cleaned: SystemTime,
    pub(crate) cleaning_interval: CleaningInterval,
    pub(crate) next_cleaning_date: SystemTime,
}

impl RecordVariant for ItemRecord {
    const VERSION: u8 = 1;
}

impl ItemRecord {
    pub fn new(
        name: ItemName,
        item_type: ItemType,
        image: String,
        last_cleaned: SystemTime,
        cleaning_interval: CleaningInterval,
    ) -> Result<Self, ScheduleError> {
        let next_cleaning_date = schedule::next_cleaning_after(last_cleaned, cleaning_interval)?;
        Ok(Self {
            name,
            item_type,
            image,
            last_cleaned,
            cleaning_interval,
            next_cleaning_date,
        })
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn item_type(&self) -> &ItemType {
        &self.item_type
    }

    pub fn last_cleaned(&self) -> SystemTime {
        self.last_cleaned
    }

    pub fn cleaning_interval(&self) -> CleaningInterval {
        self.cleaning_interval
    }

    pub fn next_cleaning_date(&self) -> SystemTime {
        self.next_cleaning_date
    }

    pub fn to_item(&self, id: ItemId) -> ClothingItem {
        ClothingItem {
            id,
            name: self.name.clone(),
            item_type: self.item_type.clone(),
            image: self.image.clone(),
            last_cleaned: self.last_cleaned,
            cleaning_interval: self.cleaning_interval,
            next_cleaning_date: self.next_cleaning_date,
        }
    }
}

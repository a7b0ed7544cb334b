//! Item repository: the query and mutation policy layered on an
//! [`ItemStore`].
//!
//! Every operation that depends on the current time takes `now` from the
//! caller. Schedules are recomputed by the store in the same write that
//! changes an interval.

use crate::error::{Error, Result, ValidationError};
use crate::schedule;
use crate::store::{ItemQuery, ItemStore, RedbStore};
use crate::types::{
    ClothingItem, Config, ItemDraft, ItemId, ItemName, ItemRecord, ItemType, Page, ScheduleConfig,
    SchedulePatch, TypeIntervalUpdate,
};
use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

/// Items grouped by type. Within a group items keep storage order.
///
/// Paging happens before grouping, so one type's items can be split across
/// consecutive pages.
pub type ItemsByType = BTreeMap<ItemType, Vec<ClothingItem>>;

pub struct ClothingRepository<S> {
    store: S,
    config: ScheduleConfig,
}

impl ClothingRepository<RedbStore> {
    /// Opens the on-disk repository described by `config`.
    pub fn open(config: Config) -> Result<Self> {
        let store = RedbStore::open(&config)?;
        Ok(Self::new(store, config.schedule))
    }
}

impl<S: ItemStore> ClothingRepository<S> {
    pub fn new(store: S, config: ScheduleConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    fn bounded(&self, page: Page) -> Page {
        let bounded = page.bounded(self.config.max_page_limit);
        if bounded != page {
            warn!(
                requested = page.limit(),
                max = self.config.max_page_limit,
                "page limit clamped"
            );
        }
        bounded
    }
}

/// Create operations.
impl<S: ItemStore> ClothingRepository<S> {
    /// Validates the draft, derives its schedule and stores it.
    pub fn create(&mut self, draft: ItemDraft) -> Result<ClothingItem> {
        let name = ItemName::try_new(draft.name).map_err(ValidationError::from)?;
        let item_type = ItemType::try_new(draft.item_type).map_err(ValidationError::from)?;
        if draft.last_cleaned < SystemTime::UNIX_EPOCH {
            return Err(ValidationError::LastCleanedBeforeEpoch.into());
        }
        let interval = schedule::validate_interval(draft.cleaning_interval_seconds)?;

        let record = ItemRecord::new(name, item_type, draft.image, draft.last_cleaned, interval)?;
        let id = self.store.insert(record)?;
        let item = self.get(id)?;

        info!(
            %id,
            name = %item.name,
            item_type = %item.item_type,
            interval_secs = %item.cleaning_interval,
            "created clothing item"
        );
        Ok(item)
    }
}

/// Read operations.
impl<S: ItemStore> ClothingRepository<S> {
    pub fn get(&self, id: ItemId) -> Result<ClothingItem> {
        self.store.find_by_id(id)?.ok_or(Error::NotFound(id))
    }

    /// Returns a page of items grouped by type. Types without items in the
    /// page do not appear.
    pub fn list_all(&self, page: Page) -> Result<ItemsByType> {
        let items = self.store.find_all(self.bounded(page))?;

        let mut grouped = ItemsByType::new();
        for item in items {
            grouped.entry(item.item_type.clone()).or_default().push(item);
        }

        debug!(groups = grouped.len(), "listed items by type");
        Ok(grouped)
    }

    /// Case-insensitive substring search on item names.
    pub fn search_by_name(&self, name: &str, page: Page) -> Result<Vec<ClothingItem>> {
        let query = ItemQuery::NameContains(name.to_string());
        Ok(self.store.find_where(&query, self.bounded(page))?)
    }

    pub fn list_by_type(&self, item_type: &str, page: Page) -> Result<Vec<ClothingItem>> {
        let query = ItemQuery::TypeIs(item_type.to_string());
        Ok(self.store.find_where(&query, self.bounded(page))?)
    }

    /// Items due at `now`, most overdue first.
    pub fn list_needing_cleaning(&self, now: SystemTime, page: Page) -> Result<Vec<ClothingItem>> {
        let items = self
            .store
            .find_where(&ItemQuery::DueBy(now), self.bounded(page))?;
        debug!(count = items.len(), "listed items needing cleaning");
        Ok(items)
    }

    /// Items cleaned within `window` before `now`, most recent first.
    ///
    /// Without a window the configured default applies.
    pub fn list_recently_cleaned(
        &self,
        now: SystemTime,
        window: Option<Duration>,
        page: Page,
    ) -> Result<Vec<ClothingItem>> {
        let window = window.unwrap_or(self.config.recent_window);
        let query = ItemQuery::CleanedWithin { now, window };
        let items = self.store.find_where(&query, self.bounded(page))?;
        debug!(
            count = items.len(),
            window_secs = window.as_secs(),
            "listed recently cleaned items"
        );
        Ok(items)
    }
}

/// Update operations.
impl<S: ItemStore> ClothingRepository<S> {
    /// Sets one item's interval and recomputes its next cleaning date from
    /// the stored `last_cleaned`.
    pub fn update_interval(&mut self, id: ItemId, new_interval_seconds: i64) -> Result<ClothingItem> {
        let interval = schedule::validate_interval(new_interval_seconds)?;

        if !self.store.update_fields(id, &SchedulePatch::new(interval))? {
            return Err(Error::NotFound(id));
        }
        let item = self.get(id)?;

        info!(%id, interval_secs = %interval, "updated cleaning interval");
        Ok(item)
    }

    /// Applies [`update_interval`](Self::update_interval) to every item of
    /// exactly `item_type`. No matches is not an error.
    pub fn update_interval_for_type(
        &mut self,
        item_type: &str,
        new_interval_seconds: i64,
    ) -> Result<TypeIntervalUpdate> {
        let interval = schedule::validate_interval(new_interval_seconds)?;

        let query = ItemQuery::TypeIs(item_type.to_string());
        let modified_count = self
            .store
            .update_fields_where(&query, &SchedulePatch::new(interval))?;

        info!(
            item_type,
            interval_secs = %interval,
            modified_count,
            "updated cleaning interval for type"
        );
        Ok(TypeIntervalUpdate {
            item_type: item_type.to_string(),
            new_interval: interval,
            modified_count,
        })
    }
}

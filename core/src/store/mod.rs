//! Item storage boundary.
//!
//! The repository talks to storage only through [`ItemStore`]. Two
//! implementations ship with the crate: [`MemoryStore`] and the redb-backed
//! [`RedbStore`].

use crate::schedule::{self, ScheduleError};
use crate::types::{ClothingItem, ItemId, ItemRecord, Page, SchedulePatch};
use std::cmp::Ordering;
use std::time::{Duration, SystemTime};

pub(crate) mod db;
pub(crate) mod memory;

pub use db::RedbStore;
pub use memory::MemoryStore;

pub mod error {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Schedule error: {0}")]
        Schedule(#[from] ScheduleError),

        #[error("Item id space exhausted")]
        IdsExhausted,

        #[error("Index entry points at missing item {0}")]
        DanglingIndex(ItemId),
    }
}

pub use error::StoreError;

/// Filters understood by [`ItemStore::find_where`] and
/// [`ItemStore::update_fields_where`].
///
/// Each variant fixes the order in which matches are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemQuery {
    /// Case-insensitive substring match on the name. Id order.
    NameContains(String),
    /// Exact match on the item type. Id order.
    TypeIs(String),
    /// Items whose next cleaning date is at or before the given instant.
    /// Ordered by next cleaning date, then id.
    DueBy(SystemTime),
    /// Items cleaned inside the trailing window ending at `now`.
    /// Ordered by last cleaning, most recent first, then id.
    CleanedWithin { now: SystemTime, window: Duration },
}

impl ItemQuery {
    pub fn matches(&self, record: &ItemRecord) -> bool {
        match self {
            ItemQuery::NameContains(needle) => record
                .name()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            ItemQuery::TypeIs(item_type) => record.item_type().as_str() == item_type.as_str(),
            ItemQuery::DueBy(now) => schedule::is_due(record.next_cleaning_date(), *now),
            ItemQuery::CleanedWithin { now, window } => {
                schedule::is_recently_cleaned(record.last_cleaned(), *now, *window)
            }
        }
    }

    /// Result ordering for matches of this query.
    pub fn compare(&self, a: (ItemId, &ItemRecord), b: (ItemId, &ItemRecord)) -> Ordering {
        let (a_id, a) = a;
        let (b_id, b) = b;
        match self {
            ItemQuery::NameContains(_) | ItemQuery::TypeIs(_) => a_id.cmp(&b_id),
            ItemQuery::DueBy(_) => a
                .next_cleaning_date()
                .cmp(&b.next_cleaning_date())
                .then(a_id.cmp(&b_id)),
            ItemQuery::CleanedWithin { .. } => b
                .last_cleaned()
                .cmp(&a.last_cleaned())
                .then(a_id.cmp(&b_id)),
        }
    }
}

/// Keyed storage for item records.
///
/// Implementations assign ids in increasing insertion order. Writes take
/// `&mut self`; callers needing shared access wrap the store themselves.
pub trait ItemStore {
    /// Persists a new record and returns its assigned id.
    fn insert(&mut self, record: ItemRecord) -> Result<ItemId, StoreError>;

    fn find_by_id(&self, id: ItemId) -> Result<Option<ClothingItem>, StoreError>;

    /// All items in id order.
    fn find_all(&self, page: Page) -> Result<Vec<ClothingItem>, StoreError>;

    /// Matching items in the query's order.
    fn find_where(&self, query: &ItemQuery, page: Page) -> Result<Vec<ClothingItem>, StoreError>;

    /// Applies `patch` to one item. Returns `false` if the id is unknown.
    fn update_fields(&mut self, id: ItemId, patch: &SchedulePatch) -> Result<bool, StoreError>;

    /// Applies `patch` to every matching item and returns how many were
    /// rewritten.
    fn update_fields_where(
        &mut self,
        query: &ItemQuery,
        patch: &SchedulePatch,
    ) -> Result<usize, StoreError>;
}

//! redb-backed item store.
//!
//! Tables:
//! - `items`: ItemId → versioned item record
//! - `sequence`: last assigned item id
//! - `idx_next_cleaning` / `idx_last_cleaned`: time indexes for due and
//!   recently-cleaned scans
//!
//! Every write touches the record and its index entries in one transaction.

use crate::store::{ItemQuery, ItemStore, StoreError};
use crate::types::item::versioned_record::VersionedRecord;
use crate::types::{ClothingItem, Config, ItemId, ItemRecord, Page, SchedulePatch, TimeKey};
use redb::{ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use std::time::SystemTime;
use time_index::TimeIndex;
use tracing::debug;

mod time_index;

/// Main table: ItemId → VersionedRecord
const ITEMS_TABLE: TableDefinition<ItemId, VersionedRecord> = TableDefinition::new("items");

/// Sequence table: &str → last assigned value
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequence");

const SEQUENCE_KEY_ITEM_ID: &str = "item_id";

/// Index on `next_cleaning_date`.
const NEXT_CLEANING_INDEX: TimeIndex = TimeIndex::new("idx_next_cleaning");

/// Index on `last_cleaned`.
const LAST_CLEANED_INDEX: TimeIndex = TimeIndex::new("idx_last_cleaned");

pub struct RedbStore {
    db: redb::Database,
}

impl RedbStore {
    /// Creates or opens the item database under `config.base_path`.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ITEMS_TABLE)?;
            let _ = write_txn.open_table(SEQUENCE_TABLE)?;
            NEXT_CLEANING_INDEX.init(&write_txn)?;
            LAST_CLEANED_INDEX.init(&write_txn)?;
        }
        write_txn.commit()?;

        debug!(path = %config.db_path().display(), "opened item store");
        Ok(Self { db })
    }
}

impl ItemStore for RedbStore {
    fn insert(&mut self, record: ItemRecord) -> Result<ItemId, StoreError> {
        let write_txn = self.db.begin_write()?;

        let id = {
            let mut sequence = write_txn.open_table(SEQUENCE_TABLE)?;
            let last = sequence
                .get(SEQUENCE_KEY_ITEM_ID)?
                .map(|g| g.value())
                .unwrap_or(0);
            let next = last.checked_add(1).ok_or(StoreError::IdsExhausted)?;
            sequence.insert(SEQUENCE_KEY_ITEM_ID, next)?;
            ItemId::new(next)
        };

        {
            let mut items = write_txn.open_table(ITEMS_TABLE)?;
            Self::insert_indexes(&write_txn, id, &record)?;
            items.insert(id, VersionedRecord::V1(record))?;
        }

        write_txn.commit()?;
        Ok(id)
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<ClothingItem>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ITEMS_TABLE)?;

        match table.get(id)? {
            None => Ok(None),
            Some(guard) => Ok(Some(guard.value().into_latest().to_item(id))),
        }
    }

    fn find_all(&self, page: Page) -> Result<Vec<ClothingItem>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ITEMS_TABLE)?;

        page.apply(table.iter()?)
            .map(|entry| {
                let (id_guard, record_guard) = entry?;
                Ok(record_guard.value().into_latest().to_item(id_guard.value()))
            })
            .collect()
    }

    fn find_where(&self, query: &ItemQuery, page: Page) -> Result<Vec<ClothingItem>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ITEMS_TABLE)?;

        let ids = match query {
            // Index keys clamp to the epoch, which no stored date precedes.
            ItemQuery::DueBy(now) if *now < SystemTime::UNIX_EPOCH => return Ok(vec![]),
            ItemQuery::DueBy(now) => NEXT_CLEANING_INDEX.up_to(&read_txn, *now)?,
            ItemQuery::CleanedWithin { now, window } => {
                // Stored timestamps are never before the epoch.
                let from = now
                    .checked_sub(*window)
                    .map_or(SystemTime::UNIX_EPOCH, |from| from.max(SystemTime::UNIX_EPOCH));
                let mut keys = LAST_CLEANED_INDEX.between(&read_txn, from, *now)?;
                keys.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(a.id.cmp(&b.id)));
                keys.into_iter().map(|key| key.id).collect()
            }
            ItemQuery::NameContains(_) | ItemQuery::TypeIs(_) => {
                let mut items = Vec::new();
                for entry in table.iter()? {
                    let (id_guard, record_guard) = entry?;
                    let record = record_guard.value().into_latest();
                    if query.matches(&record) {
                        items.push(record.to_item(id_guard.value()));
                    }
                }
                return Ok(page.apply(items.into_iter()).collect());
            }
        };

        page.apply(ids.into_iter())
            .map(|id| {
                table
                    .get(id)?
                    .map(|guard| guard.value().into_latest().to_item(id))
                    .ok_or(StoreError::DanglingIndex(id))
            })
            .collect()
    }

    fn update_fields(&mut self, id: ItemId, patch: &SchedulePatch) -> Result<bool, StoreError> {
        let write_txn = self.db.begin_write()?;

        {
            let mut items = write_txn.open_table(ITEMS_TABLE)?;

            let Some(mut record) = items.get(id)?.map(|g| g.value().into_latest()) else {
                return Ok(false);
            };

            let previous_next = record.next_cleaning_date();
            patch.apply(&mut record)?;
            Self::move_next_cleaning(&write_txn, id, previous_next, record.next_cleaning_date())?;

            items.insert(id, VersionedRecord::V1(record))?;
        }

        write_txn.commit()?;
        Ok(true)
    }

    fn update_fields_where(
        &mut self,
        query: &ItemQuery,
        patch: &SchedulePatch,
    ) -> Result<usize, StoreError> {
        let write_txn = self.db.begin_write()?;
        let mut modified = 0;

        {
            let mut items = write_txn.open_table(ITEMS_TABLE)?;

            let mut matching = Vec::new();
            for entry in items.iter()? {
                let (id_guard, record_guard) = entry?;
                let record = record_guard.value().into_latest();
                if query.matches(&record) {
                    matching.push((id_guard.value(), record));
                }
            }

            for (id, mut record) in matching {
                let previous_next = record.next_cleaning_date();
                patch.apply(&mut record)?;
                Self::move_next_cleaning(&write_txn, id, previous_next, record.next_cleaning_date())?;

                items.insert(id, VersionedRecord::V1(record))?;
                modified += 1;
            }
        }

        write_txn.commit()?;
        Ok(modified)
    }
}

/// Index helpers.
impl RedbStore {
    fn insert_indexes(
        txn: &WriteTransaction,
        id: ItemId,
        record: &ItemRecord,
    ) -> Result<(), StoreError> {
        NEXT_CLEANING_INDEX.insert(
            txn,
            &TimeKey {
                timestamp: record.next_cleaning_date(),
                id,
            },
        )?;
        LAST_CLEANED_INDEX.insert(
            txn,
            &TimeKey {
                timestamp: record.last_cleaned(),
                id,
            },
        )?;
        Ok(())
    }

    fn move_next_cleaning(
        txn: &WriteTransaction,
        id: ItemId,
        from: SystemTime,
        to: SystemTime,
    ) -> Result<(), StoreError> {
        NEXT_CLEANING_INDEX.remove(
            txn,
            &TimeKey {
                timestamp: from,
                id,
            },
        )?;
        NEXT_CLEANING_INDEX.insert(txn, &TimeKey { timestamp: to, id })?;
        Ok(())
    }
}

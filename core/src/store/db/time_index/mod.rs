use crate::store::StoreError;
use crate::types::{ItemId, TimeKey};
use redb::{ReadTransaction, ReadableTable, TableDefinition, WriteTransaction};
use std::time::SystemTime;

/// Secondary index of `TimeKey { timestamp, id }` entries.
///
/// Range scans return ids in timestamp order, ties broken by id.
pub struct TimeIndex {
    definition: TableDefinition<'static, TimeKey, ()>,
}

impl TimeIndex {
    pub const fn new(name: &'static str) -> Self {
        Self {
            definition: TableDefinition::new(name),
        }
    }

    pub fn init(&self, txn: &WriteTransaction) -> Result<(), StoreError> {
        txn.open_table(self.definition)?;
        Ok(())
    }

    pub fn insert(&self, txn: &WriteTransaction, time_key: &TimeKey) -> Result<(), StoreError> {
        let mut table = txn.open_table(self.definition)?;
        table.insert(time_key, &())?;
        Ok(())
    }

    /// Returns `true` if the entry was present.
    pub fn remove(&self, txn: &WriteTransaction, time_key: &TimeKey) -> Result<bool, StoreError> {
        let mut table = txn.open_table(self.definition)?;
        Ok(table.remove(time_key)?.is_some())
    }

    /// Returns ids whose timestamp is `<= until`, oldest first.
    pub fn up_to(&self, txn: &ReadTransaction, until: SystemTime) -> Result<Vec<ItemId>, StoreError> {
        let table = txn.open_table(self.definition)?;

        table
            .range(
                ..=TimeKey {
                    timestamp: until,
                    id: ItemId::MAX,
                },
            )?
            .map(|entry| {
                let (time_key_guard, _) = entry?;
                Ok(time_key_guard.value().id)
            })
            .collect()
    }

    /// Returns entries with `from <= timestamp <= until`, oldest first.
    pub fn between(
        &self,
        txn: &ReadTransaction,
        from: SystemTime,
        until: SystemTime,
    ) -> Result<Vec<TimeKey>, StoreError> {
        if from > until {
            return Ok(vec![]);
        }

        let table = txn.open_table(self.definition)?;

        table
            .range(
                TimeKey {
                    timestamp: from,
                    id: ItemId::MIN,
                }..=TimeKey {
                    timestamp: until,
                    id: ItemId::MAX,
                },
            )?
            .map(|entry| {
                let (time_key_guard, _) = entry?;
                Ok(time_key_guard.value())
            })
            .collect()
    }

    #[cfg(test)]
    pub fn all_keys(&self, txn: &ReadTransaction) -> Result<Vec<TimeKey>, StoreError> {
        let table = txn.open_table(self.definition)?;
        let mut keys = Vec::new();

        for entry in table.iter()? {
            let (time_key_guard, _) = entry?;
            keys.push(time_key_guard.value());
        }

        Ok(keys)
    }
}

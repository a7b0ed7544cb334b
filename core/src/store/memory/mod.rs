use super::{ItemQuery, ItemStore, StoreError};
use crate::types::{ClothingItem, ItemId, ItemRecord, Page, SchedulePatch};
use std::collections::BTreeMap;

/// An in-memory store backed by a `BTreeMap`.
///
/// Useful for testing and as a reference implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<ItemId, ItemRecord>,
    last_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ItemStore for MemoryStore {
    fn insert(&mut self, record: ItemRecord) -> Result<ItemId, StoreError> {
        self.last_id = self.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let id = ItemId::new(self.last_id);
        self.records.insert(id, record);
        Ok(id)
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<ClothingItem>, StoreError> {
        Ok(self.records.get(&id).map(|record| record.to_item(id)))
    }

    fn find_all(&self, page: Page) -> Result<Vec<ClothingItem>, StoreError> {
        Ok(page
            .apply(self.records.iter())
            .map(|(id, record)| record.to_item(*id))
            .collect())
    }

    fn find_where(&self, query: &ItemQuery, page: Page) -> Result<Vec<ClothingItem>, StoreError> {
        let mut matches: Vec<_> = self
            .records
            .iter()
            .filter(|(_, record)| query.matches(record))
            .collect();
        matches.sort_by(|(a_id, a), (b_id, b)| query.compare((**a_id, *a), (**b_id, *b)));

        Ok(page
            .apply(matches.into_iter())
            .map(|(id, record)| record.to_item(*id))
            .collect())
    }

    fn update_fields(&mut self, id: ItemId, patch: &SchedulePatch) -> Result<bool, StoreError> {
        let Some(record) = self.records.get_mut(&id) else {
            return Ok(false);
        };
        patch.apply(record)?;
        Ok(true)
    }

    fn update_fields_where(
        &mut self,
        query: &ItemQuery,
        patch: &SchedulePatch,
    ) -> Result<usize, StoreError> {
        // Patch copies first so a failure leaves every record untouched.
        let mut patched = Vec::new();
        for (id, record) in self.records.iter().filter(|(_, r)| query.matches(r)) {
            let mut record = record.clone();
            patch.apply(&mut record)?;
            patched.push((*id, record));
        }

        let modified = patched.len();
        self.records.extend(patched);
        Ok(modified)
    }
}

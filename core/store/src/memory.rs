// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::ProductStore;
use crate::errors::StoreError;
use crate::record::ProductRecord;

struct Inner {
    /// records keyed by identifier; BTreeMap iteration order is the store
    /// order exposed by `list_all`
    records: BTreeMap<i32, ProductRecord>,

    /// next identifier to assign, starts at 1
    next_id: i32,
}

/// In-memory record store.
///
/// The single lock is the store's concurrency control; each operation takes
/// it once, so there is no snapshot isolation between a `list_all` and
/// concurrent writes.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductRecord>, StoreError> {
        Ok(self.inner.read().records.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(self.inner.read().records.values().cloned().collect())
    }

    async fn insert(&self, mut record: ProductRecord) -> Result<ProductRecord, StoreError> {
        let mut inner = self.inner.write();
        record.id = inner.next_id;
        inner.next_id += 1;
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn exists(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.inner.read().records.contains_key(&id))
    }

    async fn replace(&self, record: ProductRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.records.get_mut(&record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            // the record the caller observed is gone, report the lost race
            None => Err(StoreError::Conflict(record.id)),
        }
    }

    async fn remove(&self, id: i32) -> Result<usize, StoreError> {
        let removed = self.inner.write().records.remove(&id);
        Ok(removed.map_or(0, |_| 1))
    }

    async fn bulk_insert(&self, records: Vec<ProductRecord>) -> Result<usize, StoreError> {
        let mut inner = self.inner.write();
        let mut affected = 0;
        for mut record in records {
            record.id = inner.next_id;
            inner.next_id += 1;
            inner.records.insert(record.id, record);
            affected += 1;
        }
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ProductStatus;
    use chrono::NaiveDate;

    fn record(name: &str) -> ProductRecord {
        ProductRecord {
            id: 0,
            name: name.to_string(),
            description: format!("{} description", name),
            price: 9.99,
            status: ProductStatus::InStock,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 17)
                .unwrap()
                .and_hms_opt(12, 30, 45)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let first = store.insert(record("widget")).await.unwrap();
        let second = store.insert(record("gadget")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryStore::new();
        let inserted = store.insert(record("widget")).await.unwrap();

        let found = store.find_by_id(inserted.id).await.unwrap();
        assert_eq!(found, Some(inserted));

        let missing = store.find_by_id(42).await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_list_all_in_id_order() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c"] {
            store.insert(record(name)).await.unwrap();
        }

        let all = store.list_all().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_replace_existing() {
        let store = MemoryStore::new();
        let mut inserted = store.insert(record("widget")).await.unwrap();

        inserted.price = 19.99;
        store.replace(inserted.clone()).await.unwrap();

        let found = store.find_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(found.price, 19.99);
    }

    #[tokio::test]
    async fn test_replace_vanished_record_is_conflict() {
        let store = MemoryStore::new();
        let inserted = store.insert(record("widget")).await.unwrap();
        store.remove(inserted.id).await.unwrap();

        let err = store.replace(inserted).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(1)));
    }

    #[tokio::test]
    async fn test_remove_reports_affected_count() {
        let store = MemoryStore::new();
        let inserted = store.insert(record("widget")).await.unwrap();

        assert_eq!(store.remove(inserted.id).await.unwrap(), 1);
        assert_eq!(store.remove(inserted.id).await.unwrap(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_insert_assigns_ids_and_counts() {
        let store = MemoryStore::new();
        store.insert(record("existing")).await.unwrap();

        let batch = vec![record("a"), record("b"), record("c")];
        let affected = store.bulk_insert(batch).await.unwrap();

        assert_eq!(affected, 3);
        assert_eq!(store.len(), 4);

        let ids: Vec<i32> = store
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_bulk_insert_empty_batch() {
        let store = MemoryStore::new();
        assert_eq!(store.bulk_insert(Vec::new()).await.unwrap(), 0);
        assert!(store.is_empty());
    }
}

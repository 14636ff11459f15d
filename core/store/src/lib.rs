// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

pub mod errors;
pub mod memory;
pub mod record;

use errors::StoreError;
use record::ProductRecord;

/// Persistence seam for product records.
///
/// Mutating operations report how many records were affected so callers can
/// distinguish a no-op from an actual write. The store owns its own
/// concurrency control; a lost race on `replace` surfaces as
/// [`StoreError::Conflict`] and is never retried here.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Point lookup. `None` when no record has this identifier.
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductRecord>, StoreError>;

    /// Full scan in store order.
    async fn list_all(&self) -> Result<Vec<ProductRecord>, StoreError>;

    /// Insert a record; the store assigns the identifier and returns the
    /// stored form.
    async fn insert(&self, record: ProductRecord) -> Result<ProductRecord, StoreError>;

    async fn exists(&self, id: i32) -> Result<bool, StoreError>;

    /// Full replacement of the record at `record.id`. Fails with
    /// [`StoreError::Conflict`] when the record changed or disappeared since
    /// the caller observed it.
    async fn replace(&self, record: ProductRecord) -> Result<(), StoreError>;

    /// Remove the record with the given identifier, returning the number of
    /// records affected.
    async fn remove(&self, id: i32) -> Result<usize, StoreError>;

    /// Insert a batch in one operation, assigning identifiers, returning the
    /// number of records affected.
    async fn bulk_insert(&self, records: Vec<ProductRecord>) -> Result<usize, StoreError>;
}

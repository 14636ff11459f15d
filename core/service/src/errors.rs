// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;
use tonic::Status;

use catalog_store::errors::StoreError;

#[derive(Error, Debug)]
pub enum ServiceError {
    // Lookup targets
    #[error("product with id {0} not found")]
    NotFound(i32),

    // Payload / validation
    #[error("product payload missing")]
    PayloadMissing,

    // Propagated store errors, including optimistic concurrency conflicts
    #[error("store error")]
    Store(#[from] StoreError),
}

/// Map service failures onto gRPC status codes: missing records are
/// NOT_FOUND, lost concurrency races are ABORTED, everything else coming
/// out of the store is INTERNAL.
impl From<ServiceError> for Status {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => Status::not_found(e.to_string()),
            ServiceError::PayloadMissing => Status::invalid_argument(e.to_string()),
            ServiceError::Store(StoreError::Conflict(id)) => {
                Status::aborted(format!("concurrent modification of record {}", id))
            }
            ServiceError::Store(e) => Status::internal(e.to_string()),
        }
    }
}

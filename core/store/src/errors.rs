// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    // Optimistic concurrency: the record changed or disappeared between the
    // caller's read and the write.
    #[error("concurrent modification of record {0}")]
    Conflict(i32),

    // Backend unavailable or an operation failed mid-flight.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;

/// Stock status of a product. Small closed set on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductStatus {
    #[default]
    InStock,
    OutOfStock,
}

/// Persisted form of a product.
///
/// The identifier is assigned by the store on insert and immutable
/// afterwards. The creation timestamp is a civil date-time with no timezone;
/// the wire boundary interprets it as UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Non-negative by convention, not enforced.
    pub price: f64,
    pub status: ProductStatus,
    pub created_at: NaiveDateTime,
}

// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod convert;
pub mod errors;
pub mod service;

pub use service::CatalogService;

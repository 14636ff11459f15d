// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod client;
pub mod errors;
pub mod server;

// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

pub mod catalog {
    pub mod v1 {
        include!("gen/catalog.v1.rs");
    }
}

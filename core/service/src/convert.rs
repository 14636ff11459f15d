// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0
//
// Wire/record mapping. Every field is a direct copy except the timestamp,
// which changes representation: the record holds a timezone-naive civil
// date-time, the wire carries seconds+nanos since the Unix epoch in UTC.
// The two directions are written out independently on purpose; a generic
// reverse mapping would get the timestamp wrong.

use chrono::DateTime;
use prost_types::Timestamp;

use catalog_api::proto::catalog::v1::{Product, ProductStatus as WireProductStatus};
use catalog_store::record::{ProductRecord, ProductStatus};

/// Record to wire message. The naive creation time is interpreted as UTC.
pub fn record_to_wire(record: &ProductRecord) -> Product {
    let created = record.created_at.and_utc();

    Product {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        price: record.price,
        status: match record.status {
            ProductStatus::InStock => WireProductStatus::InStock,
            ProductStatus::OutOfStock => WireProductStatus::OutOfStock,
        } as i32,
        created_time: Some(Timestamp {
            seconds: created.timestamp(),
            nanos: created.timestamp_subsec_nanos() as i32,
        }),
    }
}

/// Wire message to record. No validation or defaulting happens here: an
/// absent or out-of-range timestamp becomes the Unix epoch, an unknown
/// status value the zero variant.
pub fn wire_to_record(product: &Product) -> ProductRecord {
    let created_at = product
        .created_time
        .as_ref()
        .and_then(|ts| DateTime::from_timestamp(ts.seconds, ts.nanos as u32))
        .unwrap_or(DateTime::UNIX_EPOCH)
        .naive_utc();

    ProductRecord {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        status: match WireProductStatus::try_from(product.status) {
            Ok(WireProductStatus::OutOfStock) => ProductStatus::OutOfStock,
            _ => ProductStatus::InStock,
        },
        created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> ProductRecord {
        ProductRecord {
            id: 7,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            status: ProductStatus::OutOfStock,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 17)
                .unwrap()
                .and_hms_nano_opt(12, 30, 45, 123_456_789)
                .unwrap(),
        }
    }

    #[test]
    fn test_record_to_wire_copies_fields() {
        let record = sample_record();
        let wire = record_to_wire(&record);

        assert_eq!(wire.id, 7);
        assert_eq!(wire.name, "Widget");
        assert_eq!(wire.description, "A widget");
        assert_eq!(wire.price, 9.99);
        assert_eq!(wire.status, WireProductStatus::OutOfStock as i32);

        let ts = wire.created_time.unwrap();
        assert_eq!(ts.seconds, record.created_at.and_utc().timestamp());
        assert_eq!(ts.nanos, 123_456_789);
    }

    #[test]
    fn test_round_trip_is_identity() {
        let record = sample_record();
        let back = wire_to_record(&record_to_wire(&record));
        assert_eq!(back, record);
    }

    #[test]
    fn test_wire_round_trip_preserves_timestamp() {
        let wire = Product {
            id: 1,
            name: "x".to_string(),
            description: String::new(),
            price: 0.5,
            status: WireProductStatus::InStock as i32,
            created_time: Some(Timestamp {
                seconds: 1_715_949_045,
                nanos: 42,
            }),
        };

        let again = record_to_wire(&wire_to_record(&wire));
        assert_eq!(again, wire);
    }

    #[test]
    fn test_missing_timestamp_becomes_epoch() {
        let wire = Product {
            created_time: None,
            ..Default::default()
        };

        let record = wire_to_record(&wire);
        assert_eq!(record.created_at, DateTime::UNIX_EPOCH.naive_utc());
    }

    #[test]
    fn test_unknown_status_maps_to_zero_variant() {
        let wire = Product {
            status: 99,
            ..Default::default()
        };

        assert_eq!(wire_to_record(&wire).status, ProductStatus::InStock);
    }

    #[test]
    fn test_pre_epoch_timestamp_round_trips() {
        let record = ProductRecord {
            created_at: NaiveDate::from_ymd_opt(1969, 12, 31)
                .unwrap()
                .and_hms_nano_opt(23, 59, 59, 500_000_000)
                .unwrap(),
            ..sample_record()
        };

        let back = wire_to_record(&record_to_wire(&record));
        assert_eq!(back.created_at, record.created_at);
    }
}

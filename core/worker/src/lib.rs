// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

//! Periodic caller that exercises the catalog service: one `AddProduct`
//! per tick, call-level failures logged and swallowed, at most one call in
//! flight.

use std::time::Duration;

use chrono::Utc;
use duration_str::deserialize_duration;
use prost_types::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use catalog_api::proto::catalog::v1::product_catalog_client::ProductCatalogClient;
use catalog_api::proto::catalog::v1::{AddProductRequest, Product, ProductStatus};
use catalog_config::grpc::client::ClientConfig;
use catalog_config::grpc::errors::ConfigError;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("configuration error")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerConfig {
    /// Whether catalogd should run the embedded worker.
    #[serde(default)]
    pub enabled: bool,

    /// Connection settings for the catalog endpoint to call.
    pub client: ClientConfig,

    /// Tick interval between AddProduct calls.
    #[serde(
        default = "default_interval",
        deserialize_with = "deserialize_duration"
    )]
    pub interval: Duration,
}

fn default_interval() -> Duration {
    Duration::from_secs(5)
}

impl WorkerConfig {
    pub fn build(&self) -> Worker {
        Worker::new(self.client.clone(), self.interval)
    }
}

pub struct Worker {
    client_config: ClientConfig,
    interval: Duration,
}

impl Worker {
    pub fn new(client_config: ClientConfig, interval: Duration) -> Self {
        Worker {
            client_config,
            interval,
        }
    }

    /// Tick until the token fires. Each tick issues a single AddProduct
    /// call; a failed call is logged and the loop keeps going.
    pub async fn run(&self, token: CancellationToken) -> Result<(), WorkerError> {
        // lazy channel so the worker can start before the server is up;
        // the first ticks simply fail and get logged
        let channel = self.client_config.to_channel_lazy()?;
        let mut client = ProductCatalogClient::new(channel);

        info!(interval = ?self.interval, endpoint = %self.client_config.endpoint, "worker started");

        let mut ticker = tokio::time::interval(self.interval);
        let mut sequence: u64 = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    sequence += 1;
                    let product = next_product(sequence);

                    match client.add_product(AddProductRequest { product: Some(product) }).await {
                        Ok(resp) => {
                            let added = resp.into_inner();
                            debug!(id = added.id, name = %added.name, "product seeded");
                        }
                        Err(e) => {
                            error!(error = %e, sequence, "add product call failed");
                        }
                    }
                }
                _ = token.cancelled() => {
                    info!(calls = sequence, "worker stopping");
                    return Ok(());
                }
            }
        }
    }
}

/// Generate the next product to insert, stamped with the current time.
fn next_product(sequence: u64) -> Product {
    let now = Utc::now();

    Product {
        id: 0,
        name: format!("product-{}", sequence),
        description: format!("generated product number {}", sequence),
        price: (sequence % 100) as f64 + 0.99,
        status: ProductStatus::InStock as i32,
        created_time: Some(Timestamp {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos() as i32,
        }),
    }
}

// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use catalog_api::proto::catalog::v1::product_catalog_server::ProductCatalogServer;
use catalog_service::CatalogService;
use catalog_store::memory::MemoryStore;
use catalogd::args;
use catalogd::config;
use catalogd::signal;

const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

fn main() {
    let args = args::Args::parse();

    // If the version flag is set, print the version and exit
    if args.version() {
        println!("catalogd {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // get config file
    let config_file = args.config().expect("config file is required");

    let mut config =
        config::ConfigLoader::new(config_file).expect("failed to load configuration");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    runtime.block_on(async move {
        // tracing subscriber initialization
        config.tracing().setup_tracing_subscriber();

        info!("catalogd {} starting", env!("CARGO_PKG_VERSION"));

        let server_config = config.server().expect("invalid server configuration");
        let worker_config = config.worker().expect("invalid worker configuration");

        // wire the store into the service and mount it on the server
        let store = Arc::new(MemoryStore::new());
        let service = CatalogService::new(store);
        let svc = ProductCatalogServer::new(service);

        let (signal_tx, drain_rx) = drain::channel();
        let server_token = server_config
            .run_server(&[svc], drain_rx)
            .await
            .expect("failed to start server");
        info!(endpoint = %server_config.endpoint, "catalog server started");

        // optional embedded worker, seeding products against our own endpoint
        let worker_token = CancellationToken::new();
        let mut worker_handle = None;
        if let Some(worker_config) = worker_config {
            if worker_config.enabled {
                let worker = worker_config.build();
                let token = worker_token.clone();
                worker_handle = Some(tokio::spawn(async move { worker.run(token).await }));
            }
        }

        // wait for shutdown signal
        signal::shutdown().await;

        // stop the worker before tearing down the server it calls into
        worker_token.cancel();
        if let Some(handle) = worker_handle {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!(error = %e, "worker stopped with error"),
                Err(e) => error!(error = %e, "worker task failed"),
            }
        }

        server_token.cancel();
        match time::timeout(DRAIN_TIMEOUT, signal_tx.drain()).await {
            Ok(()) => info!("server drained"),
            Err(_) => error!(timeout = ?DRAIN_TIMEOUT, "timeout waiting for server drain"),
        }
    });
}

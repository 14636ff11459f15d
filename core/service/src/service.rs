// Copyright Catalog Contributors
// SPDX-License-Identifier: Apache-2.0

use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt, wrappers::ReceiverStream};
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, info};

use catalog_api::proto::catalog::v1::{
    AddProductRequest, DeleteProductRequest, DeleteProductResponse, GetAllProductsRequest,
    GetProductRequest, HealthCheckRequest, HealthCheckResponse, InsertBulkProductResponse, Product,
    UpdateProductRequest, product_catalog_server::ProductCatalog,
};
use catalog_store::ProductStore;
use catalog_store::record::ProductRecord;

use crate::convert::{record_to_wire, wire_to_record};
use crate::errors::ServiceError;

/// Stateless handler for the product catalog RPCs. All state lives in the
/// record store; each call is independent and may run concurrently with any
/// other.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        CatalogService { store }
    }

    async fn lookup(&self, id: i32) -> Result<ProductRecord, ServiceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Drain the incoming product stream, staging each item, and commit the
    /// whole batch in one store operation once the stream completes cleanly.
    /// An error item means the caller's stream broke: nothing is committed.
    async fn stage_and_commit(
        &self,
        mut stream: impl Stream<Item = Result<Product, Status>> + Unpin,
    ) -> Result<InsertBulkProductResponse, Status> {
        let mut staged = Vec::new();

        while let Some(next) = stream.next().await {
            match next {
                Ok(product) => staged.push(wire_to_record(&product)),
                Err(e) => {
                    debug!(error = %e, staged = staged.len(), "bulk insert stream broke, discarding staged records");
                    return Err(e);
                }
            }
        }

        let affected = self
            .store
            .bulk_insert(staged)
            .await
            .map_err(|e| Status::from(ServiceError::Store(e)))?;

        info!(inserted = affected, "bulk insert committed");

        Ok(InsertBulkProductResponse {
            success: affected > 0,
            insert_count: affected as i32,
        })
    }
}

#[tonic::async_trait]
impl ProductCatalog for CatalogService {
    async fn health_check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        Ok(Response::new(HealthCheckResponse {}))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let id = request.into_inner().product_id;
        let record = self.lookup(id).await?;
        Ok(Response::new(record_to_wire(&record)))
    }

    type GetAllProductsStream =
        Pin<Box<dyn Stream<Item = Result<Product, Status>> + Send + 'static>>;

    async fn get_all_products(
        &self,
        _request: Request<GetAllProductsRequest>,
    ) -> Result<Response<Self::GetAllProductsStream>, Status> {
        let records = self
            .store
            .list_all()
            .await
            .map_err(|e| Status::from(ServiceError::Store(e)))?;

        debug!(count = records.len(), "starting product scan stream");

        let (tx, rx) = mpsc::channel::<Result<Product, Status>>(16);
        tokio::spawn(async move {
            for record in records {
                // a closed channel means the caller went away; anything
                // already sent stands, the rest is abandoned
                if tx.send(Ok(record_to_wire(&record))).await.is_err() {
                    debug!("scan stream receiver dropped, stopping");
                    break;
                }
            }
        });

        let out_stream = ReceiverStream::new(rx);
        Ok(Response::new(
            Box::pin(out_stream) as Self::GetAllProductsStream
        ))
    }

    async fn add_product(
        &self,
        request: Request<AddProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let product = request
            .into_inner()
            .product
            .ok_or(ServiceError::PayloadMissing)?;

        let record = wire_to_record(&product);
        let inserted = self
            .store
            .insert(record)
            .await
            .map_err(|e| Status::from(ServiceError::Store(e)))?;

        info!(id = inserted.id, name = %inserted.name, "product added");

        Ok(Response::new(record_to_wire(&inserted)))
    }

    async fn update_product(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<Product>, Status> {
        let product = request
            .into_inner()
            .product
            .ok_or(ServiceError::PayloadMissing)?;

        let record = wire_to_record(&product);

        if !self
            .store
            .exists(record.id)
            .await
            .map_err(|e| Status::from(ServiceError::Store(e)))?
        {
            return Err(ServiceError::NotFound(record.id).into());
        }

        // exists and replace are two store calls; a concurrent delete in
        // between surfaces as a conflict from replace
        self.store
            .replace(record.clone())
            .await
            .map_err(|e| Status::from(ServiceError::Store(e)))?;

        Ok(Response::new(record_to_wire(&record)))
    }

    async fn delete_product(
        &self,
        request: Request<DeleteProductRequest>,
    ) -> Result<Response<DeleteProductResponse>, Status> {
        let id = request.into_inner().product_id;
        let record = self.lookup(id).await?;

        let affected = self
            .store
            .remove(record.id)
            .await
            .map_err(|e| Status::from(ServiceError::Store(e)))?;

        debug!(id, affected, "product removed");

        Ok(Response::new(DeleteProductResponse {
            success: affected > 0,
        }))
    }

    async fn insert_bulk_product(
        &self,
        request: Request<Streaming<Product>>,
    ) -> Result<Response<InsertBulkProductResponse>, Status> {
        let stream = request.into_inner();
        let response = self.stage_and_commit(stream).await?;
        Ok(Response::new(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_api::proto::catalog::v1::ProductStatus as WireProductStatus;
    use catalog_store::memory::MemoryStore;
    use futures::stream;
    use prost_types::Timestamp;

    fn service() -> (CatalogService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (CatalogService::new(store.clone()), store)
    }

    fn wire_product(name: &str) -> Product {
        Product {
            id: 0,
            name: name.to_string(),
            description: format!("{} description", name),
            price: 9.99,
            status: WireProductStatus::InStock as i32,
            created_time: Some(Timestamp {
                seconds: 1_715_949_045,
                nanos: 0,
            }),
        }
    }

    async fn add(svc: &CatalogService, name: &str) -> Product {
        svc.add_product(Request::new(AddProductRequest {
            product: Some(wire_product(name)),
        }))
        .await
        .unwrap()
        .into_inner()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (svc, _) = service();
        let resp = svc.health_check(Request::new(HealthCheckRequest {})).await;
        assert!(resp.is_ok());
    }

    #[tokio::test]
    async fn test_add_then_get_round_trips() {
        let (svc, _) = service();

        let added = add(&svc, "Widget").await;
        assert_eq!(added.id, 1);
        assert_eq!(added.name, "Widget");

        let got = svc
            .get_product(Request::new(GetProductRequest { product_id: 1 }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(got, added);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let (svc, _) = service();

        let err = svc
            .get_product(Request::new(GetProductRequest { product_id: 42 }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::NotFound);
        assert!(err.message().contains("42"));
    }

    #[tokio::test]
    async fn test_add_without_payload_is_invalid_argument() {
        let (svc, _) = service();

        let err = svc
            .add_product(Request::new(AddProductRequest { product: None }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found_and_no_mutation() {
        let (svc, store) = service();

        let mut product = wire_product("Widget");
        product.id = 9;
        let err = svc
            .update_product(Request::new(UpdateProductRequest {
                product: Some(product),
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code(), tonic::Code::NotFound);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_full_record() {
        let (svc, _) = service();
        let added = add(&svc, "Widget").await;

        let updated = svc
            .update_product(Request::new(UpdateProductRequest {
                product: Some(Product {
                    price: 19.99,
                    status: WireProductStatus::OutOfStock as i32,
                    ..added.clone()
                }),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(updated.price, 19.99);

        let got = svc
            .get_product(Request::new(GetProductRequest {
                product_id: added.id,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(got.price, 19.99);
        assert_eq!(got.status, WireProductStatus::OutOfStock as i32);
    }

    #[tokio::test]
    async fn test_delete_lifecycle() {
        let (svc, _) = service();
        let added = add(&svc, "Widget").await;

        let resp = svc
            .delete_product(Request::new(DeleteProductRequest {
                product_id: added.id,
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(resp.success);

        // second delete of the same id is NOT_FOUND
        let err = svc
            .delete_product(Request::new(DeleteProductRequest {
                product_id: added.id,
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::NotFound);

        // and so is a lookup
        let err = svc
            .get_product(Request::new(GetProductRequest {
                product_id: added.id,
            }))
            .await
            .unwrap_err();
        assert_eq!(err.code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_get_all_products_streams_every_record() {
        let (svc, _) = service();
        for name in ["a", "b", "c"] {
            add(&svc, name).await;
        }

        let mut stream = svc
            .get_all_products(Request::new(GetAllProductsRequest {}))
            .await
            .unwrap()
            .into_inner();

        let mut seen = Vec::new();
        while let Some(item) = stream.next().await {
            seen.push(item.unwrap());
        }

        assert_eq!(seen.len(), 3);
        assert_eq!(
            seen.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        // each streamed item matches a direct lookup
        for product in seen {
            let direct = svc
                .get_product(Request::new(GetProductRequest {
                    product_id: product.id,
                }))
                .await
                .unwrap()
                .into_inner();
            assert_eq!(product, direct);
        }
    }

    #[tokio::test]
    async fn test_get_all_products_on_empty_store() {
        let (svc, _) = service();

        let mut stream = svc
            .get_all_products(Request::new(GetAllProductsRequest {}))
            .await
            .unwrap()
            .into_inner();

        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_bulk_insert_commits_after_clean_completion() {
        let (svc, store) = service();

        let items = stream::iter(
            ["a", "b", "c"]
                .into_iter()
                .map(|n| Ok(wire_product(n)))
                .collect::<Vec<Result<Product, Status>>>(),
        );

        let resp = svc.stage_and_commit(items).await.unwrap();
        assert!(resp.success);
        assert_eq!(resp.insert_count, 3);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_bulk_insert_of_empty_stream_reports_no_success() {
        let (svc, store) = service();

        let items = stream::iter(Vec::<Result<Product, Status>>::new());
        let resp = svc.stage_and_commit(items).await.unwrap();

        assert!(!resp.success);
        assert_eq!(resp.insert_count, 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_insert_broken_stream_commits_nothing() {
        let (svc, store) = service();

        let items = stream::iter(vec![
            Ok(wire_product("a")),
            Ok(wire_product("b")),
            Err(Status::cancelled("client went away")),
        ]);

        let err = svc.stage_and_commit(items).await.unwrap_err();
        assert_eq!(err.code(), tonic::Code::Cancelled);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_delete_between_check_and_replace_is_aborted() {
        let (svc, store) = service();
        let added = add(&svc, "Widget").await;

        // simulate the losing side of the race: the record vanishes after
        // the exists check would have passed
        store.remove(added.id).await.unwrap();

        let record = crate::convert::wire_to_record(&added);
        let err = store.replace(record).await.unwrap_err();
        let status = Status::from(ServiceError::Store(err));
        assert_eq!(status.code(), tonic::Code::Aborted);
    }
}

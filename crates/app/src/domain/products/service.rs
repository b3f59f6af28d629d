//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    domain::products::{errors::ProductsServiceError, models::Product},
    elastic::{ElasticClient, SearchRequest},
};

#[derive(Debug, Clone)]
pub struct ElasticProductsService {
    client: ElasticClient,
}

impl ElasticProductsService {
    #[must_use]
    pub fn new(client: ElasticClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for ElasticProductsService {
    async fn search_products(&self, keyword: String) -> Result<Vec<Product>, ProductsServiceError> {
        let products = self
            .client
            .search::<Product>(&SearchRequest::wildcard(&keyword))
            .await?;

        info!(keyword = %keyword, count = products.len(), "search results: {products:?}");

        Ok(products)
    }

    async fn add_product(&self, product: Product) -> Result<(), ProductsServiceError> {
        self.client.index_document(&product).await?;

        info!(id = product.id, "product added: {product:?}");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Finds products whose analyzed text contains `keyword`, up to 1000 hits.
    async fn search_products(&self, keyword: String) -> Result<Vec<Product>, ProductsServiceError>;

    /// Indexes a product into the default index.
    async fn add_product(&self, product: Product) -> Result<(), ProductsServiceError>;
}

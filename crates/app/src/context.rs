//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::products::{
        ElasticProductsService, ProductsService,
        bootstrap::{configure, ensure_index},
    },
    elastic::{ElasticConfig, ElasticError},
};

/// Startup failures that prevent the service from accepting traffic.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// No default index name was configured.
    #[error("search index name must not be empty")]
    EmptyIndexName,

    /// The search index could not be checked or created.
    #[error("failed to prepare search index {index}")]
    SearchIndex {
        index: String,
        #[source]
        source: ElasticError,
    },
}

/// Services shared with every request handler.
#[derive(Clone)]
pub struct AppContext {
    /// Product search and indexing.
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from Elasticsearch settings.
    ///
    /// The search client is configured once here and shared by every service;
    /// the default index is created first if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the default index name is empty, or when the
    /// index can neither be found nor created.
    pub async fn from_elastic_config(config: ElasticConfig) -> Result<Self, AppInitError> {
        if config.default_index.trim().is_empty() {
            return Err(AppInitError::EmptyIndexName);
        }

        let index = config.default_index.clone();
        let client = configure(config);

        ensure_index(&client, &index)
            .await
            .map_err(|source| AppInitError::SearchIndex { index, source })?;

        Ok(Self {
            products: Arc::new(ElasticProductsService::new(client)),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    use crate::{domain::products::models::Product, test::elastic::TestIndex};

    use super::*;

    fn red_shoes() -> Product {
        Product {
            id: 1,
            title: "Red Shoes".to_string(),
            description: "Leather".to_string(),
            price: 50,
            quantity: 3,
        }
    }

    #[tokio::test]
    async fn test_startup_fails_when_index_cannot_be_created() {
        let server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = AppContext::from_elastic_config(ElasticConfig::new(server.uri(), "products")).await;

        assert!(
            matches!(&result, Err(AppInitError::SearchIndex { index, .. }) if index == "products"),
            "expected SearchIndex error"
        );
    }

    #[tokio::test]
    async fn test_startup_succeeds_with_existing_index() {
        let server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let result = AppContext::from_elastic_config(ElasticConfig::new(server.uri(), "products")).await;

        assert!(result.is_ok(), "expected startup to succeed");
    }

    #[tokio::test]
    async fn test_startup_rejects_empty_index_name() {
        let server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = AppContext::from_elastic_config(ElasticConfig::new(server.uri(), "")).await;

        assert!(
            matches!(result, Err(AppInitError::EmptyIndexName)),
            "expected EmptyIndexName"
        );
    }

    #[tokio::test]
    async fn test_added_product_is_found_by_keyword() -> TestResult {
        let index = TestIndex::new().await?;
        let app = AppContext::from_elastic_config(index.config()).await?;

        app.products.add_product(red_shoes()).await?;
        index.refresh().await?;

        assert_eq!(
            app.products.search_products("Red".to_string()).await?,
            vec![red_shoes()],
            "stored numeric fields should come back with the hit"
        );
        assert!(
            app.products
                .search_products("Blue".to_string())
                .await?
                .is_empty(),
            "expected no match for Blue"
        );
        assert_eq!(
            app.products.search_products(String::new()).await?,
            vec![red_shoes()],
            "expected the empty keyword to match the stored product"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_numeric_fields_are_not_searchable() -> TestResult {
        let index = TestIndex::new().await?;
        let app = AppContext::from_elastic_config(index.config()).await?;

        app.products.add_product(red_shoes()).await?;
        index.refresh().await?;

        assert!(
            app.products
                .search_products("50".to_string())
                .await?
                .is_empty(),
            "price is stored but must not be indexed"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_restart_against_existing_index_keeps_documents() -> TestResult {
        let index = TestIndex::new().await?;

        let first = AppContext::from_elastic_config(index.config()).await?;
        first.products.add_product(red_shoes()).await?;
        index.refresh().await?;

        let second = AppContext::from_elastic_config(index.config()).await?;

        assert_eq!(
            second.products.search_products("Shoes".to_string()).await?,
            vec![red_shoes()],
            "expected the document to survive a restart"
        );

        Ok(())
    }
}

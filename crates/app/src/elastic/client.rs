//! Elasticsearch REST client.

use std::collections::HashMap;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::{debug, info};

use crate::elastic::{
    config::ElasticConfig,
    document::{Document, TypeMapping},
    errors::ElasticError,
    query::{SearchRequest, SearchResponse},
};

const ALREADY_EXISTS_ERROR_TYPE: &str = "resource_already_exists_exception";

/// HTTP client for the Elasticsearch index and document APIs.
///
/// Cloning is cheap and clones share one connection pool, so a single
/// instance built at startup can serve every request handler.
#[derive(Debug, Clone)]
pub struct ElasticClient {
    config: ElasticConfig,
    http: Client,
    mappings: HashMap<&'static str, TypeMapping>,
}

impl ElasticClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ElasticConfig) -> Self {
        Self {
            config,
            http: Client::new(),
            mappings: HashMap::new(),
        }
    }

    /// Register the mapping policy used when deriving index mappings for `T`.
    #[must_use]
    pub fn with_default_mapping<T: Document>(mut self, mapping: TypeMapping) -> Self {
        self.mappings.insert(T::TYPE_NAME, mapping);
        self
    }

    /// Index used by [`Self::index_document`] and [`Self::search`].
    #[must_use]
    pub fn default_index(&self) -> &str {
        &self.config.default_index
    }

    /// Mapping policy registered for `T`, or an empty one.
    #[must_use]
    pub fn mapping_for<T: Document>(&self) -> TypeMapping {
        self.mappings
            .get(T::TYPE_NAME)
            .cloned()
            .unwrap_or_default()
    }

    /// Check whether `index` exists.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a status other than 200 or 404.
    pub async fn index_exists(&self, index: &str) -> Result<bool, ElasticError> {
        let response = self.request(Method::HEAD, &[index]).send().await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(ElasticError::UnexpectedResponse(format!(
                "index exists request failed with status {status}"
            ))),
        }
    }

    /// Create `index` with a mapping derived from `T` and its registered
    /// mapping policy.
    ///
    /// # Errors
    ///
    /// Returns [`ElasticError::IndexAlreadyExists`] when the index is already
    /// present, or another error on HTTP failure.
    pub async fn create_index<T: Document>(&self, index: &str) -> Result<(), ElasticError> {
        let body = self.mapping_for::<T>().auto_map::<T>();

        let response = self
            .request(Method::PUT, &[index])
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            info!(index, "created search index");

            return Ok(());
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if text.contains(ALREADY_EXISTS_ERROR_TYPE) {
            return Err(ElasticError::IndexAlreadyExists(index.to_owned()));
        }

        Err(ElasticError::UnexpectedResponse(format!(
            "create index request failed with status {status}: {text}"
        )))
    }

    /// Create `index` for `T` unless it already exists.
    ///
    /// Losing a creation race to another instance counts as success.
    ///
    /// # Errors
    ///
    /// Returns an error when the existence check or the create call fails.
    pub async fn ensure_index<T: Document>(&self, index: &str) -> Result<(), ElasticError> {
        if self.index_exists(index).await? {
            debug!(index, "search index already exists");

            return Ok(());
        }

        match self.create_index::<T>(index).await {
            Err(ElasticError::IndexAlreadyExists(_)) => {
                debug!(index, "search index created concurrently");

                Ok(())
            }
            result => result,
        }
    }

    /// Index `document` into the default index under its own id.
    ///
    /// An existing document with the same id is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or a non-2xx response.
    pub async fn index_document<T: Document>(&self, document: &T) -> Result<(), ElasticError> {
        let id = document.id();

        let response = self
            .request(
                Method::PUT,
                &[self.config.default_index.as_str(), "_doc", id.as_str()],
            )
            .json(document)
            .send()
            .await?;

        ensure_success(response, "index document").await?;

        Ok(())
    }

    /// Run `request` against the default index, returning each hit's source.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, a non-2xx response, or a hit whose
    /// source does not deserialize into `T`.
    pub async fn search<T: Document>(&self, request: &SearchRequest) -> Result<Vec<T>, ElasticError> {
        let response = self
            .request(
                Method::POST,
                &[self.config.default_index.as_str(), "_search"],
            )
            .json(request)
            .send()
            .await?;

        let parsed: SearchResponse<T> = ensure_success(response, "search").await?.json().await?;

        Ok(parsed.into_documents())
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = format!(
            "{}/{}",
            self.config.uri.trim_end_matches('/'),
            segments.join("/")
        );

        let builder = self.http.request(method, url);

        if self.config.pretty_json {
            builder.query(&[("pretty", "true")])
        } else {
            builder
        }
    }
}

async fn ensure_success(response: Response, operation: &str) -> Result<Response, ElasticError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(ElasticError::UnexpectedResponse(format!(
        "{operation} request failed with status {status}: {text}"
    )))
}

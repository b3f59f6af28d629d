//! Elasticsearch client errors.

use thiserror::Error;

/// Errors that can occur when communicating with Elasticsearch.
#[derive(Debug, Error)]
pub enum ElasticError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The index targeted by a create call is already present.
    #[error("index {0} already exists")]
    IndexAlreadyExists(String),

    /// Elasticsearch returned a non-2xx response or unexpected body.
    #[error("unexpected response from Elasticsearch: {0}")]
    UnexpectedResponse(String),
}

//! Products service errors.

use thiserror::Error;

use crate::elastic::ElasticError;

/// Failures surfaced by [`super::ProductsService`].
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    /// The search engine rejected or never answered a search or index call.
    #[error("search engine error")]
    Engine(#[from] ElasticError),
}

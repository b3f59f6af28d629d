//! Product index bootstrapping.

use tracing::info;

use crate::{
    domain::products::models::Product,
    elastic::{ElasticClient, ElasticConfig, ElasticError, TypeMapping},
};

/// Mapping policy for [`Product`].
///
/// Numeric fields stay out of the index mapping so they are never analyzed,
/// but they are still stored and returned with search hits.
#[must_use]
pub fn product_mapping() -> TypeMapping {
    TypeMapping::default()
        .ignore("price")
        .ignore("id")
        .ignore("quantity")
}

/// Build the shared search client with the product mapping policy applied.
#[must_use]
pub fn configure(config: ElasticConfig) -> ElasticClient {
    info!(
        uri = %config.uri,
        index = %config.default_index,
        "configuring search client"
    );

    ElasticClient::new(config).with_default_mapping::<Product>(product_mapping())
}

/// Make sure `index` exists with the product mapping.
///
/// # Errors
///
/// Returns an error if the index can neither be found nor created.
pub async fn ensure_index(client: &ElasticClient, index: &str) -> Result<(), ElasticError> {
    client.ensure_index::<Product>(index).await
}

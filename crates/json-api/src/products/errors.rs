//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use product_search_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Engine(source) => {
            error!("search engine request failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

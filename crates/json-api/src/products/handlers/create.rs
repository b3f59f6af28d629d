//! Add Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{extensions::*, products::errors::into_status_error, state::State};

use super::ProductPayload;

/// Add Product Handler
///
/// Indexes the product as submitted. Nothing is validated and a product with
/// an existing id replaces the stored one.
#[endpoint(
    tags("products"),
    summary = "Add Product",
    responses(
        (status_code = StatusCode::OK, description = "Product indexed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductPayload>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .add_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

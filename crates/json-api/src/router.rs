//! App Router

use salvo::{
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{healthcheck, observability, products};

/// Routes served by the API, without state injection.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("product")
                .get(products::index::handler)
                .post(products::create::handler),
        )
}

/// Attach the OpenAPI document and Swagger UI to `router`.
pub(crate) fn with_docs(router: Router) -> Router {
    let doc = OpenApi::new("Product Search API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

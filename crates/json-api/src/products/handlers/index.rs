//! Product Search Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*, observability::observe_search_hits, products::errors::into_status_error,
    state::State,
};

use super::ProductPayload;

/// Product Search Handler
///
/// Returns up to 1000 products whose text fields contain the keyword. A
/// missing keyword searches with an empty one.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    responses(
        (status_code = StatusCode::OK, description = "Matching products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    keyword: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductPayload>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .search_products(keyword.into_inner().unwrap_or_default())
        .await
        .map_err(into_status_error)?;

    observe_search_hits(products.len());

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use product_search_app::{
        domain::products::{MockProductsService, ProductsServiceError},
        elastic::ElasticError,
    };

    use crate::test_helpers::products_service;

    use super::{super::tests::red_shoes, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("product").get(handler))
    }

    #[tokio::test]
    async fn test_search_returns_matching_products() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .withf(|keyword| keyword == "Red")
            .return_once(|_| Ok(vec![red_shoes()]));

        products.expect_add_product().never();

        let mut res = TestClient::get("http://example.com/product?keyword=Red")
            .send(&make_service(products))
            .await;

        let body: Vec<ProductPayload> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, vec![ProductPayload::from(red_shoes())]);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_without_matches_returns_empty_array() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .withf(|keyword| keyword == "Blue")
            .return_once(|_| Ok(vec![]));

        products.expect_add_product().never();

        let mut res = TestClient::get("http://example.com/product?keyword=Blue")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "[]");

        Ok(())
    }

    #[tokio::test]
    async fn test_search_decodes_keyword() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .withf(|keyword| keyword == "Red Shoes")
            .return_once(|_| Ok(vec![]));

        products.expect_add_product().never();

        let res = TestClient::get("http://example.com/product?keyword=Red%20Shoes")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_without_keyword_uses_empty_keyword() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .withf(String::is_empty)
            .return_once(|_| Ok(vec![]));

        products.expect_add_product().never();

        let res = TestClient::get("http://example.com/product")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_search_engine_error_returns_500() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_search_products()
            .once()
            .return_once(|_| {
                Err(ProductsServiceError::Engine(
                    ElasticError::UnexpectedResponse("cluster unavailable".to_string()),
                ))
            });

        products.expect_add_product().never();

        let res = TestClient::get("http://example.com/product?keyword=Red")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}

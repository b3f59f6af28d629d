//! Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use product_search_app::domain::products::models::Product;

pub(crate) mod create;
pub(crate) mod index;

/// Product as accepted and returned over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPayload {
    /// Product identifier, also used as the search document id
    pub id: i32,

    /// Product title
    pub title: String,

    /// Product description
    pub description: String,

    /// Unit price
    pub price: i32,

    /// Units in stock
    pub quantity: i32,
}

impl From<Product> for ProductPayload {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            description: payload.description,
            price: payload.price,
            quantity: payload.quantity,
        }
    }
}

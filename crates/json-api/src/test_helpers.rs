//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use product_search_app::{context::AppContext, domain::products::MockProductsService};

use crate::state::State;

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

//! State

use std::sync::Arc;

use product_search_app::context::AppContext;

/// Shared server state, holding the services built at startup.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}

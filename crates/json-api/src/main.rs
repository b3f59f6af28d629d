//! Product Search JSON API Server

use std::process;

use salvo::{affix_state::inject, prelude::*};
use tracing::{error, info};

use product_search_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the tracing subscriber failed to install, so stderr is all we have"
        )]
        {
            eprintln!("Logging initialization error: {init_error}");
        }

        process::exit(1);
    }

    let elastic = config.elastic.to_elastic_config();

    info!(
        uri = %elastic.uri,
        index = %elastic.default_index,
        "preparing search index"
    );

    let app = match AppContext::from_elastic_config(elastic).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let router = router::with_docs(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(router::app_router()),
    );

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}

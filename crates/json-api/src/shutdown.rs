//! Graceful shutdown

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// In-flight requests get this long to finish once a signal arrives.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

async fn ctrl_c() -> Result<&'static str, ShutdownSignalError> {
    signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)?;

    Ok("SIGINT")
}

#[cfg(unix)]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?
        .recv()
        .await;

    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn terminate() -> Result<&'static str, ShutdownSignalError> {
    std::future::pending().await
}

/// Resolve with the name of the first shutdown signal received.
async fn wait_for_signal() -> Result<&'static str, ShutdownSignalError> {
    tokio::select! {
        received = ctrl_c() => received,
        received = terminate() => received,
    }
}

/// Stop the server gracefully on SIGINT or SIGTERM.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!(
        signal = received,
        drain_timeout_secs = DRAIN_TIMEOUT.as_secs(),
        "shutting down product search server"
    );

    handle.stop_graceful(Some(DRAIN_TIMEOUT));

    Ok(())
}

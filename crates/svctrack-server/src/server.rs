//! Listener setup and the serve loop with graceful shutdown.

use std::future::Future;
use std::net::SocketAddr;

use svctrack_core::error::{Result, SvcTrackError};
use tokio::net::TcpListener;

use crate::{app_state::AppState, router};

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| SvcTrackError::Bind(format!("{addr}: {e}")))
}

/// Serve until `shutdown` resolves. Readiness flips to draining as soon as
/// the shutdown future completes; in-flight requests are allowed to finish.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router::build_router(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            state.set_draining();
            tracing::info!(tracked = state.store().len(), "draining");
        })
        .await
        .map_err(|e| SvcTrackError::Internal(format!("server failed: {e}")))
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(err = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}

//! svctrack server binary.
//!
//! - `POST /track/:service`, `GET /count/:service`
//! - `/healthz`, `/readyz`
//! - Config from `SVCTRACK_CONFIG` (default `svctrack.yaml`, optional)

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use svctrack_core::{CounterStore, Result};
use svctrack_server::{app_state::AppState, config, server};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), err = %e, "svctrack-server exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg, Arc::new(CounterStore::new()));

    let listener = server::bind(listen).await?;
    tracing::info!(%listen, "svctrack-server starting");

    server::run(listener, state, server::shutdown_signal()).await
}

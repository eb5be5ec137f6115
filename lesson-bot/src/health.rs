//! Liveness probe: `GET /` answers 200 so the hosting platform keeps the process alive.
//! Shares no state with the bot.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub const LIVENESS_BODY: &str = "Bot is running";

async fn liveness() -> &'static str {
    LIVENESS_BODY
}

pub fn router() -> Router {
    Router::new().route("/", get(liveness))
}

/// Binds the probe on all interfaces. Failing to bind is a startup error.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind liveness probe on {}", addr))
}

/// Serves the probe on `listener` in a background task.
pub fn spawn(listener: TcpListener) -> JoinHandle<()> {
    tokio::spawn(async move {
        match listener.local_addr() {
            Ok(addr) => info!(addr = %addr, "Liveness probe listening"),
            Err(e) => error!(error = %e, "Liveness probe has no local address"),
        }
        if let Err(e) = axum::serve(listener, router()).await {
            error!(error = %e, "Liveness probe stopped");
        }
    })
}

//! HTTP surface of the status page.

use crate::config::ServerConfig;
use crate::error::{EatError, Result};
use crate::status::page::{StatusInfo, render_page};
use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Pre-rendered page shared by all requests.
struct StatusPage {
    html: String,
}

/// Build the router serving `GET /`.
///
/// The page is rendered here, once, so a broken template fails at startup
/// rather than on the first request.
pub fn router(info: &StatusInfo) -> Result<Router> {
    let page = Arc::new(StatusPage {
        html: render_page(info)?,
    });
    Ok(Router::new().route("/", get(hello)).with_state(page))
}

async fn hello(State(page): State<Arc<StatusPage>>) -> Html<String> {
    tracing::debug!("serving status page");
    Html(page.html.clone())
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, info: &StatusInfo) -> Result<()> {
    let app = router(info)?;
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| EatError::Server(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!(%addr, "status page listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EatError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

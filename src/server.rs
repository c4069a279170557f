use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config::ClientConfig, error, info};

/// Address the service binds to. All interfaces, fixed port.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

/// Builds the application router with the shared client configuration.
///
/// Kept separate from [`start_api_server`] so tests can drive the router
/// directly without binding a socket.
pub fn build_router(config: Arc<ClientConfig>) -> Router {
    Router::new()
        .route("/", get(api::authorize))
        .route("/callback", get(api::callback))
        .route("/health", get(api::health))
        .layer(Extension(config))
}

pub async fn start_api_server(config: Arc<ClientConfig>) {
    let app = build_router(config);

    let addr = match SocketAddr::from_str(SERVER_ADDR) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}

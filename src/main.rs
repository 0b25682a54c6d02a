//! Haversine distance service.
//!
//! Run the server with
//! ```not_rust
//! cargo run
//! ```
//!
//! Then query it directly
//! ```not_rust
//! curl 'http://localhost:8080/haversine?lat1=51.5007&lon1=0.1246&lat2=40.6892&lon2=74.0445'
//! ```
//! or open the form at `http://localhost:8080/input`.

mod config;
mod handlers;
mod models;

use std::net::SocketAddr;

use axum::{routing::get, Router, Server};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CONFIG;
use crate::handlers::haversine_handler::haversine_handler;
use crate::handlers::input_handler::input_handler;
use crate::models::error::StartupError;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "HaversineService=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = serve(CONFIG.addr()).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn serve(addr: SocketAddr) -> Result<(), StartupError> {
    let server = Server::try_bind(&addr)
        .map_err(|source| StartupError::BindFailure { addr, source })?;

    info!("Server running on http://localhost:{}", addr.port());

    server
        .serve(app().into_make_service())
        .await
        .map_err(StartupError::Serve)
}

fn app() -> Router {
    Router::new()
        .route("/haversine", get(haversine_handler))
        .route("/input", get(input_handler))
        // logging so we can see whats going on
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}

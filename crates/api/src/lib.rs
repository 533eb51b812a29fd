mod auth;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use advisor::{Advisor, InstrumentFileConfig};
use common::MarketDataSource;
use feed::NewsClient;

/// Shared application state injected into every route handler.
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn MarketDataSource>,
    /// Absent when no news key is configured.
    pub news: Option<Arc<NewsClient>>,
    pub advisor: Arc<Advisor>,
    pub instruments: Arc<InstrumentFileConfig>,
    pub api_token: String,
    pub default_pair: String,
}

/// Build and run the Axum API server.
pub async fn serve(state: AppState, port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    let app = router(state).layer(cors);

    info!(%addr, "Analysis API listening");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Analysis routes sit behind bearer-token auth; health stays open.
fn router(state: AppState) -> Router {
    let protected = routes::analysis_router().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_auth,
    ));

    Router::new()
        .merge(protected)
        .merge(routes::health_router())
        .with_state(state)
}

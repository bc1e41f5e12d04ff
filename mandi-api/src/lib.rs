//! Farmer Market Price API server
//!
//! A thin HTTP facade over the Agmarknet daily mandi price resource: a
//! fixed set of commodity/state/market filters, one upstream lookup per
//! request, and a compact normalized response.

pub mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use mandi_agmarknet::AgmarknetClient;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub agmarknet: AgmarknetClient,
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    // Permissive CORS for browser frontends; the API is read-only.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(routes::routes())
        .layer(cors)
        .with_state(state)
}

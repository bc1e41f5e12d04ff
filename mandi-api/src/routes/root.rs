//! Service information endpoint

use axum::{response::Json, routing::get, Router};
use serde::Serialize;

use crate::AppState;

/// Static informational payload for GET /
#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Farmer Market Price API - see /price for lookups",
    })
}

/// Create the root route
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(root))
}

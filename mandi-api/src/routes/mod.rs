//! API route definitions

mod health;
mod prices;
mod root;

use crate::AppState;
use axum::Router;

/// Create all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(root::routes())
        .merge(prices::routes())
        .merge(health::routes())
}

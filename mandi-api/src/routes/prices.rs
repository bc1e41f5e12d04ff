//! Price lookup endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use mandi_core::{LookupOutcome, MandiError, PriceQuery};
use serde::Serialize;
use tracing::{error, info};

use crate::AppState;

/// Error response
///
/// Every failure surfaces in this shape with HTTP 200; clients branch on
/// the presence of the `error` field, not the status code.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Create price routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/price", get(get_price))
}

/// Look up the latest price for a commodity/state/market selection
///
/// Enum validation and default substitution happen in the typed query
/// extractor; by the time this handler runs the selection is valid.
async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> impl IntoResponse {
    info!("Price lookup: {:?}", query);

    match state.agmarknet.lookup_price(query).await {
        LookupOutcome::Record(record) => (StatusCode::OK, Json(record)).into_response(),
        LookupOutcome::NotFound(query) => (
            StatusCode::OK,
            Json(ErrorResponse {
                error: format!(
                    "No price data found for {} in {}, {}",
                    query.commodity, query.market, query.state
                ),
                detail: None,
            }),
        )
            .into_response(),
        LookupOutcome::Failed(e) => {
            error!("Price lookup failed: {}", e);
            (StatusCode::OK, Json(error_body(e))).into_response()
        }
    }
}

/// Map a classified failure onto the client-visible error shape
fn error_body(err: MandiError) -> ErrorResponse {
    match err {
        MandiError::Config(_) => ErrorResponse {
            error: "Server misconfigured: DATA_GOV_API_KEY not set".to_string(),
            detail: None,
        },
        MandiError::Network(detail) | MandiError::Api(detail) => ErrorResponse {
            error: "Upstream request failed".to_string(),
            detail: Some(detail),
        },
        MandiError::Parse(detail) | MandiError::Internal(detail) => ErrorResponse {
            error: "Server error".to_string(),
            detail: Some(detail),
        },
    }
}

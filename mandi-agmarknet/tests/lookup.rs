//! Lookup classification tests against an in-process stub upstream
//!
//! Each test serves a canned response from a local listener and asserts
//! the outcome the client classifies it into, including how many calls
//! actually reached the upstream.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use mandi_agmarknet::AgmarknetClient;
use mandi_core::{Commodity, LookupOutcome, MandiError, Market, PriceQuery, State};

/// Spawn a stub upstream that answers every GET with a fixed status and
/// body, counting the requests it receives.
async fn spawn_upstream(status: StatusCode, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = Arc::clone(&hits);

    let app = Router::new().route(
        "/",
        get(move || {
            let hits = Arc::clone(&handler_hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}

fn potato_query() -> PriceQuery {
    PriceQuery::new(Commodity::Potato, State::Maharashtra, Market::Nashik)
}

#[tokio::test]
async fn record_fields_are_copied_verbatim_and_missing_fields_are_none() {
    let (base_url, hits) = spawn_upstream(
        StatusCode::OK,
        r#"{"records": [{"commodity": "Potato", "modal_price": "1200"}]}"#,
    )
    .await;

    let client = AgmarknetClient::new(Some("X".to_string())).with_base_url(base_url);
    let outcome = client.lookup_price(potato_query()).await;

    match outcome {
        LookupOutcome::Record(record) => {
            assert_eq!(record.commodity.as_deref(), Some("Potato"));
            assert_eq!(record.modal_price.as_deref(), Some("1200"));
            assert!(record.state.is_none());
            assert!(record.district.is_none());
            assert!(record.market.is_none());
            assert!(record.arrival_date.is_none());
            assert!(record.min_price.is_none());
            assert!(record.max_price.is_none());
        }
        other => panic!("expected record outcome, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn only_the_first_record_is_used() {
    let (base_url, _hits) = spawn_upstream(
        StatusCode::OK,
        r#"{"records": [
            {"commodity": "Potato", "modal_price": "1200"},
            {"commodity": "Potato", "modal_price": "9999"}
        ]}"#,
    )
    .await;

    let client = AgmarknetClient::new(Some("X".to_string())).with_base_url(base_url);
    match client.lookup_price(potato_query()).await {
        LookupOutcome::Record(record) => {
            assert_eq!(record.modal_price.as_deref(), Some("1200"));
        }
        other => panic!("expected record outcome, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_records_is_not_found_carrying_the_query() {
    let (base_url, hits) = spawn_upstream(StatusCode::OK, r#"{"records": []}"#).await;

    let client = AgmarknetClient::new(Some("X".to_string())).with_base_url(base_url);
    let query = PriceQuery::new(Commodity::Potato, State::Maharashtra, Market::Nashik);

    match client.lookup_price(query).await {
        LookupOutcome::NotFound(returned) => assert_eq!(returned, query),
        other => panic!("expected not-found outcome, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn absent_records_key_is_not_found() {
    let (base_url, _hits) = spawn_upstream(StatusCode::OK, r#"{"total": 0, "count": 0}"#).await;

    let client = AgmarknetClient::new(Some("X".to_string())).with_base_url(base_url);
    let outcome = client.lookup_price(potato_query()).await;
    assert!(
        matches!(outcome, LookupOutcome::NotFound(_)),
        "got {:?}",
        outcome
    );
}

#[tokio::test]
async fn missing_credential_short_circuits_without_an_upstream_call() {
    let (base_url, hits) = spawn_upstream(StatusCode::OK, r#"{"records": []}"#).await;

    let client = AgmarknetClient::new(None).with_base_url(base_url);
    let outcome = client.lookup_price(potato_query()).await;

    assert!(
        matches!(outcome, LookupOutcome::Failed(MandiError::Config(_))),
        "got {:?}",
        outcome
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_credential_short_circuits_without_an_upstream_call() {
    let (base_url, hits) = spawn_upstream(StatusCode::OK, r#"{"records": []}"#).await;

    let client = AgmarknetClient::new(Some(String::new())).with_base_url(base_url);
    let outcome = client.lookup_price(potato_query()).await;

    assert!(
        matches!(outcome, LookupOutcome::Failed(MandiError::Config(_))),
        "got {:?}",
        outcome
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn error_status_is_an_api_failure_with_no_retry() {
    let (base_url, hits) =
        spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "boom"}"#).await;

    let client = AgmarknetClient::new(Some("X".to_string())).with_base_url(base_url);
    match client.lookup_price(potato_query()).await {
        LookupOutcome::Failed(MandiError::Api(detail)) => {
            assert!(detail.contains("500"), "detail: {}", detail);
        }
        other => panic!("expected api failure, got {:?}", other),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn malformed_body_is_a_parse_failure() {
    let (base_url, hits) = spawn_upstream(StatusCode::OK, "this is not json").await;

    let client = AgmarknetClient::new(Some("X".to_string())).with_base_url(base_url);
    let outcome = client.lookup_price(potato_query()).await;

    assert!(
        matches!(outcome, LookupOutcome::Failed(MandiError::Parse(_))),
        "got {:?}",
        outcome
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_upstream_is_a_network_failure() {
    // Bind then immediately drop a listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        AgmarknetClient::new(Some("X".to_string())).with_base_url(format!("http://{}", addr));
    let outcome = client.lookup_price(potato_query()).await;

    assert!(
        matches!(outcome, LookupOutcome::Failed(MandiError::Network(_))),
        "got {:?}",
        outcome
    );
}

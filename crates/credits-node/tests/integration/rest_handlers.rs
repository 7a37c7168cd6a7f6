//! REST API handler behavior tests

use axum::{
    body::to_bytes,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use credits_core::{CreditCategory, CreditsConfig, Iterations, ScrollVariant};
use credits_node::server::messages::WsMessage;
use credits_node::server::rest::{self, AddCreditRequest, ErrorBody, ScrollQuery};
use credits_node::AppState;

fn state() -> Arc<AppState> {
    Arc::new(AppState::new(CreditsConfig::default()))
}

async fn add(state: &Arc<AppState>, category: &str, name: &str) -> Result<StatusCode, rest::ApiError> {
    rest::add_credit(
        State(state.clone()),
        Path(category.to_string()),
        Json(AddCreditRequest {
            name: name.to_string(),
        }),
    )
    .await
    .map(|(status, _)| status)
}

async fn error_body(err: rest::ApiError) -> (StatusCode, ErrorBody) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============ Health & Info ============

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    assert_eq!(rest::health().await, "OK");
}

#[tokio::test]
async fn test_node_info() {
    let Json(info) = rest::node_info(State(state())).await;
    assert_eq!(info.name, "Credits");
    assert_eq!(info.variant, ScrollVariant::Padded);
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
}

// ============ Roster ============

#[tokio::test]
async fn test_add_credit_created_then_ok() {
    let state = state();

    assert_eq!(add(&state, "followers", "ann").await.unwrap(), StatusCode::CREATED);
    assert_eq!(add(&state, "followers", "ann").await.unwrap(), StatusCode::OK);
    assert!(state.roster.contains(CreditCategory::Followers, "ann"));
    assert_eq!(state.roster.len(), 1);
}

#[tokio::test]
async fn test_add_credit_unknown_category() {
    let err = add(&state(), "lurkers", "ann").await.unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "UNKNOWN_CATEGORY");
}

#[tokio::test]
async fn test_add_credit_empty_name() {
    let err = add(&state(), "chatters", "   ").await.unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "EMPTY_NAME");
}

#[tokio::test]
async fn test_get_credits_snapshot() {
    let state = state();
    add(&state, "subscribers", "zoe").await.unwrap();
    add(&state, "subscribers", "abe").await.unwrap();

    let Json(snapshot) = rest::get_credits(State(state)).await;
    assert_eq!(
        snapshot.subscribers,
        Some(vec!["abe".to_string(), "zoe".to_string()])
    );
    assert!(snapshot.chatters.is_none());
}

#[tokio::test]
async fn test_remove_credit() {
    let state = state();
    add(&state, "chatters", "kim").await.unwrap();

    let Json(first) = rest::remove_credit(
        State(state.clone()),
        Path(("chatters".to_string(), "kim".to_string())),
    )
    .await
    .unwrap();
    assert!(first.changed);

    let Json(second) = rest::remove_credit(
        State(state.clone()),
        Path(("chatters".to_string(), "kim".to_string())),
    )
    .await
    .unwrap();
    assert!(!second.changed);
    assert!(state.roster.is_empty());
}

#[tokio::test]
async fn test_remove_credit_reports_trimmed_name() {
    let state = state();
    add(&state, "followers", "lee").await.unwrap();
    let mut rx = state.event_tx.subscribe();

    let Json(response) = rest::remove_credit(
        State(state.clone()),
        Path(("followers".to_string(), " lee ".to_string())),
    )
    .await
    .unwrap();
    assert!(response.changed);
    assert_eq!(response.name, "lee");

    match rx.try_recv().unwrap() {
        WsMessage::CreditRemoved { name, .. } => assert_eq!(name, response.name),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn test_clear_credits_broadcasts() {
    let state = state();
    add(&state, "chatters", "kim").await.unwrap();
    let mut rx = state.event_tx.subscribe();

    assert_eq!(rest::clear_credits(State(state.clone())).await, StatusCode::NO_CONTENT);
    assert!(state.roster.is_empty());
    assert!(matches!(rx.try_recv().unwrap(), WsMessage::RosterCleared));
}

// ============ Credits Page ============

#[tokio::test]
async fn test_credits_page_lists_names() {
    let state = state();
    add(&state, "followers", "ivy").await.unwrap();

    let page = rest::credits_page(State(state)).await.unwrap();
    assert!(page.0.contains(r#"<div id="container""#));
    assert!(page.0.contains("ivy"));
    assert!(page.0.contains("/pkg/credits_wasm.js"));
}

// ============ Scroll Plan ============

#[tokio::test]
async fn test_scroll_plan_default_variant() {
    let Json(plan) = rest::scroll_plan(
        State(state()),
        Ok(Query(ScrollQuery {
            content_height: 2000.0,
            viewport_height: 1000.0,
            variant: None,
        })),
    )
    .await
    .unwrap();

    assert_eq!(plan.variant, ScrollVariant::Padded);
    assert_eq!(plan.params.credits_height, -210.0);
    assert_eq!(plan.duration_ms, 18000.0);
    assert_eq!(plan.iterations, Iterations::Infinite);
}

#[tokio::test]
async fn test_scroll_plan_explicit_variant() {
    let Json(plan) = rest::scroll_plan(
        State(state()),
        Ok(Query(ScrollQuery {
            content_height: 2000.0,
            viewport_height: 1000.0,
            variant: Some("flush".to_string()),
        })),
    )
    .await
    .unwrap();

    assert_eq!(plan.params.credits_height, -200.0);
    assert_eq!(plan.duration_ms, 40000.0);
    assert_eq!(plan.keyframes[0].get("top"), Some("105%"));
    assert_eq!(plan.keyframes[1].get("top"), Some("-200%"));
}

#[tokio::test]
async fn test_scroll_plan_zero_viewport() {
    let err = rest::scroll_plan(
        State(state()),
        Ok(Query(ScrollQuery {
            content_height: 500.0,
            viewport_height: 0.0,
            variant: None,
        })),
    )
    .await
    .unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "DEGENERATE_VIEWPORT");
}

#[tokio::test]
async fn test_scroll_plan_malformed_query() {
    let uri: Uri = "/api/scroll?content_height=tall&viewport_height=1000"
        .parse()
        .unwrap();
    let err = rest::scroll_plan(State(state()), Query::<ScrollQuery>::try_from_uri(&uri))
        .await
        .unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code, "INVALID_REQUEST");
}

#[tokio::test]
async fn test_scroll_plan_ignores_configured_start_offset() {
    let config: CreditsConfig =
        serde_json::from_str(r#"{ "scroll": { "start_offset_percent": 50.0 } }"#).unwrap();
    let Json(plan) = rest::scroll_plan(
        State(Arc::new(AppState::new(config))),
        Ok(Query(ScrollQuery {
            content_height: 2000.0,
            viewport_height: 1000.0,
            variant: None,
        })),
    )
    .await
    .unwrap();

    assert_eq!(plan.keyframes[0].get("top"), Some("105%"));
}

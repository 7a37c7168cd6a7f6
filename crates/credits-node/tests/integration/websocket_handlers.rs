//! WebSocket client message handling tests

use credits_core::{CreditCategory, CreditsConfig};
use credits_node::server::messages::{ClientMessage, WsMessage};
use credits_node::server::websocket::handle_client_message;
use credits_node::{spawn_heartbeat, AppState};
use std::sync::Arc;
use std::time::Duration;

fn parse(json: &str) -> ClientMessage {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_add_credit_is_broadcast_not_replied() {
    let state = AppState::new(CreditsConfig::default());
    let mut rx = state.event_tx.subscribe();

    let reply = handle_client_message(
        parse(r#"{"type": "add_credit", "category": "subscribers", "name": "rex"}"#),
        &state,
    );

    assert!(reply.is_none());
    assert!(state.roster.contains(CreditCategory::Subscribers, "rex"));
    assert!(matches!(
        rx.try_recv().unwrap(),
        WsMessage::CreditAdded { category: CreditCategory::Subscribers, .. }
    ));
}

#[test]
fn test_add_credit_bad_category_replies_error() {
    let state = AppState::new(CreditsConfig::default());

    let reply = handle_client_message(
        parse(r#"{"type": "add_credit", "category": "mods", "name": "rex"}"#),
        &state,
    );

    match reply {
        Some(WsMessage::Error { code, .. }) => assert_eq!(code, "UNKNOWN_CATEGORY"),
        other => panic!("expected error reply, got {:?}", other),
    }
    assert!(state.roster.is_empty());
}

#[test]
fn test_remove_credit() {
    let state = AppState::new(CreditsConfig::default());
    state.add_credit(CreditCategory::Chatters, "ola").unwrap();

    let reply = handle_client_message(
        parse(r#"{"type": "remove_credit", "category": "chatters", "name": "ola"}"#),
        &state,
    );

    assert!(reply.is_none());
    assert!(state.roster.is_empty());
}

#[test]
fn test_get_roster_replies_snapshot() {
    let state = AppState::new(CreditsConfig::default());
    state.add_credit(CreditCategory::Followers, "uma").unwrap();

    match handle_client_message(parse(r#"{"type": "get_roster"}"#), &state) {
        Some(WsMessage::Roster { roster }) => {
            assert_eq!(roster.followers, Some(vec!["uma".to_string()]));
        }
        other => panic!("expected roster reply, got {:?}", other),
    }
}

#[test]
fn test_get_stats_counts_categories() {
    let state = AppState::new(CreditsConfig::default());
    state.add_credit(CreditCategory::Chatters, "a").unwrap();
    state.add_credit(CreditCategory::Chatters, "b").unwrap();
    state.add_credit(CreditCategory::Subscribers, "c").unwrap();

    match handle_client_message(parse(r#"{"type": "get_stats"}"#), &state) {
        Some(WsMessage::Stats {
            chatters,
            followers,
            subscribers,
            ..
        }) => {
            assert_eq!(chatters, 2);
            assert_eq!(followers, 0);
            assert_eq!(subscribers, 1);
        }
        other => panic!("expected stats reply, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_heartbeat_sends_stats() {
    let mut config = CreditsConfig::default();
    config.server.heartbeat_interval = Duration::from_secs(5);
    let state = Arc::new(AppState::new(config));
    let mut rx = state.event_tx.subscribe();

    let handle = spawn_heartbeat(state.clone());
    let event = rx.recv().await.unwrap();
    handle.abort();

    assert!(matches!(event, WsMessage::Stats { .. }));
}

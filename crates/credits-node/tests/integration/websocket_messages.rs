//! WebSocket message format tests

use credits_core::{CreditCategory, CreditsRoster};
use credits_node::server::messages::{ClientMessage, WsMessage};
use serde_json::{json, Value};

fn to_json(msg: &WsMessage) -> Value {
    serde_json::to_value(msg).unwrap()
}

#[test]
fn test_credit_added_format() {
    let value = to_json(&WsMessage::CreditAdded {
        category: CreditCategory::Followers,
        name: "nia".to_string(),
        timestamp: 1_700_000_000_000,
    });

    assert_eq!(value["type"], "credit_added");
    assert_eq!(value["category"], "followers");
    assert_eq!(value["name"], "nia");
    assert!(value["timestamp"].is_number());
}

#[test]
fn test_roster_cleared_format() {
    assert_eq!(to_json(&WsMessage::RosterCleared), json!({ "type": "roster_cleared" }));
}

#[test]
fn test_roster_format_empty_categories_null() {
    let roster = CreditsRoster::new();
    roster.add(CreditCategory::Chatters, "eli").unwrap();

    let value = to_json(&WsMessage::Roster {
        roster: roster.snapshot(),
    });

    assert_eq!(value["type"], "roster");
    assert_eq!(value["roster"]["chatters"], json!(["eli"]));
    assert!(value["roster"]["followers"].is_null());
    assert!(value["roster"]["subscribers"].is_null());
}

#[test]
fn test_stats_format() {
    let value = to_json(&WsMessage::Stats {
        chatters: 3,
        followers: 1,
        subscribers: 0,
        uptime_seconds: 42,
    });

    assert_eq!(value["type"], "stats");
    assert_eq!(value["chatters"], 3);
    assert_eq!(value["uptime_seconds"], 42);
}

#[test]
fn test_ws_message_round_trip() {
    let original = WsMessage::CreditRemoved {
        category: CreditCategory::Subscribers,
        name: "ora".to_string(),
    };
    let json = serde_json::to_string(&original).unwrap();
    let parsed: WsMessage = serde_json::from_str(&json).unwrap();

    match parsed {
        WsMessage::CreditRemoved { category, name } => {
            assert_eq!(category, CreditCategory::Subscribers);
            assert_eq!(name, "ora");
        }
        other => panic!("unexpected message: {:?}", other),
    }
}

#[test]
fn test_client_message_parsing() {
    let msg: ClientMessage =
        serde_json::from_str(r#"{"type": "add_credit", "category": "chatters", "name": "joy"}"#)
            .unwrap();
    assert!(matches!(msg, ClientMessage::AddCredit { .. }));

    let msg: ClientMessage = serde_json::from_str(r#"{"type": "get_stats"}"#).unwrap();
    assert!(matches!(msg, ClientMessage::GetStats));

    assert!(serde_json::from_str::<ClientMessage>(r#"{"type": "explode"}"#).is_err());
}

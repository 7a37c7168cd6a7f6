//! WebSocket connection handling

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

use credits_core::{CreditCategory, CreditsError};

use crate::AppState;
use super::messages::{ClientMessage, WsMessage};

/// Handle WebSocket upgrade
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("New WebSocket connection established");
    let (mut sender, mut receiver) = socket.split();

    // Subscribe before the snapshot so no change is missed in between
    let mut event_rx = state.event_tx.subscribe();
    let (reply_tx, mut reply_rx) = mpsc::channel::<WsMessage>(16);

    let init_msg = WsMessage::Roster {
        roster: state.roster.snapshot(),
    };
    if let Ok(json) = serde_json::to_string(&init_msg) {
        let _ = sender.send(Message::Text(json.into())).await;
    }

    // Forward broadcast events and direct replies to this client
    let mut send_task = tokio::spawn(async move {
        loop {
            let outgoing = tokio::select! {
                event = event_rx.recv() => match event {
                    Ok(event) => event,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("WebSocket client lagged, skipped {} events", skipped);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                reply = reply_rx.recv() => match reply {
                    Some(reply) => reply,
                    None => break,
                },
            };

            if let Ok(json) = serde_json::to_string(&outgoing) {
                if sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
        }
    });

    // Handle incoming messages from client
    let state_clone = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    debug!("Received WebSocket text: {}", text);
                    let reply = match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => handle_client_message(client_msg, &state_clone),
                        Err(e) => {
                            warn!("Failed to parse client message: {} - raw: {}", e, text);
                            Some(error_message(&CreditsError::Serialization(e.to_string())))
                        }
                    };
                    if let Some(reply) = reply {
                        if reply_tx.send(reply).await.is_err() {
                            break;
                        }
                    }
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    info!("WebSocket connection closed");
}

/// Apply a client message; returns the reply meant for that client only
///
/// Roster changes are not echoed here, they reach every client through the
/// broadcast channel.
pub fn handle_client_message(msg: ClientMessage, state: &AppState) -> Option<WsMessage> {
    match msg {
        ClientMessage::AddCredit { category, name } => {
            let result = category
                .parse::<CreditCategory>()
                .and_then(|category| state.add_credit(category, &name));
            result.err().map(|e| error_message(&e))
        }
        ClientMessage::RemoveCredit { category, name } => match category.parse::<CreditCategory>() {
            Ok(category) => {
                state.remove_credit(category, &name);
                None
            }
            Err(e) => Some(error_message(&e)),
        },
        ClientMessage::GetRoster => Some(WsMessage::Roster {
            roster: state.roster.snapshot(),
        }),
        ClientMessage::GetStats => Some(state.stats()),
    }
}

fn error_message(err: &CreditsError) -> WsMessage {
    WsMessage::Error {
        message: err.to_string(),
        code: err.error_code().to_string(),
    }
}

//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::dashboard::{DashboardController, DashboardSnapshot, Page};

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts message handling.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let controller = Arc::clone(&state.controller);
    ws.on_upgrade(move |socket| handle_socket(socket, controller))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, controller: Arc<DashboardController>) {
    let (mut sender, mut receiver) = socket.split();
    let connection_id = uuid::Uuid::new_v4().to_string();

    tracing::debug!(connection_id = %connection_id, "WebSocket connected");

    // Create channel for sending messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Task to forward messages from channel to WebSocket
    let conn_id_for_send = connection_id.clone();
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match msg.to_json() {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            connection_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    // Task to push a snapshot now and after every transition
    let mut states = controller.subscribe();
    let tx_for_push = tx.clone();
    let conn_id_for_push = connection_id.clone();
    let mut push_task = tokio::spawn(async move {
        let current = states.borrow_and_update().snapshot();
        if send_greeting(&tx_for_push, conn_id_for_push, current).is_err() {
            return;
        }
        while states.changed().await.is_ok() {
            let snapshot = states.borrow_and_update().snapshot();
            if tx_for_push.send(ServerMessage::Snapshot(snapshot)).is_err() {
                break;
            }
        }
    });

    // Task to receive messages from WebSocket and handle them
    let conn_id_for_recv = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(&controller, &conn_id_for_recv, msg, &tx) {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for any task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
            push_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
            push_task.abort();
        }
        _ = &mut push_task => {
            send_task.abort();
            recv_task.abort();
        }
    }

    tracing::debug!(connection_id = %connection_id, "WebSocket disconnected");
}

/// Queue the `connected` message and the first snapshot
///
/// Fails as soon as the connection's send side is gone.
fn send_greeting(
    tx: &mpsc::UnboundedSender<ServerMessage>,
    connection_id: String,
    snapshot: DashboardSnapshot,
) -> Result<(), mpsc::error::SendError<ServerMessage>> {
    tx.send(ServerMessage::Connected { connection_id })?;
    tx.send(ServerMessage::Snapshot(snapshot))
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
fn handle_ws_message(
    controller: &DashboardController,
    connection_id: &str,
    message: Message,
    tx: &mpsc::UnboundedSender<ServerMessage>,
) -> bool {
    let reply = match message {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(client_msg) => handle_client_message(controller, client_msg),
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    text = %text,
                    "Invalid client message"
                );
                // Send error but keep connection open
                Some(ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                })
            }
        },
        Message::Binary(_) => Some(ServerMessage::Error {
            message: "Binary messages not supported".to_string(),
        }),
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => None,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            return false;
        }
    };

    match reply {
        Some(msg) => tx.send(msg).is_ok(),
        None => true,
    }
}

/// Handle a parsed client message
///
/// A selection that changes the page is answered by the snapshot push, so
/// only unchanged selections get a direct snapshot reply.
fn handle_client_message(
    controller: &DashboardController,
    message: ClientMessage,
) -> Option<ServerMessage> {
    match message {
        ClientMessage::SelectPage { page } => {
            if let Err(e) = page.parse::<Page>() {
                return Some(ServerMessage::Error {
                    message: e.to_string(),
                });
            }

            let transition = controller.select_page(&page);
            if transition.changed {
                None
            } else {
                Some(ServerMessage::Snapshot(transition.state.snapshot()))
            }
        }
        ClientMessage::Ping => Some(ServerMessage::Pong),
    }
}

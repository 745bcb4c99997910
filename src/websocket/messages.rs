//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! dashboard clients and the Matchboard server.

use serde::{Deserialize, Serialize};

use crate::dashboard::DashboardSnapshot;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Select a page by label or slug
    SelectPage { page: String },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Current dashboard state
    Snapshot(DashboardSnapshot),
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl ServerMessage {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardState;

    #[test]
    fn test_client_message_deserialize() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type": "select_page", "page": "Reports"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::SelectPage { page } if page == "Reports"));

        let msg: ClientMessage = serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_client_message_rejects_unknown_type() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type": "subscribe"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type": "select_page"}"#).is_err());
    }

    #[test]
    fn test_server_message_serialize() {
        let json = ServerMessage::Connected {
            connection_id: "abc".to_string(),
        }
        .to_json()
        .unwrap();
        assert_eq!(json, r#"{"type":"connected","connection_id":"abc"}"#);

        assert_eq!(ServerMessage::Pong.to_json().unwrap(), r#"{"type":"pong"}"#);
    }

    #[test]
    fn test_snapshot_is_flattened() {
        let msg = ServerMessage::Snapshot(DashboardState::mounted().snapshot());
        let value: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();

        assert_eq!(value["type"], "snapshot");
        assert_eq!(value["loading"], true);
        assert_eq!(value["page"]["slug"], "real-time-dashboard");
        assert_eq!(value["summary"]["total_participants"], 150);
    }
}

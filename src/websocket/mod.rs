//! WebSocket Snapshot Streaming
//!
//! Pushes dashboard snapshots to connected clients and lets them change
//! the selected page.
//!
//! ## Protocol
//!
//! On connect the server sends `connected` followed by the current
//! `snapshot`, then a fresh `snapshot` after every state transition
//! (load cycle settled, page selected by any client).
//!
//! Clients may send:
//! - `{"type": "select_page", "page": "<label|slug>"}`
//! - `{"type": "ping"}`
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8090/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'select_page', page: 'Reports'}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   console.log('Received:', msg);
//! };
//! ```

mod handler;
mod messages;

pub use handler::websocket_handler;
pub use messages::{ClientMessage, ServerMessage};

//! Message — the inbound unit pushed by the host UI framework.
//!
//! DESIGN
//! ======
//! - Every push from the server arrives as one `Message`: a channel name
//!   plus an arbitrary JSON payload.
//! - The payload stays a flexible `serde_json::Value` here; handlers parse
//!   it into typed structs at their own boundary.
//! - The transport hands this crate JSON text; [`Message::from_json`] is the
//!   codec seam. A message with an empty channel name can never be routed
//!   and is rejected at decode time.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Error returned by [`Message::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The text could not be decoded as a JSON message.
    #[error("failed to decode message: {0}")]
    Parse(#[from] serde_json::Error),
    /// The decoded message carries an empty channel name.
    #[error("message channel name is empty")]
    EmptyChannel,
}

/// A single named message on the inbound channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    pub id: Uuid,
    /// Milliseconds since the Unix epoch when the message was created.
    pub ts: i64,
    /// Channel name the message is addressed to, e.g. `"toggle-dark"`.
    pub channel: String,
    /// Arbitrary JSON payload.
    pub data: Value,
}

/// Current time as milliseconds since Unix epoch.
fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

impl Message {
    /// Create a message addressed to `channel`. Assigns `id` and `ts`.
    pub fn new(channel: impl Into<String>, data: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            ts: now_ms(),
            channel: channel.into(),
            data,
        }
    }

    /// Decode a message from the JSON text handed over by the transport.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::Parse`] for malformed text and
    /// [`MessageError::EmptyChannel`] for a message that names no channel.
    pub fn from_json(text: &str) -> Result<Self, MessageError> {
        let message: Self = serde_json::from_str(text)?;
        if message.channel.is_empty() {
            return Err(MessageError::EmptyChannel);
        }
        Ok(message)
    }

    /// Encode the message as JSON text.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serializing a Message is infallible: every field is a plain JSON
        // shape and `Value` maps are always string-keyed.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

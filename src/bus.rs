//! Named-channel subscription and dispatch.
//!
//! DESIGN
//! ======
//! - One handler per channel, registered once at startup and kept for the
//!   lifetime of the bus. Registration failures surface at wiring time,
//!   never at message time.
//! - Handlers receive the message payload only; the envelope stays a bus
//!   concern. The host framework expects nothing back from a handler, so
//!   dispatch reports delivery, not handler outcome.
//! - Single-threaded by contract: handlers run synchronously on the caller's
//!   thread, strictly in arrival order, so there are no `Send` bounds.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde_json::Value;

use crate::message::{Message, MessageError};

/// Error returned by [`MessageBus::subscribe`].
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    /// The channel already has a handler registered.
    #[error("channel {0:?} already has a handler")]
    DuplicateChannel(String),
    /// The channel name is empty and could never match a message.
    #[error("channel name is empty")]
    EmptyChannel,
}

type Handler = Box<dyn FnMut(&Value)>;

/// Routes inbound messages to the handler subscribed under their channel.
#[derive(Default)]
pub struct MessageBus {
    handlers: HashMap<String, Handler>,
}

impl MessageBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `channel`, for the lifetime of the bus.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::DuplicateChannel`] if the channel is already
    /// taken and [`BusError::EmptyChannel`] for an empty name. Both are
    /// wiring bugs and should fail application startup.
    pub fn subscribe(
        &mut self,
        channel: impl Into<String>,
        handler: impl FnMut(&Value) + 'static,
    ) -> Result<(), BusError> {
        let channel = channel.into();
        if channel.is_empty() {
            return Err(BusError::EmptyChannel);
        }
        match self.handlers.entry(channel) {
            Entry::Occupied(entry) => Err(BusError::DuplicateChannel(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(Box::new(handler));
                Ok(())
            }
        }
    }

    /// Whether a handler is registered under `channel`.
    #[must_use]
    pub fn is_subscribed(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    /// Route `message` to its channel's handler.
    ///
    /// Runs the handler synchronously and returns `true` if one was found.
    /// A message for an unknown channel is logged and dropped.
    pub fn dispatch(&mut self, message: &Message) -> bool {
        let Some(handler) = self.handlers.get_mut(&message.channel) else {
            tracing::warn!(channel = %message.channel, "no handler for inbound message");
            return false;
        };
        handler(&message.data);
        true
    }

    /// Decode JSON text from the transport and dispatch the message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError`] if the text is not a well-formed message.
    pub fn dispatch_json(&mut self, text: &str) -> Result<bool, MessageError> {
        let message = Message::from_json(text)?;
        Ok(self.dispatch(&message))
    }
}

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

//! Dark mode toggle driven by server push.
//!
//! The server decides when the theme changes and pushes a message on the
//! `"toggle-dark"` channel; the client's only job is to make the root's
//! `dark-mode` class agree with the latest `enable` flag. Each message is a
//! single stateless transition, applied synchronously and unconditionally,
//! so the class always reflects the most recently received value.
//!
//! Malformed payloads (missing or non-boolean `enable`) are logged at warn
//! level and treated as `enable = false`. Callers that want to fail fast
//! instead can parse with [`ToggleMessage::from_payload`] directly.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bus::{BusError, MessageBus};
use crate::dom::DocumentRoot;

/// Channel the host framework pushes theme toggles on.
pub const TOGGLE_DARK: &str = "toggle-dark";

/// Class that switches the page to the dark theme.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Error returned by [`ToggleMessage::from_payload`].
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// The payload has no `enable` field.
    #[error("toggle payload is missing the `enable` field")]
    MissingEnable,
    /// The payload's `enable` field is not a boolean.
    #[error("toggle payload `enable` is not a boolean: {0}")]
    InvalidEnable(Value),
}

/// Payload of a `"toggle-dark"` message.
///
/// Constructed by the server for each toggle event and consumed exactly
/// once. Fields other than `enable` are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleMessage {
    /// Whether dark mode should be on after this message.
    pub enable: bool,
}

impl ToggleMessage {
    /// Parse a toggle out of a raw payload, rejecting malformed input.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::MissingEnable`] if the payload has no
    /// `enable` field and [`ToggleError::InvalidEnable`] if the field is
    /// not a boolean.
    pub fn from_payload(data: &Value) -> Result<Self, ToggleError> {
        let Some(enable) = data.get("enable") else {
            return Err(ToggleError::MissingEnable);
        };
        let Some(enable) = enable.as_bool() else {
            return Err(ToggleError::InvalidEnable(enable.clone()));
        };
        Ok(Self { enable })
    }
}

/// Make the root's `dark-mode` class membership agree with `enable`.
///
/// Idempotent: re-applying the current state changes nothing.
pub fn apply_toggle(enable: bool, root: &mut DocumentRoot) {
    root.class_list_mut().set(DARK_MODE_CLASS, enable);
}

/// Per-message entry point: parse the payload and apply it to `root`.
///
/// A malformed payload falls back to `enable = false` after a warn log, so
/// a bad push leaves the page in the light theme rather than a stale one.
pub fn handle_toggle(data: &Value, root: &mut DocumentRoot) {
    let enable = match ToggleMessage::from_payload(data) {
        Ok(toggle) => toggle.enable,
        Err(e) => {
            tracing::warn!(error = %e, "malformed toggle payload, defaulting to light mode");
            false
        }
    };
    apply_toggle(enable, root);
}

/// Subscribe the toggle handler on `bus` for the lifetime of the page.
///
/// Single-threaded cooperative model: the root is shared with the rest of
/// the application via `Rc<RefCell<_>>` and only borrowed for the duration
/// of one synchronous message.
///
/// # Errors
///
/// Returns [`BusError`] if the `"toggle-dark"` channel is already taken;
/// the application should treat that as a startup failure.
pub fn register_toggle_handler(
    bus: &mut MessageBus,
    root: Rc<RefCell<DocumentRoot>>,
) -> Result<(), BusError> {
    bus.subscribe(TOGGLE_DARK, move |data| {
        handle_toggle(data, &mut root.borrow_mut());
    })
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

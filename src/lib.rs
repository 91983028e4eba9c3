//! # darkswitch
//!
//! Client-runtime bridge between a server-driven UI framework's named
//! message channel and the page's theme class.
//!
//! ARCHITECTURE
//! ============
//! The host framework pushes named messages to the client as JSON text.
//! A [`bus::MessageBus`] routes each decoded [`message::Message`] to the
//! handler subscribed under its channel name. The theme handler consumes
//! `"toggle-dark"` payloads and flips the `dark-mode` class on an injected
//! [`dom::DocumentRoot`], so the whole path is testable without a live DOM.
//!
//! The surrounding application wires this up once at startup:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use darkswitch::{DocumentRoot, MessageBus, register_toggle_handler};
//!
//! let mut bus = MessageBus::new();
//! let root = Rc::new(RefCell::new(DocumentRoot::default()));
//! register_toggle_handler(&mut bus, Rc::clone(&root)).expect("wiring");
//!
//! bus.dispatch_json(r#"{"id":"2c6f3f9e-9f1a-4c65-9f0a-0f9a6a6d7b10","ts":0,"channel":"toggle-dark","data":{"enable":true}}"#)
//!     .expect("decode");
//! assert!(root.borrow().class_list().contains("dark-mode"));
//! ```

pub mod bus;
pub mod dom;
pub mod message;
pub mod theme;

pub use bus::{BusError, MessageBus};
pub use dom::{ClassList, DocumentRoot};
pub use message::{Message, MessageError};
pub use theme::{
    DARK_MODE_CLASS, TOGGLE_DARK, ToggleError, ToggleMessage, apply_toggle, handle_toggle,
    register_toggle_handler,
};

use super::*;

use crate::message::Message;

fn payload(enable: bool) -> Value {
    serde_json::json!({ "enable": enable })
}

// =============================================================
// ToggleMessage parsing
// =============================================================

#[test]
fn from_payload_reads_enable_flag() {
    let toggle = ToggleMessage::from_payload(&payload(true)).expect("parse");
    assert!(toggle.enable);

    let toggle = ToggleMessage::from_payload(&payload(false)).expect("parse");
    assert!(!toggle.enable);
}

#[test]
fn from_payload_ignores_extra_fields() {
    let data = serde_json::json!({"enable": true, "requested_by": "u-1"});
    let toggle = ToggleMessage::from_payload(&data).expect("parse");
    assert!(toggle.enable);
}

#[test]
fn from_payload_rejects_missing_enable() {
    let err = ToggleMessage::from_payload(&serde_json::json!({})).expect_err("should fail");
    assert!(matches!(err, ToggleError::MissingEnable));
}

#[test]
fn from_payload_rejects_non_boolean_enable() {
    let err = ToggleMessage::from_payload(&serde_json::json!({"enable": "yes"}))
        .expect_err("should fail");
    assert!(matches!(err, ToggleError::InvalidEnable(_)));
}

// =============================================================
// apply_toggle
// =============================================================

#[test]
fn enable_true_adds_dark_mode_class() {
    let mut root = DocumentRoot::new();
    apply_toggle(true, &mut root);
    assert!(root.class_list().contains(DARK_MODE_CLASS));
}

#[test]
fn enable_false_removes_dark_mode_class() {
    let mut root = DocumentRoot::new();
    root.class_list_mut().add(DARK_MODE_CLASS);
    apply_toggle(false, &mut root);
    assert!(!root.class_list().contains(DARK_MODE_CLASS));
}

#[test]
fn repeated_enable_is_idempotent() {
    let mut root = DocumentRoot::new();
    root.class_list_mut().add(DARK_MODE_CLASS);
    apply_toggle(true, &mut root);
    apply_toggle(true, &mut root);

    assert!(root.class_list().contains(DARK_MODE_CLASS));
    assert_eq!(root.class_list().len(), 1);
}

#[test]
fn toggle_leaves_other_classes_alone() {
    let mut root = DocumentRoot::new();
    root.class_list_mut().add("page");
    apply_toggle(true, &mut root);
    apply_toggle(false, &mut root);

    assert!(root.class_list().contains("page"));
    assert_eq!(root.class_list().to_attr(), "page");
}

// =============================================================
// handle_toggle policy
// =============================================================

#[test]
fn handle_toggle_applies_well_formed_payload() {
    let mut root = DocumentRoot::new();
    handle_toggle(&payload(true), &mut root);
    assert!(root.class_list().contains(DARK_MODE_CLASS));
}

#[test]
fn malformed_payload_defaults_to_light_mode() {
    let mut root = DocumentRoot::new();
    root.class_list_mut().add(DARK_MODE_CLASS);

    handle_toggle(&serde_json::json!({}), &mut root);
    assert!(!root.class_list().contains(DARK_MODE_CLASS));
}

#[test]
fn non_boolean_enable_defaults_to_light_mode() {
    let mut root = DocumentRoot::new();
    root.class_list_mut().add(DARK_MODE_CLASS);

    handle_toggle(&serde_json::json!({"enable": 1}), &mut root);
    assert!(!root.class_list().contains(DARK_MODE_CLASS));
}

// =============================================================
// Bus wiring
// =============================================================

#[test]
fn registered_handler_flips_class_from_the_wire() {
    let mut bus = MessageBus::new();
    let root = Rc::new(RefCell::new(DocumentRoot::new()));
    register_toggle_handler(&mut bus, Rc::clone(&root)).expect("register");
    assert!(bus.is_subscribed(TOGGLE_DARK));

    let on = Message::new(TOGGLE_DARK, payload(true)).to_json();
    bus.dispatch_json(&on).expect("decode");
    assert!(root.borrow().class_list().contains(DARK_MODE_CLASS));

    let off = Message::new(TOGGLE_DARK, payload(false)).to_json();
    bus.dispatch_json(&off).expect("decode");
    assert!(!root.borrow().class_list().contains(DARK_MODE_CLASS));
}

#[test]
fn final_state_matches_last_message_only() {
    let mut bus = MessageBus::new();
    let root = Rc::new(RefCell::new(DocumentRoot::new()));
    register_toggle_handler(&mut bus, Rc::clone(&root)).expect("register");

    for enable in [true, false, true, true, false] {
        bus.dispatch(&Message::new(TOGGLE_DARK, payload(enable)));
    }
    assert!(!root.borrow().class_list().contains(DARK_MODE_CLASS));

    bus.dispatch(&Message::new(TOGGLE_DARK, payload(true)));
    assert!(root.borrow().class_list().contains(DARK_MODE_CLASS));
}

#[test]
fn double_registration_fails_at_startup() {
    let mut bus = MessageBus::new();
    let root = Rc::new(RefCell::new(DocumentRoot::new()));
    register_toggle_handler(&mut bus, Rc::clone(&root)).expect("register");

    let err = register_toggle_handler(&mut bus, root).expect_err("duplicate should fail");
    assert!(matches!(err, BusError::DuplicateChannel(name) if name == TOGGLE_DARK));
}

#[test]
fn messages_on_other_channels_do_not_touch_the_root() {
    let mut bus = MessageBus::new();
    let root = Rc::new(RefCell::new(DocumentRoot::new()));
    register_toggle_handler(&mut bus, Rc::clone(&root)).expect("register");

    let delivered = bus.dispatch(&Message::new("chat:message", payload(true)));
    assert!(!delivered);
    assert!(root.borrow().class_list().is_empty());
}

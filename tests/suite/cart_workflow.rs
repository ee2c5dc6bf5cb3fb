//! Cart membership and toast behavior driven through the public `App` API.

use std::time::Duration;

use lootdrop_engine::{CardState, WorkflowSettings};

use crate::common::{TOAST, add, app, app_with, cart_names, name_of, run_frames};

#[test]
fn duplicate_add_is_silently_ignored() {
    let mut app = app();
    assert!(add(&mut app, "A"));
    assert!(add(&mut app, "B"));
    assert!(!add(&mut app, "A"));
    assert_eq!(cart_names(&app), vec!["A", "B"]);
}

#[test]
fn full_cart_ignores_new_items() {
    let mut app = app();
    for name in ["A", "B", "C", "D"] {
        assert!(add(&mut app, name));
    }
    assert!(app.cart().is_full());
    assert!(!add(&mut app, "E"));
    assert_eq!(cart_names(&app), vec!["A", "B", "C", "D"]);
    assert!(app.cart().is_full());
    let e = app.catalog().get(&name_of("E")).expect("in catalog").clone();
    assert_eq!(app.card_state(&e), CardState::CartFull);
}

#[test]
fn configured_capacity_is_enforced() {
    let mut app = app_with(WorkflowSettings {
        max_cart_items: 2,
        ..WorkflowSettings::default()
    });
    add(&mut app, "A");
    add(&mut app, "B");
    assert!(!add(&mut app, "C"));
    assert_eq!(app.cart().len(), 2);
}

#[test]
fn remove_keeps_order_and_ignores_absent() {
    let mut app = app();
    for name in ["A", "B", "C"] {
        add(&mut app, name);
    }
    assert!(!app.remove_from_cart(&name_of("F")));
    assert!(app.remove_from_cart(&name_of("B")));
    assert_eq!(cart_names(&app), vec!["A", "C"]);
}

#[test]
fn toast_window_restarts_on_each_add() {
    let mut app = app();
    add(&mut app, "A");
    run_frames(&mut app, Duration::from_secs(4));
    add(&mut app, "B");
    run_frames(&mut app, Duration::from_secs(4));
    add(&mut app, "C");
    run_frames(&mut app, TOAST - Duration::from_millis(8));
    assert!(app.toast_visible());
    run_frames(&mut app, Duration::from_millis(8));
    assert!(!app.toast_visible());
}

#[test]
fn rejected_add_does_not_show_toast() {
    let mut app = app();
    add(&mut app, "A");
    app.dismiss_toast();
    assert!(!add(&mut app, "A"));
    assert!(!app.toast_visible());
}

#[test]
fn toast_dismissal_is_final() {
    let mut app = app();
    add(&mut app, "A");
    app.dismiss_toast();
    run_frames(&mut app, TOAST * 2);
    assert!(!app.toast_visible());
}

//! Checkout gate behavior.

use std::time::Duration;

use lootdrop_engine::{InputMode, View, WorkflowSettings};

use crate::common::{TICK, add, app, app_with, cart_names, run_frames};

#[test]
fn empty_cart_checkout_is_a_noop() {
    let mut app = app();
    app.go_to_cart();
    assert!(!app.request_checkout());
    assert_eq!(app.input_mode(), InputMode::Cart);
    assert!(app.provisioning().is_none());
}

#[test]
fn countdown_reaches_zero_after_five_ticks() {
    let mut app = app();
    add(&mut app, "A");
    app.go_to_cart();
    assert!(app.request_checkout());
    for k in 0..5u32 {
        assert_eq!(app.checkout_countdown(), Some(5 - k));
        assert!(!app.confirm_checkout());
        run_frames(&mut app, TICK);
    }
    assert_eq!(app.checkout_countdown(), Some(0));
    assert!(app.confirm_checkout());
    assert_eq!(app.checkout_countdown(), None);
}

#[test]
fn countdown_holds_at_zero() {
    let mut app = app();
    add(&mut app, "A");
    app.go_to_cart();
    app.request_checkout();
    run_frames(&mut app, TICK * 30);
    assert_eq!(app.checkout_countdown(), Some(0));
}

#[test]
fn configured_countdown_is_used() {
    let mut app = app_with(WorkflowSettings {
        countdown_ticks: 2,
        countdown_tick: Duration::from_millis(250),
        ..WorkflowSettings::default()
    });
    add(&mut app, "A");
    app.go_to_cart();
    app.request_checkout();
    assert_eq!(app.checkout_countdown(), Some(2));
    run_frames(&mut app, Duration::from_millis(500));
    assert!(app.confirm_checkout());
}

#[test]
fn cancel_has_no_side_effects() {
    let mut app = app();
    add(&mut app, "A");
    add(&mut app, "B");
    app.go_to_cart();
    app.request_checkout();
    run_frames(&mut app, TICK * 4);
    assert!(app.cancel_checkout());
    assert_eq!(cart_names(&app), vec!["A", "B"]);
    assert_eq!(app.input_mode(), InputMode::Cart);
}

#[test]
fn leaving_the_cart_discards_the_gate() {
    let mut app = app();
    add(&mut app, "A");
    app.go_to_cart();
    app.request_checkout();
    run_frames(&mut app, TICK * 3);
    app.go_home();
    app.go_to_cart();
    assert_eq!(app.checkout_countdown(), None);
    assert!(app.request_checkout());
    assert_eq!(app.checkout_countdown(), Some(5));
    assert_eq!(app.view(), View::Cart);
}

#[test]
fn second_request_does_not_restart_the_countdown() {
    let mut app = app();
    add(&mut app, "A");
    app.go_to_cart();
    app.request_checkout();
    run_frames(&mut app, TICK * 2);
    assert!(!app.request_checkout());
    assert_eq!(app.checkout_countdown(), Some(3));
}

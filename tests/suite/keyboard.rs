//! Full keyboard-driven runs through the TUI key maps.

use crossterm::event::KeyCode;

use lootdrop_engine::{InputMode, Language, View};
use lootdrop_types::content;

use crate::common::{PLAYBACK, TICK, app, cart_names, press_all, render, run_frames};

#[test]
fn browse_add_checkout_and_leave() {
    let mut app = app();
    // A, then B, then A again.
    press_all(
        &mut app,
        &[KeyCode::Enter, KeyCode::Right, KeyCode::Enter, KeyCode::Left, KeyCode::Enter],
    );
    assert_eq!(cart_names(&app), vec!["A", "B"]);

    press_all(&mut app, &[KeyCode::Char('c'), KeyCode::Enter]);
    assert_eq!(app.input_mode(), InputMode::Confirm);
    run_frames(&mut app, TICK * 5);
    press_all(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.input_mode(), InputMode::Console);

    run_frames(&mut app, PLAYBACK * 20);
    assert!(app.can_open_destination());
    assert_eq!(cart_names(&app), vec!["A", "B"]);

    press_all(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.view(), View::Catalog);
    assert!(app.cart().is_empty());
}

#[test]
fn toast_shortcut_opens_cart() {
    let mut app = app();
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Char('t')]);
    assert_eq!(app.view(), View::Cart);
    assert!(!app.toast_visible());
}

#[test]
fn hero_shortcut_browses_then_opens_cart() {
    let mut app = app();
    press_all(&mut app, &[KeyCode::Char('/'), KeyCode::Char('z'), KeyCode::Enter]);
    assert_eq!(app.search_query(), "z");
    press_all(&mut app, &[KeyCode::Char('g')]);
    assert_eq!(app.search_query(), "");
    assert_eq!(app.view(), View::Catalog);

    press_all(&mut app, &[KeyCode::Enter, KeyCode::Char('g')]);
    assert_eq!(app.view(), View::Cart);
}

#[test]
fn language_switch_rerenders_labels() {
    let mut app = app();
    app.go_to_cart();
    let english = render(&app, 100, 24);
    assert!(english.contains(content(Language::En).empty_cart_title));

    press_all(&mut app, &[KeyCode::Char('L')]);
    assert_eq!(app.language(), Language::Ka);
    let georgian = render(&app, 100, 24);
    assert!(georgian.contains(content(Language::Ka).nav_cart));
}

#[test]
fn remove_key_is_blocked_while_confirming() {
    let mut app = app();
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Char('c'), KeyCode::Enter]);
    press_all(&mut app, &[KeyCode::Char('d')]);
    assert_eq!(app.cart().len(), 1);
    press_all(&mut app, &[KeyCode::Esc, KeyCode::Char('d')]);
    assert!(app.cart().is_empty());
}

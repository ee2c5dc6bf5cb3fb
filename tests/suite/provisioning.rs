//! Provisioning playback and the deferred cart clear.

use lootdrop_engine::{App, Language, OutboundAction, View};
use lootdrop_types::content;

use crate::common::{PLAYBACK, TICK, add, app, cart_names, render, run_frames};

fn confirm(app: &mut App) {
    app.go_to_cart();
    assert!(app.request_checkout());
    run_frames(app, TICK * 5);
    assert!(app.confirm_checkout());
}

#[test]
fn end_to_end_scenario() {
    let mut app = app();
    add(&mut app, "A");
    add(&mut app, "B");
    add(&mut app, "A");
    assert_eq!(cart_names(&app), vec!["A", "B"]);

    confirm(&mut app);
    let expected = content(Language::En).console_lines("A, B", 2);
    let total = expected.len();
    assert_eq!(app.provisioning().expect("running").total_lines(), total);

    for k in 1..=total {
        run_frames(&mut app, PLAYBACK);
        let session = app.provisioning().expect("running");
        assert_eq!(session.emitted_count(), k);
        assert_eq!(session.emitted_lines(), &expected[..k]);
        assert_eq!(session.succeeded(), k == total);
    }

    assert_eq!(cart_names(&app), vec!["A", "B"]);
    assert!(app.go_home());
    assert!(app.cart().is_empty());
}

#[test]
fn progress_never_decreases_and_ends_at_100() {
    let mut app = app();
    add(&mut app, "A");
    confirm(&mut app);
    let mut last = app.provisioning().expect("running").progress_percent();
    assert_eq!(last, 0);
    for _ in 0..20 {
        run_frames(&mut app, PLAYBACK);
        let now = app.provisioning().expect("running").progress_percent();
        assert!(now >= last);
        last = now;
    }
    assert_eq!(last, 100);
}

#[test]
fn abandoning_mid_playback_keeps_the_cart() {
    let mut app = app();
    add(&mut app, "A");
    add(&mut app, "B");
    confirm(&mut app);
    run_frames(&mut app, PLAYBACK * 4);
    app.go_home();
    assert_eq!(cart_names(&app), vec!["A", "B"]);
}

#[test]
fn success_screen_keeps_cart_content_readable() {
    let mut app = app();
    add(&mut app, "A");
    add(&mut app, "B");
    app.dismiss_toast();
    confirm(&mut app);
    run_frames(&mut app, PLAYBACK * 20);

    let screen = render(&app, 110, 32);
    assert!(screen.contains(content(Language::En).transfer_success_title));
    // The console still shows the lines naming the confirmed items.
    assert!(screen.contains("A, B"));
    assert_eq!(app.cart().len(), 2);
}

#[test]
fn destination_is_independent_of_the_clear() {
    let mut app = app();
    add(&mut app, "A");
    confirm(&mut app);
    assert!(!app.open_destination());
    run_frames(&mut app, PLAYBACK * 20);
    assert!(app.open_destination());
    assert!(matches!(app.take_outbound(), Some(OutboundAction::OpenLink(_))));
    assert_eq!(app.cart().len(), 1);
    // Following the link does not leave the view; the clear still waits.
    assert_eq!(app.view(), View::Cart);
    assert!(app.open_destination());
}

#[test]
fn language_switch_after_confirm_keeps_the_script() {
    let mut app = app();
    add(&mut app, "A");
    confirm(&mut app);
    app.set_language(Language::Ka);
    run_frames(&mut app, PLAYBACK * 20);
    let expected = content(Language::En).console_lines("A", 1);
    assert_eq!(
        app.provisioning().expect("running").emitted_lines(),
        expected.as_slice()
    );
}

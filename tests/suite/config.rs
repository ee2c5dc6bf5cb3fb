//! Config file to running `App`.

use std::fs;
use std::time::Duration;

use lootdrop_config::{LootdropConfig, resolve_language};
use lootdrop_engine::{App, InitError, Language};

fn load(body: &str) -> (tempfile::TempDir, LootdropConfig) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, body).expect("write config");
    let config = LootdropConfig::load_from(&path)
        .expect("valid toml")
        .expect("file exists");
    (dir, config)
}

#[test]
fn timing_and_capacity_come_from_config() {
    let (_dir, config) = load(
        r#"
        [cart]
        max_items = 3

        [timing]
        toast_ms = 1500
        countdown_ticks = 3
        countdown_tick_ms = 200
        playback_interval_ms = 50
        "#,
    );
    let mut app = App::from_config(Some(&config), Language::En).expect("valid config");
    assert_eq!(app.cart().capacity(), 3);

    let name = app.catalog().items()[0].name.clone();
    app.add_to_cart(&name);
    app.advance(Duration::from_millis(1500));
    assert!(!app.toast_visible());

    app.go_to_cart();
    app.request_checkout();
    assert_eq!(app.checkout_countdown(), Some(3));
    app.advance(Duration::from_millis(600));
    assert!(app.confirm_checkout());
    let total = app.provisioning().expect("running").total_lines();
    app.advance(Duration::from_millis(50) * u32::try_from(total).expect("small"));
    assert!(app.provisioning().expect("running").succeeded());
}

#[test]
fn language_resolution_order() {
    let (_dir, config) = load("[app]\nlanguage = \"en\"\n");
    assert_eq!(resolve_language(None, Some(&config)), Language::En);
    assert_eq!(resolve_language(Some("ka"), Some(&config)), Language::Ka);
    assert_eq!(resolve_language(Some("xx"), Some(&config)), Language::En);
    assert_eq!(resolve_language(None, None), Language::Ka);
}

#[test]
fn broken_catalog_fails_startup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = dir.path().join("catalog.toml");
    fs::write(&catalog, "[[items]]\nprice = 1.0\n").expect("write catalog");
    let (_cfg_dir, config) = load(&format!(
        "[app]\ncatalog = {:?}\n",
        catalog.display().to_string()
    ));
    let err = App::from_config(Some(&config), Language::En)
        .err()
        .expect("missing name");
    assert!(matches!(err, InitError::Catalog { .. }));
}

//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use lootdrop_engine::{App, Catalog, Item, ItemName, Language, UiOptions, WorkflowSettings};

pub const TICK: Duration = Duration::from_secs(1);
pub const PLAYBACK: Duration = Duration::from_millis(400);
pub const TOAST: Duration = Duration::from_secs(7);

/// Catalog with single-letter names, enough to overfill a default cart.
pub fn letter_catalog() -> Catalog {
    let items = ["A", "B", "C", "D", "E", "F"]
        .iter()
        .map(|name| item(name))
        .collect();
    Catalog::new(items).expect("unique names")
}

pub fn item(name: &str) -> Item {
    Item::new(name_of(name), 9.99, lootdrop_types::Rarity::Mythic)
}

pub fn name_of(raw: &str) -> ItemName {
    ItemName::new(raw).expect("non-empty")
}

pub fn app_with(settings: WorkflowSettings) -> App {
    App::new(
        settings,
        letter_catalog(),
        Language::En,
        UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        },
    )
}

pub fn app() -> App {
    app_with(WorkflowSettings::default())
}

pub fn cart_names(app: &App) -> Vec<String> {
    app.cart()
        .items()
        .iter()
        .map(|item| item.name.to_string())
        .collect()
}

pub fn add(app: &mut App, name: &str) -> bool {
    app.add_to_cart(&name_of(name))
}

/// Advance in frame-sized steps, like the render loop does.
pub fn run_frames(app: &mut App, total: Duration) {
    let frame = Duration::from_millis(8);
    let mut elapsed = Duration::ZERO;
    while elapsed + frame <= total {
        app.advance(frame);
        elapsed += frame;
    }
    app.advance(total - elapsed);
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

pub fn press_all(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        lootdrop_tui::apply_event(app, key(*code));
    }
}

pub fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| lootdrop_tui::draw(frame, app))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

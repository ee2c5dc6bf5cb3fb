//! Input handling for the Lootdrop TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use lootdrop_engine::{App, InputMode, OutboundAction};

use crate::GRID_COLUMNS;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending terminal events into `app`. Returns `true` when the app should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        let quit = apply_event(app, ev);
        perform_outbound(app);
        if quit {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Route one terminal event to the key map of the current input mode.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            match app.input_mode() {
                InputMode::Browse => handle_browse_mode(app, key),
                InputMode::Search => handle_search_mode(app, key),
                InputMode::Cart => handle_cart_mode(app, key),
                InputMode::Confirm => handle_confirm_mode(app, key),
                InputMode::Console => handle_console_mode(app, key),
            }
        }
        Event::Paste(text) => {
            if app.input_mode() == InputMode::Search {
                text.chars()
                    .filter(|c| !c.is_control())
                    .for_each(|c| app.search_push(c));
            }
        }
        _ => {}
    }
    app.should_quit()
}

/// Keys shared by every mode that is not capturing text.
fn handle_global(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('L') => app.toggle_language(),
        KeyCode::Char('t') => app.toast_go_to_cart(),
        KeyCode::Char('x') => app.dismiss_toast(),
        KeyCode::Char('1') => {
            app.go_home();
        }
        KeyCode::Char('2') => {
            app.go_to_cart();
        }
        _ => return false,
    }
    true
}

fn handle_browse_mode(app: &mut App, key: KeyEvent) {
    if handle_global(app, key) {
        return;
    }
    let columns = isize::try_from(GRID_COLUMNS).unwrap_or(1);
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_catalog_selection(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_catalog_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_catalog_selection(-columns),
        KeyCode::Down | KeyCode::Char('j') => app.move_catalog_selection(columns),
        KeyCode::Enter | KeyCode::Char('a' | ' ') => {
            if !app.add_selected() {
                debug!("Add ignored");
            }
        }
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('g') => app.activate_hero(),
        KeyCode::Char('c') => {
            app.go_to_cart();
        }
        KeyCode::Esc => {
            if app.toast_visible() {
                app.dismiss_toast();
            } else {
                app.clear_search();
            }
        }
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => app.search_push(c),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Enter | KeyCode::Down => app.end_search(),
        KeyCode::Esc => app.clear_search(),
        _ => {}
    }
}

fn handle_cart_mode(app: &mut App, key: KeyEvent) {
    if handle_global(app, key) {
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cart_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cart_selection(1),
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
            app.remove_selected();
        }
        KeyCode::Enter => {
            app.request_checkout();
        }
        KeyCode::Esc | KeyCode::Char('h') => {
            app.go_home();
        }
        _ => {}
    }
}

fn handle_confirm_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => {
            if !app.confirm_checkout() {
                debug!(remaining = ?app.checkout_countdown(), "Confirm rejected");
            }
        }
        KeyCode::Esc | KeyCode::Char('n') => {
            app.cancel_checkout();
        }
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_console_mode(app: &mut App, key: KeyEvent) {
    if handle_global(app, key) {
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('o') => {
            app.open_destination();
        }
        KeyCode::Esc | KeyCode::Char('h') => {
            app.go_home();
        }
        _ => {}
    }
}

/// Carry out whatever the engine queued. A terminal cannot open a browser tab, so the
/// link goes to the clipboard, and into the status line when the clipboard is unavailable.
fn perform_outbound(app: &mut App) {
    let Some(OutboundAction::OpenLink(link)) = app.take_outbound() else {
        return;
    };
    let content = app.content();
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(link.clone())) {
        Ok(()) => app.push_status(content.destination_copied),
        Err(err) => {
            warn!("Clipboard unavailable: {err}");
            app.push_status(format!("{}: {link}", content.destination_shown));
        }
    }
}

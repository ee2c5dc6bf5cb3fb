//! Workflow controller for Lootdrop.
//!
//! [`App`] is the single session object for a run. It owns the cart, the toast, the
//! mounted screen and every timer, and exposes the operations the TUI forwards user input
//! to. No rendering logic lives here.
//!
//! # Time
//!
//! The controller never sleeps or schedules callbacks. The frame loop calls
//! [`App::tick`], which measures the time since the previous frame and feeds it to
//! [`App::advance`]. Tests call `advance` directly with exact durations.
//!
//! # Cart lock
//!
//! While the cart screen is confirming or provisioning, the cart cannot be mutated. The
//! snapshot handed to provisioning is therefore always the cart the user confirmed.

use std::mem;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use lootdrop_config::WorkflowSettings;
use lootdrop_types::ui::{InputMode, UiOptions, View};
use lootdrop_types::{Catalog, ContentBundle, Item, ItemName, Language, content};

use crate::cart::Cart;
use crate::checkout::CheckoutGate;
use crate::provisioning::ProvisioningSession;
use crate::state::{CartPhase, CartScreen, CatalogScreen, ProvisioningRun, Screen};
use crate::timer::Deadline;
use crate::toast::Toast;

mod init;

pub use init::InitError;

/// How long a status line stays in the footer.
pub const STATUS_DURATION: Duration = Duration::from_secs(4);

/// Half-period of the console cursor blink.
const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// What an item card offers, derived from cart membership and capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    InCart,
    CartFull,
    Available,
}

/// Primary action of the hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    GoToCart,
    BrowseSelection,
}

/// Side effect the engine asks the outer layer to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    OpenLink(String),
}

#[derive(Debug)]
struct StatusMessage {
    text: String,
    timer: Deadline,
}

pub struct App {
    settings: WorkflowSettings,
    catalog: Catalog,
    cart: Cart,
    toast: Toast,
    language: Language,
    screen: Screen,
    ui_options: UiOptions,
    last_frame: Instant,
    ui_clock: Duration,
    status: Option<StatusMessage>,
    outbound: Option<OutboundAction>,
    should_quit: bool,
}

impl App {
    // ========================================================================
    // Time
    // ========================================================================

    /// Advance all timers by the wall time elapsed since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed);
    }

    /// Advance all timers by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.ui_clock = self.ui_clock.saturating_add(delta);
        self.toast.advance(delta);

        if let Some(status) = self.status.as_mut()
            && status.timer.advance(delta)
        {
            self.status = None;
        }

        let Screen::Cart(screen) = &mut self.screen else {
            return;
        };
        match &mut screen.phase {
            CartPhase::Browsing => {}
            CartPhase::Confirming(gate) => gate.advance(delta),
            CartPhase::Provisioning(run) => {
                if run.session.advance(delta) {
                    run.completion.arm();
                }
            }
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[must_use]
    pub fn settings(&self) -> &WorkflowSettings {
        &self.settings
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn content(&self) -> &'static ContentBundle {
        content(self.language)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.screen.view()
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match &self.screen {
            Screen::Catalog(screen) if screen.searching => InputMode::Search,
            Screen::Catalog(_) => InputMode::Browse,
            Screen::Cart(screen) => match screen.phase {
                CartPhase::Browsing => InputMode::Cart,
                CartPhase::Confirming(_) => InputMode::Confirm,
                CartPhase::Provisioning(_) => InputMode::Console,
            },
        }
    }

    #[must_use]
    pub fn toast_visible(&self) -> bool {
        self.toast.is_visible()
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the console cursor is drawn this frame.
    #[must_use]
    pub fn cursor_blink_on(&self) -> bool {
        if self.ui_options.reduced_motion {
            return true;
        }
        (self.ui_clock.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    fn cart_locked(&self) -> bool {
        matches!(
            &self.screen,
            Screen::Cart(CartScreen {
                phase: CartPhase::Confirming(_) | CartPhase::Provisioning(_),
                ..
            })
        )
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switch views. Re-selecting the mounted view keeps it as is.
    ///
    /// Leaving a view tears it down: an open checkout gate is discarded, a running
    /// provisioning playback stops, and a successful run clears the cart.
    pub fn navigate(&mut self, view: View) -> bool {
        if self.screen.view() == view {
            return false;
        }
        let previous = mem::replace(&mut self.screen, Screen::mount(view));
        debug!(from = ?previous.view(), to = ?view, "Navigate");
        self.teardown(previous);
        true
    }

    pub fn go_home(&mut self) -> bool {
        self.navigate(View::Catalog)
    }

    pub fn go_to_cart(&mut self) -> bool {
        self.navigate(View::Cart)
    }

    fn teardown(&mut self, screen: Screen) {
        let Screen::Cart(CartScreen { phase, .. }) = screen else {
            return;
        };
        match phase {
            CartPhase::Browsing => {}
            CartPhase::Confirming(gate) => {
                debug!(remaining = gate.remaining(), "Checkout gate discarded");
            }
            CartPhase::Provisioning(run) => {
                if !run.session.succeeded() {
                    info!(
                        emitted = run.session.emitted_count(),
                        total = run.session.total_lines(),
                        "Provisioning abandoned"
                    );
                }
                run.completion.release(&mut self.cart);
            }
        }
    }

    /// Tear down the mounted screen before exit.
    pub fn shutdown(&mut self) {
        let view = self.screen.view();
        let previous = mem::replace(&mut self.screen, Screen::mount(view));
        self.teardown(previous);
        self.toast.dismiss();
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Language
    // ========================================================================

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            debug!(%language, "Language switched");
            self.language = language;
        }
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggle());
    }

    // ========================================================================
    // Catalog view
    // ========================================================================

    fn catalog_screen(&self) -> Option<&CatalogScreen> {
        match &self.screen {
            Screen::Catalog(screen) => Some(screen),
            Screen::Cart(_) => None,
        }
    }

    fn catalog_screen_mut(&mut self) -> Option<&mut CatalogScreen> {
        match &mut self.screen {
            Screen::Catalog(screen) => Some(screen),
            Screen::Cart(_) => None,
        }
    }

    /// Current search text; empty outside the catalog view.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.catalog_screen()
            .map_or("", |screen| screen.query.as_str())
    }

    /// Items matching the current search, in catalog order.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        self.catalog.search(self.search_query()).collect()
    }

    #[must_use]
    pub fn catalog_selection(&self) -> Option<usize> {
        let screen = self.catalog_screen()?;
        let count = self.visible_items().len();
        (count > 0).then(|| screen.selected.min(count - 1))
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        let index = self.catalog_selection()?;
        self.visible_items().get(index).copied()
    }

    pub fn move_catalog_selection(&mut self, delta: isize) {
        let count = self.visible_items().len();
        if let Some(screen) = self.catalog_screen_mut() {
            screen.selected = step_index(screen.selected, delta, count);
        }
    }

    pub fn begin_search(&mut self) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.searching = true;
        }
    }

    pub fn end_search(&mut self) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.searching = false;
        }
    }

    pub fn search_push(&mut self, c: char) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.query.push(c);
            screen.selected = 0;
        }
    }

    pub fn search_pop(&mut self) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.query.pop();
            screen.selected = 0;
        }
    }

    pub fn clear_search(&mut self) {
        if let Some(screen) = self.catalog_screen_mut() {
            screen.query.clear();
            screen.searching = false;
            screen.selected = 0;
        }
    }

    #[must_use]
    pub fn card_state(&self, item: &Item) -> CardState {
        if self.cart.contains(&item.name) {
            CardState::InCart
        } else if self.cart.is_full() {
            CardState::CartFull
        } else {
            CardState::Available
        }
    }

    #[must_use]
    pub fn hero_action(&self) -> HeroAction {
        if self.cart.is_empty() {
            HeroAction::BrowseSelection
        } else {
            HeroAction::GoToCart
        }
    }

    pub fn activate_hero(&mut self) {
        match self.hero_action() {
            HeroAction::GoToCart => {
                self.go_to_cart();
            }
            HeroAction::BrowseSelection => {
                self.go_home();
                self.clear_search();
            }
        }
    }

    // ========================================================================
    // Cart operations
    // ========================================================================

    /// Add the catalog item named `name`. Every successful add (re)starts the toast.
    pub fn add_to_cart(&mut self, name: &ItemName) -> bool {
        if self.cart_locked() {
            return false;
        }
        let Some(item) = self.catalog.get(name) else {
            return false;
        };
        if !self.cart.add(item) {
            return false;
        }
        self.toast.show(self.settings.toast_duration);
        true
    }

    pub fn add_selected(&mut self) -> bool {
        let Some(name) = self.selected_item().map(|item| item.name.clone()) else {
            return false;
        };
        self.add_to_cart(&name)
    }

    pub fn remove_from_cart(&mut self, name: &ItemName) -> bool {
        if self.cart_locked() {
            return false;
        }
        let removed = self.cart.remove(name);
        if removed {
            let len = self.cart.len();
            if let Screen::Cart(screen) = &mut self.screen {
                screen.selected = screen.selected.min(len.saturating_sub(1));
            }
        }
        removed
    }

    #[must_use]
    pub fn cart_selection(&self) -> Option<usize> {
        match &self.screen {
            Screen::Cart(screen) if !self.cart.is_empty() => {
                Some(screen.selected.min(self.cart.len() - 1))
            }
            _ => None,
        }
    }

    pub fn move_cart_selection(&mut self, delta: isize) {
        let count = self.cart.len();
        if let Screen::Cart(screen) = &mut self.screen {
            screen.selected = step_index(screen.selected, delta, count);
        }
    }

    pub fn remove_selected(&mut self) -> bool {
        let Some(name) = self
            .cart_selection()
            .and_then(|index| self.cart.items().get(index))
            .map(|item| item.name.clone())
        else {
            return false;
        };
        self.remove_from_cart(&name)
    }

    // ========================================================================
    // Toast
    // ========================================================================

    pub fn dismiss_toast(&mut self) {
        self.toast.dismiss();
    }

    /// The toast's own "go to cart" action.
    pub fn toast_go_to_cart(&mut self) {
        if !self.toast.is_visible() {
            return;
        }
        self.go_to_cart();
        self.toast.dismiss();
    }

    // ========================================================================
    // Checkout
    // ========================================================================

    fn cart_screen_mut(&mut self) -> Option<&mut CartScreen> {
        match &mut self.screen {
            Screen::Cart(screen) => Some(screen),
            Screen::Catalog(_) => None,
        }
    }

    /// Open the confirmation gate. Does nothing for an empty cart or outside the cart
    /// view, or while a gate or run is already in progress.
    pub fn request_checkout(&mut self) -> bool {
        let Screen::Cart(screen) = &mut self.screen else {
            return false;
        };
        if !matches!(screen.phase, CartPhase::Browsing) {
            return false;
        }
        let Some(gate) = CheckoutGate::open(
            &self.cart,
            self.settings.countdown_ticks,
            self.settings.countdown_tick,
        ) else {
            return false;
        };
        screen.phase = CartPhase::Confirming(gate);
        true
    }

    /// Remaining countdown ticks while the gate is open.
    #[must_use]
    pub fn checkout_countdown(&self) -> Option<u32> {
        match &self.screen {
            Screen::Cart(CartScreen {
                phase: CartPhase::Confirming(gate),
                ..
            }) => Some(gate.remaining()),
            _ => None,
        }
    }

    /// Confirm the open gate. Rejected while the countdown is running.
    pub fn confirm_checkout(&mut self) -> bool {
        let language = self.language;
        let interval = self.settings.playback_interval;
        let Screen::Cart(screen) = &mut self.screen else {
            return false;
        };
        if !matches!(screen.phase, CartPhase::Confirming(_)) {
            return false;
        }
        let CartPhase::Confirming(gate) = mem::take(&mut screen.phase) else {
            return false;
        };
        match gate.confirm(&self.cart) {
            Ok(confirmed) => {
                let snapshot = confirmed.into_snapshot();
                let script = content(language).console_lines(&snapshot.joined_names, snapshot.count);
                info!(items = snapshot.count, %language, "Checkout confirmed");
                let session = ProvisioningSession::start(script, interval);
                screen.phase = CartPhase::Provisioning(ProvisioningRun::new(session));
                true
            }
            Err(gate) => {
                screen.phase = CartPhase::Confirming(gate);
                false
            }
        }
    }

    /// Close the gate without side effects.
    pub fn cancel_checkout(&mut self) -> bool {
        let Some(screen) = self.cart_screen_mut() else {
            return false;
        };
        if !matches!(screen.phase, CartPhase::Confirming(_)) {
            return false;
        }
        screen.phase = CartPhase::Browsing;
        debug!("Checkout cancelled");
        true
    }

    // ========================================================================
    // Provisioning
    // ========================================================================

    #[must_use]
    pub fn provisioning(&self) -> Option<&ProvisioningSession> {
        match &self.screen {
            Screen::Cart(CartScreen {
                phase: CartPhase::Provisioning(run),
                ..
            }) => Some(&run.session),
            _ => None,
        }
    }

    #[must_use]
    pub fn can_open_destination(&self) -> bool {
        self.provisioning().is_some_and(ProvisioningSession::succeeded)
    }

    /// Queue the outbound link. Only reachable once provisioning has succeeded.
    pub fn open_destination(&mut self) -> bool {
        if !self.can_open_destination() {
            return false;
        }
        info!(link = %self.settings.server_link, "Opening destination");
        self.outbound = Some(OutboundAction::OpenLink(self.settings.server_link.clone()));
        true
    }

    pub fn take_outbound(&mut self) -> Option<OutboundAction> {
        self.outbound.take()
    }

    pub fn push_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            timer: Deadline::new(STATUS_DURATION),
        });
    }
}

fn step_index(current: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let current = current.min(count - 1);
    current
        .saturating_add_signed(delta)
        .min(count - 1)
}

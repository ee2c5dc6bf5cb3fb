//! Screen state machine types.
//!
//! Exactly one screen is mounted at a time. Replacing the screen is the teardown of the
//! previous one; whatever it owns (countdown, playback timer, completion obligation) goes
//! with it.
//!
//! ```text
//!   ┌─────────┐  navigate(Cart)   ┌──────────────────────────────────────────┐
//!   │ Catalog │ ────────────────► │ Cart                                     │
//!   │         │ ◄──────────────── │  Browsing ─► Confirming ─► Provisioning  │
//!   └─────────┘  navigate(Catalog)│      ▲           │ cancel                │
//!                (teardown)       │      └───────────┘                       │
//!                                 └──────────────────────────────────────────┘
//! ```

use lootdrop_types::ui::View;

use crate::checkout::CheckoutGate;
use crate::completion::CompletionHandler;
use crate::provisioning::ProvisioningSession;

#[derive(Debug)]
pub(crate) enum Screen {
    Catalog(CatalogScreen),
    Cart(CartScreen),
}

impl Screen {
    pub(crate) fn mount(view: View) -> Self {
        match view {
            View::Catalog => Screen::Catalog(CatalogScreen::default()),
            View::Cart => Screen::Cart(CartScreen::default()),
        }
    }

    pub(crate) fn view(&self) -> View {
        match self {
            Screen::Catalog(_) => View::Catalog,
            Screen::Cart(_) => View::Cart,
        }
    }
}

/// Home view: hero, search box and the selection grid.
#[derive(Debug, Default)]
pub(crate) struct CatalogScreen {
    pub(crate) query: String,
    pub(crate) searching: bool,
    /// Index into the filtered item list.
    pub(crate) selected: usize,
}

#[derive(Debug, Default)]
pub(crate) struct CartScreen {
    pub(crate) selected: usize,
    pub(crate) phase: CartPhase,
}

#[derive(Debug, Default)]
pub(crate) enum CartPhase {
    #[default]
    Browsing,
    Confirming(CheckoutGate),
    Provisioning(ProvisioningRun),
}

/// A provisioning session together with the cleanup it owes when its view closes.
#[derive(Debug)]
pub(crate) struct ProvisioningRun {
    pub(crate) session: ProvisioningSession,
    pub(crate) completion: CompletionHandler,
}

impl ProvisioningRun {
    pub(crate) fn new(session: ProvisioningSession) -> Self {
        let mut completion = CompletionHandler::default();
        if session.succeeded() {
            completion.arm();
        }
        Self {
            session,
            completion,
        }
    }
}

//! Core engine for Lootdrop: the cart and checkout workflow.
//!
//! This crate contains the [`App`] controller without TUI dependencies. Its components,
//! leaves first:
//!
//! - [`Cart`]: ordered, deduplicated, size-bounded selection
//! - [`Toast`]: restartable auto-dismissing notification
//! - [`CheckoutGate`]: countdown that must elapse before confirm is accepted
//! - [`ProvisioningSession`]: timed playback of the console script
//! - [`CompletionHandler`]: cart clear deferred until the result view is torn down

mod app;
mod cart;
mod checkout;
mod completion;
mod provisioning;
mod state;
mod timer;
mod toast;

pub use app::{App, CardState, HeroAction, InitError, OutboundAction, STATUS_DURATION};
pub use cart::{Cart, CartSnapshot};
pub use checkout::{CheckoutGate, ConfirmedCheckout};
pub use completion::CompletionHandler;
pub use provisioning::ProvisioningSession;
pub use timer::{Deadline, Interval};
pub use toast::Toast;

pub use lootdrop_config::{LootdropConfig, WorkflowSettings};
pub use lootdrop_types::ui::{InputMode, UiOptions, View};
pub use lootdrop_types::{Catalog, ContentBundle, Item, ItemName, Language};

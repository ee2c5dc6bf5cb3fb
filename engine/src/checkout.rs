//! Timed confirmation step in front of provisioning.
//!
//! ```text
//!   request (cart non-empty)
//!            │
//!            ▼
//!   ┌──────────────────┐ tick  ┌──────────────────┐
//!   │ Counting(n > 0)  │──────►│ Counting(n - 1)  │ ...
//!   └──────────────────┘       └──────────────────┘
//!            │ cancel (drop)           │ n == 0
//!            ▼                         ▼
//!         closed             confirm ──► ConfirmedCheckout
//! ```

use std::time::Duration;

use tracing::debug;

use crate::cart::{Cart, CartSnapshot};
use crate::timer::Interval;

/// Open confirmation gate.
///
/// Existence of a value means the gate is open. Cancelling is dropping it, which also
/// drops the countdown timer.
#[derive(Debug)]
pub struct CheckoutGate {
    remaining: u32,
    ticker: Option<Interval>,
}

/// Proof that a gate was confirmed after its countdown elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedCheckout {
    snapshot: CartSnapshot,
}

impl ConfirmedCheckout {
    #[cfg(test)]
    #[must_use]
    pub fn snapshot(&self) -> &CartSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn into_snapshot(self) -> CartSnapshot {
        self.snapshot
    }
}

impl CheckoutGate {
    /// Open a gate over `cart`. An empty cart opens nothing.
    #[must_use]
    pub fn open(cart: &Cart, ticks: u32, tick: Duration) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        debug!(ticks, items = cart.len(), "Checkout gate opened");
        Some(Self {
            remaining: ticks,
            ticker: (ticks > 0).then(|| Interval::new(tick)),
        })
    }

    /// Count down one step per elapsed tick, holding at zero.
    pub fn advance(&mut self, delta: Duration) {
        let Some(ticker) = self.ticker.as_mut() else {
            return;
        };
        let fired = ticker.advance(delta);
        for _ in 0..fired {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.ticker = None;
                debug!("Checkout countdown elapsed");
                break;
            }
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.remaining == 0
    }

    /// Consume the gate once the countdown is over.
    ///
    /// While counting, the gate is handed back unchanged.
    pub fn confirm(self, cart: &Cart) -> Result<ConfirmedCheckout, Self> {
        if !self.can_confirm() {
            return Err(self);
        }
        debug!(items = cart.len(), "Checkout confirmed");
        Ok(ConfirmedCheckout {
            snapshot: cart.snapshot(),
        })
    }
}

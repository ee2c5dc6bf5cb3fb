//! Deferred cart clearing for finished provisioning runs.

use tracing::info;

use crate::cart::Cart;

/// Cleanup obligation owned by the view that shows a provisioning run.
///
/// Reaching success only arms the handler. The cart is cleared when the owning view is
/// torn down and calls [`CompletionHandler::release`], which consumes the handler so the
/// clear can run at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CompletionHandler {
    #[default]
    Pending,
    Armed,
}

impl CompletionHandler {
    pub fn arm(&mut self) {
        *self = CompletionHandler::Armed;
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_armed(self) -> bool {
        matches!(self, CompletionHandler::Armed)
    }

    /// Run the deferred cleanup. Returns whether the cart was cleared.
    pub fn release(self, cart: &mut Cart) -> bool {
        match self {
            CompletionHandler::Armed => {
                info!(items = cart.len(), "Provisioning view closed, clearing cart");
                cart.clear();
                true
            }
            CompletionHandler::Pending => false,
        }
    }
}

//! Input routing modes.

/// Which key map applies, derived from the current view and workflow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Catalog grid navigation.
    #[default]
    Browse,
    /// Typing into the catalog search box.
    Search,
    /// Cart list with checkout available.
    Cart,
    /// Checkout confirmation modal is open.
    Confirm,
    /// Provisioning console is showing (running or finished).
    Console,
}

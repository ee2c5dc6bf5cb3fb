//! View selection and display options.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disables cursor blinking and other motion in the console view.
    pub reduced_motion: bool,
}

/// Top-level screen.
///
/// Switching between views tears down the one being left; re-selecting the
/// current view does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hero, search and the selection grid.
    #[default]
    Catalog,
    /// Cart contents, checkout and the provisioning console.
    Cart,
}

impl View {
    #[must_use]
    pub const fn is_cart(self) -> bool {
        matches!(self, View::Cart)
    }
}

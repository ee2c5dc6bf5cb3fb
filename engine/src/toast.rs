//! Auto-dismissing "item added" notification.

use std::time::Duration;

use tracing::debug;

use crate::timer::Deadline;

/// `Hidden -> Visible -> Hidden`.
///
/// Visibility is the presence of the dismissal timer, so there is exactly one live timer
/// while visible and none while hidden.
#[derive(Debug, Default)]
pub struct Toast {
    timer: Option<Deadline>,
}

impl Toast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the toast, replacing any running dismissal timer with a fresh one.
    pub fn show(&mut self, duration: Duration) {
        let restarted = self.timer.replace(Deadline::new(duration)).is_some();
        debug!(restarted, "Toast shown");
    }

    pub fn dismiss(&mut self) {
        if self.timer.take().is_some() {
            debug!("Toast dismissed");
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        if let Some(timer) = self.timer.as_mut()
            && timer.advance(delta)
        {
            self.timer = None;
            debug!("Toast expired");
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.timer.is_some()
    }

    /// Time left before the toast hides itself.
    #[cfg(test)]
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.timer.as_ref().map(Deadline::remaining)
    }
}

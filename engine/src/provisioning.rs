//! Scripted provisioning playback.
//!
//! A session owns a fixed list of console lines, produced once when the session starts,
//! and reveals them one per playback interval. Sessions are never resumed; a new run
//! always starts from the first line.

use std::time::Duration;

use tracing::{debug, info};

use crate::timer::Interval;

#[derive(Debug)]
pub struct ProvisioningSession {
    script: Vec<String>,
    emitted: usize,
    ticker: Option<Interval>,
}

impl ProvisioningSession {
    #[must_use]
    pub fn start(script: Vec<String>, interval: Duration) -> Self {
        info!(lines = script.len(), "Provisioning started");
        let ticker = (!script.is_empty()).then(|| Interval::new(interval));
        Self {
            script,
            emitted: 0,
            ticker,
        }
    }

    /// Emit one line per elapsed interval, in order.
    ///
    /// Returns `true` when this call emitted the final line.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(ticker) = self.ticker.as_mut() else {
            return false;
        };
        let fired = ticker.advance(delta) as usize;
        if fired == 0 {
            return false;
        }

        let before = self.emitted;
        self.emitted = (self.emitted + fired).min(self.script.len());
        debug!(
            from = before,
            to = self.emitted,
            total = self.script.len(),
            "Provisioning lines emitted"
        );

        if self.emitted == self.script.len() {
            self.ticker = None;
            info!("Provisioning succeeded");
            return true;
        }
        false
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.emitted == self.script.len()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// `round(emitted / total * 100)`, with halves rounded up. An empty script is complete.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.script.len();
        if total == 0 {
            return 100;
        }
        let percent = (200 * self.emitted + total) / (2 * total);
        u8::try_from(percent).unwrap_or(100)
    }

    #[must_use]
    pub fn emitted_lines(&self) -> &[String] {
        &self.script[..self.emitted]
    }

    #[must_use]
    pub fn emitted_count(&self) -> usize {
        self.emitted
    }

    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.script.len()
    }

    /// The console cursor shows only while lines are still pending.
    #[must_use]
    pub fn show_cursor(&self) -> bool {
        !self.succeeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(400);

    fn script(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn emits_one_line_per_interval() {
        let mut session = ProvisioningSession::start(script(3), INTERVAL);
        assert_eq!(session.emitted_count(), 0);
        assert!(!session.advance(Duration::from_millis(399)));
        assert_eq!(session.emitted_count(), 0);
        assert!(!session.advance(Duration::from_millis(1)));
        assert_eq!(session.emitted_lines(), &["line 0".to_string()]);
        assert!(!session.advance(INTERVAL));
        assert!(session.advance(INTERVAL));
        assert!(session.succeeded());
        assert!(!session.is_running());
    }

    #[test]
    fn progress_matches_rounded_ratio() {
        let len = 11;
        let mut session = ProvisioningSession::start(script(len), INTERVAL);
        let mut last = 0;
        for k in 1..=len {
            session.advance(INTERVAL);
            let expected = ((k as f64 / len as f64) * 100.0).round() as u8;
            assert_eq!(session.progress_percent(), expected, "after {k} lines");
            assert!(session.progress_percent() >= last);
            last = session.progress_percent();
            assert_eq!(session.succeeded(), k == len);
        }
    }

    #[test]
    fn nothing_emitted_after_success() {
        let mut session = ProvisioningSession::start(script(2), INTERVAL);
        session.advance(INTERVAL * 2);
        assert!(session.succeeded());
        assert!(!session.advance(INTERVAL * 5));
        assert_eq!(session.emitted_count(), 2);
    }

    #[test]
    fn stalled_frame_emits_in_order_without_overrun() {
        let mut session = ProvisioningSession::start(script(4), INTERVAL);
        assert!(session.advance(INTERVAL * 9));
        assert_eq!(
            session.emitted_lines(),
            &["line 0", "line 1", "line 2", "line 3"].map(String::from)
        );
    }

    #[test]
    fn cursor_only_while_running() {
        let mut session = ProvisioningSession::start(script(1), INTERVAL);
        assert!(session.show_cursor());
        session.advance(INTERVAL);
        assert!(!session.show_cursor());
    }

    #[test]
    fn empty_script_is_already_complete() {
        let session = ProvisioningSession::start(Vec::new(), INTERVAL);
        assert!(session.succeeded());
        assert_eq!(session.progress_percent(), 100);
    }
}

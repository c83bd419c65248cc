//! Quiet-period debounce for the search box.
//!
//! Time is always passed in so callers (and tests) decide what "now" is.

use chrono::{DateTime, TimeDelta, Utc};

/// Quiet period for the search box.
pub const SEARCH_DEBOUNCE_MS: i64 = 300;

/// Holds the latest typed value until it has been left alone for the quiet period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounced {
    quiet: TimeDelta,
    pending: Option<(String, DateTime<Utc>)>,
}

impl Default for Debounced {
    fn default() -> Self {
        Self::new(TimeDelta::milliseconds(SEARCH_DEBOUNCE_MS))
    }
}

impl Debounced {
    pub fn new(quiet: TimeDelta) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a new value, restarting the quiet period.
    pub fn input(&mut self, value: impl Into<String>, now: DateTime<Utc>) {
        self.pending = Some((value.into(), now));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will settle, if any.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|(_, at)| *at + self.quiet)
    }

    /// Takes the pending value once its quiet period has elapsed.
    pub fn settle(&mut self, now: DateTime<Utc>) -> Option<String> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }
}

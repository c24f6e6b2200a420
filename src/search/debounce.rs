//! Trailing-edge debounce over keystrokes.
//!
//! Each keystroke re-arms the timer; only the last keyword within a window
//! fires. Time is passed in explicitly so tests never sleep.

use std::time::{Duration, Instant};

/// At most one pending fetch; a new keystroke always supersedes the prior one.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    pending: Option<(Instant, String)>,
}

impl Debounce {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a keystroke at `now`.
    ///
    /// A non-empty keyword schedules a fire one full window after `now`,
    /// replacing whatever was scheduled. An empty keyword cancels outright;
    /// no fetch is ever scheduled for it.
    pub fn note_keystroke(&mut self, keyword: &str, now: Instant) {
        if keyword.is_empty() {
            self.pending = None;
        } else {
            self.pending = Some((now + self.delay, keyword.to_string()));
        }
    }

    /// Return the due keyword, at most once per scheduled fire.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => {
                self.pending.take().map(|(_, keyword)| keyword)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

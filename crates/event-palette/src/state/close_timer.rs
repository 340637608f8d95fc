//! Deferred close after the search field loses focus.
//!
//! Losing focus does not close the palette right away: a click on a row
//! usually arrives just after the blur, and it must still land. The close is
//! scheduled as plain data and fired by a later `Tick`, so cancelling it is
//! just dropping the value.

use std::time::{Duration, Instant};

/// How long the palette stays open after losing focus.
pub const DEFAULT_CLOSE_GRACE_PERIOD: Duration = Duration::from_millis(500);

/// Tunables for [`PaletteState`](crate::PaletteState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteOptions {
    /// Delay between `RequestClose` and the palette actually closing.
    pub close_grace_period: Duration,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            close_grace_period: DEFAULT_CLOSE_GRACE_PERIOD,
        }
    }
}

/// A scheduled close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClose {
    requested_at: Instant,
    grace: Duration,
}

impl PendingClose {
    /// Schedule a close `grace` after `requested_at`.
    pub fn new(requested_at: Instant, grace: Duration) -> Self {
        Self {
            requested_at,
            grace,
        }
    }

    /// When the close fires.
    pub fn deadline(&self) -> Instant {
        self.requested_at + self.grace
    }

    /// True once `now` has reached the deadline.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}

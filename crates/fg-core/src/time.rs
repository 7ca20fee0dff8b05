//! Simulation time model.
//!
//! Time advances in whole days.  `Day(0)` is the state right after world
//! initialization; the first call to `step()` simulates `Day(0)` and leaves
//! the clock at `Day(1)`.

use std::fmt;

// ── Day ──────────────────────────────────────────────────────────────────────

/// An absolute simulated-day counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u64);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current day and how many days have been simulated.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The day the next `step()` will simulate.
    pub current_day: Day,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one day.
    #[inline]
    pub fn advance(&mut self) {
        self.current_day = self.current_day.next();
    }

    /// Number of days simulated so far.
    #[inline]
    pub fn days_elapsed(&self) -> u64 {
        self.current_day.0
    }
}

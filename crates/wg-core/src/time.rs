//! Simulation time model.
//!
//! # Design
//!
//! Two clocks coexist:
//!
//! - [`Tick`] counts processed simulation ticks.  Motion is expressed in
//!   route-fraction per tick, so the mover state after `n` ticks is the same
//!   whatever the frame rate of the host.
//! - [`Timestamp`] is host wall-clock time in milliseconds, passed into every
//!   `tick(now)`.  Cooldown and alert expiry compare timestamps; they are
//!   never scheduled callbacks.
//!
//! Timestamps are not required to be monotonic.  `elapsed_since` is signed so
//! an out-of-order `now` yields a negative elapsed time instead of a panic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A simulation tick counter.  Reset to zero by `Simulation::reset`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` when `self` lands on a multiple of `interval`.  An interval of
    /// zero never matches.
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Timestamp ────────────────────────────────────────────────────────────────

/// Host wall-clock time in milliseconds since an arbitrary epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    #[inline]
    pub fn from_millis(ms: i64) -> Self {
        Timestamp(ms)
    }

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1_000))
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`.  Negative when the clock went
    /// backwards.
    #[inline]
    pub fn elapsed_since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    /// `self` shifted forward by `ms` milliseconds.
    #[inline]
    pub fn plus_millis(self, ms: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}s", self.0.div_euclid(1_000), self.0.rem_euclid(1_000))
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the most recent host timestamp.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The next tick to be processed.
    pub current_tick: Tick,
    /// The `now` passed to the most recent processed tick, if any.
    pub last_now: Option<Timestamp>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `now` for the tick being processed and advance to the next one.
    #[inline]
    pub fn advance(&mut self, now: Timestamp) {
        self.last_now = Some(now);
        self.current_tick = self.current_tick.offset(1);
    }

    /// Back to tick zero with no timestamp seen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_now {
            Some(now) => write!(f, "{} @ {}", self.current_tick, now),
            None => write!(f, "{} (not started)", self.current_tick),
        }
    }
}

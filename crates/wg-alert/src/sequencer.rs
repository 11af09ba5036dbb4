//! The single-alert sequencer.
//!
//! # State machine
//!
//! ```text
//!            offer(): surviving candidate(s)
//!   ┌──────┐ ───────────────────────────────► ┌────────────────────┐
//!   │ Idle │                                  │ Active(ActiveAlert)│
//!   └──────┘ ◄─────────────────────────────── └────────────────────┘
//!            expire(): display time elapsed
//!            dismiss(), reset()
//! ```
//!
//! While `Active`, offered candidates are ignored; simultaneous proximity
//! events beyond the one shown are dropped, not queued.
//!
//! # Selection
//!
//! Among the candidates that survive the cooldown check, the winner has the
//! highest priority, then the smallest distance, then the lowest `MoverId`,
//! then the lowest `WatchPointId`.  Only the winner's pair enters cooldown.

use std::cmp::Ordering;

use wg_core::{AlertId, MoverId, Severity, Tick, Timestamp, WatchPointId};

use crate::{CooldownTracker, ProximityCandidate};

/// The alert currently on display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveAlert {
    pub id:          AlertId,
    pub mover:       MoverId,
    pub watch_point: WatchPointId,
    pub distance_m:  f64,
    pub severity:    Severity,
    pub raised_at:   Timestamp,
    pub raised_tick: Tick,
}

/// Either nothing on display or exactly one alert.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertState {
    #[default]
    Idle,
    Active(ActiveAlert),
}

impl AlertState {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, AlertState::Active(_))
    }

    #[inline]
    pub fn active(&self) -> Option<&ActiveAlert> {
        match self {
            AlertState::Active(a) => Some(a),
            AlertState::Idle => None,
        }
    }
}

/// Why an active alert left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearReason {
    Expired,
    Dismissed,
    Reset,
}

/// Holds the [`AlertState`] and counts Idle → Active transitions.
#[derive(Debug, Clone)]
pub struct AlertSequencer {
    state:        AlertState,
    display_ms:   i64,
    next_id:      AlertId,
    total_raised: u64,
}

impl AlertSequencer {
    pub fn new(display_ms: i64) -> Self {
        Self {
            state: AlertState::Idle,
            display_ms,
            next_id: AlertId(0),
            total_raised: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> &AlertState {
        &self.state
    }

    #[inline]
    pub fn active(&self) -> Option<&ActiveAlert> {
        self.state.active()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        !self.state.is_active()
    }

    /// Idle → Active transitions since construction or the last reset.
    #[inline]
    pub fn total_raised(&self) -> u64 {
        self.total_raised
    }

    /// Clear the active alert once `now` is at least the display duration
    /// past its `raised_at`.  Returns the cleared alert.
    pub fn expire(&mut self, now: Timestamp) -> Option<ActiveAlert> {
        let AlertState::Active(alert) = self.state else {
            return None;
        };
        if now.elapsed_since(alert.raised_at) < self.display_ms {
            return None;
        }
        self.state = AlertState::Idle;
        log::debug!("alert {} expired at {now}", alert.id);
        Some(alert)
    }

    /// Clear the active alert early.  No-op when idle.
    pub fn dismiss(&mut self) -> Option<ActiveAlert> {
        let alert = self.state.active().copied()?;
        self.state = AlertState::Idle;
        log::debug!("alert {} dismissed", alert.id);
        Some(alert)
    }

    /// Try to promote one of `candidates` to the active alert.
    ///
    /// Ignored while an alert is active.  Otherwise drops candidates whose
    /// pair is cooling down, picks the winner (see module docs), records its
    /// pair in `cooldown`, and transitions to `Active`.
    pub fn offer(
        &mut self,
        candidates: &[ProximityCandidate],
        cooldown:   &mut CooldownTracker,
        now:        Timestamp,
        tick:       Tick,
    ) -> Option<ActiveAlert> {
        if self.state.is_active() || candidates.is_empty() {
            return None;
        }

        let eligible: Vec<ProximityCandidate> = candidates
            .iter()
            .filter(|c| !cooldown.is_suppressed(c.pair(), now))
            .copied()
            .collect();
        let suppressed = candidates.len() - eligible.len();
        if suppressed > 0 {
            log::debug!("{suppressed} candidate(s) suppressed by cooldown at {tick}");
        }

        let winner = select_best(&eligible)?;
        cooldown.record(winner.pair(), now);

        let alert = ActiveAlert {
            id:          self.next_id,
            mover:       winner.mover,
            watch_point: winner.watch_point,
            distance_m:  winner.distance_m,
            severity:    winner.severity,
            raised_at:   now,
            raised_tick: tick,
        };
        self.next_id = self.next_id.next();
        self.total_raised += 1;
        self.state = AlertState::Active(alert);
        Some(alert)
    }

    /// Back to `Idle` with a zero counter.  Alert ids keep increasing.
    pub fn reset(&mut self) -> Option<ActiveAlert> {
        let cleared = self.state.active().copied();
        self.state = AlertState::Idle;
        self.total_raised = 0;
        cleared
    }
}

/// The highest-ranked candidate, if any.
pub fn select_best(candidates: &[ProximityCandidate]) -> Option<&ProximityCandidate> {
    candidates.iter().min_by(|a, b| rank(a, b))
}

/// `Less` means `a` outranks `b`.
fn rank(a: &ProximityCandidate, b: &ProximityCandidate) -> Ordering {
    b.priority()
        .cmp(&a.priority())
        .then(a.distance_m.total_cmp(&b.distance_m))
        .then(a.mover.cmp(&b.mover))
        .then(a.watch_point.cmp(&b.watch_point))
}

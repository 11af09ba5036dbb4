//! Per-pair alert cooldown.

use wg_core::{MoverId, Timestamp, WatchPointId};

/// Cooldown map key.
pub type PairKey = (MoverId, WatchPointId);

#[cfg(not(feature = "fx-hash"))]
type PairMap = std::collections::HashMap<PairKey, Timestamp>;

#[cfg(feature = "fx-hash")]
type PairMap = rustc_hash::FxHashMap<PairKey, Timestamp>;

/// Remembers when each (mover, watch-point) pair last raised an alert.
///
/// Entries are only added, never expired; the map is bounded by
/// `movers × watch_points` and emptied by [`clear`][Self::clear].
#[derive(Debug, Clone, Default)]
pub struct CooldownTracker {
    window_ms:  i64,
    last_alert: PairMap,
}

impl CooldownTracker {
    pub fn new(window_ms: i64) -> Self {
        Self { window_ms, last_alert: PairMap::default() }
    }

    /// `true` while `now` is within the window of the pair's last alert.
    ///
    /// A pair that never alerted is not suppressed.  A clock that went
    /// backwards keeps the pair suppressed until it catches up.
    pub fn is_suppressed(&self, pair: PairKey, now: Timestamp) -> bool {
        self.last_alert
            .get(&pair)
            .is_some_and(|&last| now.elapsed_since(last) < self.window_ms)
    }

    /// Mark `pair` as alerted at `now`.
    pub fn record(&mut self, pair: PairKey, now: Timestamp) {
        self.last_alert.insert(pair, now);
    }

    pub fn last_alert(&self, pair: PairKey) -> Option<Timestamp> {
        self.last_alert.get(&pair).copied()
    }

    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }

    pub fn clear(&mut self) {
        self.last_alert.clear();
    }

    pub fn len(&self) -> usize {
        self.last_alert.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_alert.is_empty()
    }
}

//! Proximity detection: which visible movers are inside the alert radius of
//! which watch-points.
//!
//! Pure functions of the current positions.  Nothing here remembers earlier
//! calls.

use wg_core::{GeoPoint, MoverId, Severity, WatchPointId};
use wg_mobility::MobilityStore;
use wg_registry::Registry;

use crate::{PairKey, SeverityClassifier};

/// A mover strictly inside the alert radius of a watch-point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityHit {
    pub mover:       MoverId,
    pub watch_point: WatchPointId,
    pub distance_m:  f64,
}

/// A classified hit, eligible for promotion to an alert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityCandidate {
    pub mover:       MoverId,
    pub watch_point: WatchPointId,
    pub distance_m:  f64,
    pub severity:    Severity,
}

impl ProximityCandidate {
    /// Classify `hit` against the registry entries it refers to.
    pub fn classify(hit: ProximityHit, registry: &Registry, classifier: &SeverityClassifier) -> Self {
        let severity = match (registry.mover(hit.mover), registry.watch_point(hit.watch_point)) {
            (Some(m), Some(w)) => classifier.classify(hit.distance_m, m.kind, w.risk),
            _ => Severity::Low,
        };
        Self {
            mover:       hit.mover,
            watch_point: hit.watch_point,
            distance_m:  hit.distance_m,
            severity,
        }
    }

    #[inline]
    pub fn priority(&self) -> u8 {
        self.severity.priority()
    }

    #[inline]
    pub fn pair(&self) -> PairKey {
        (self.mover, self.watch_point)
    }
}

/// Hits for one mover at `position`, ascending by watch-point id.
pub fn detect_mover(
    mover:    MoverId,
    position: GeoPoint,
    registry: &Registry,
    radius_m: f64,
) -> Vec<ProximityHit> {
    registry
        .index()
        .candidates_within(position, radius_m)
        .into_iter()
        .filter_map(|wp| {
            let distance_m = registry.watch_points()[wp.index()].position.distance_m(position);
            (distance_m < radius_m).then_some(ProximityHit { mover, watch_point: wp, distance_m })
        })
        .collect()
}

/// Hits for every visible mover, ordered by `(mover, watch_point)`.
pub fn detect_all(registry: &Registry, store: &MobilityStore, radius_m: f64) -> Vec<ProximityHit> {
    #[cfg(not(feature = "parallel"))]
    {
        store
            .visible()
            .flat_map(|(id, state)| detect_mover(id, state.position, registry, radius_m))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let visible: Vec<(MoverId, GeoPoint)> =
            store.visible().map(|(id, s)| (id, s.position)).collect();
        visible
            .par_iter()
            .flat_map_iter(|&(id, pos)| detect_mover(id, pos, registry, radius_m))
            .collect()
    }
}

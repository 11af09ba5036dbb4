//! Catalog entries.

use wg_core::{GeoPoint, MoverId, MoverKind, RiskTier, WatchPointId};

/// A mover (animal) and its closed-loop patrol route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoverSpec {
    pub id:    MoverId,
    pub kind:  MoverKind,
    pub label: String,

    /// Route fraction advanced per tick.  A speed of 1.0 crosses one full
    /// segment per tick.
    pub speed: f64,

    /// Ordered waypoints.  At least two inside a built `Registry`.
    pub route: Vec<GeoPoint>,
}

impl MoverSpec {
    /// The first waypoint — where the mover starts and where it wraps to.
    #[inline]
    pub fn start(&self) -> GeoPoint {
        self.route[0]
    }

    /// Number of segments, i.e. the exclusive upper bound of route progress.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.route.len() - 1
    }
}

/// A fixed settlement monitored for nearby movers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WatchPoint {
    pub id:         WatchPointId,
    pub label:      String,
    pub position:   GeoPoint,
    pub population: u32,
    pub risk:       RiskTier,
}

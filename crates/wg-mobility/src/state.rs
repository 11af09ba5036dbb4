//! Per-mover movement state.

use wg_core::GeoPoint;
use wg_registry::MoverSpec;

/// The movement state of a single mover.
///
/// Invariant: `0 <= progress < route.len() - 1`, and `position` is the
/// interpolated point for `progress`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoverState {
    /// Segment index plus fractional offset within that segment.
    pub progress: f64,

    /// Derived from `progress`; cached for renderers and the detector.
    pub position: GeoPoint,

    /// Hidden movers neither move nor raise alerts.
    pub visible: bool,
}

impl MoverState {
    /// A visible mover parked at the start of its route.
    #[inline]
    pub fn at_start(spec: &MoverSpec) -> Self {
        Self {
            progress: 0.0,
            position: spec.start(),
            visible:  true,
        }
    }

    /// Advance one tick along `spec.route`.
    ///
    /// Returns `true` when the mover wrapped back to the start this tick.
    pub fn advance(&mut self, spec: &MoverSpec) -> bool {
        let next = self.progress + spec.speed;
        if next.floor() >= spec.segment_count() as f64 {
            self.progress = 0.0;
            self.position = spec.start();
            return true;
        }
        self.progress = next;
        self.position = position_at(&spec.route, next);
        false
    }

    /// Back to the route start, keeping visibility.
    #[inline]
    pub fn rewind(&mut self, spec: &MoverSpec) {
        self.progress = 0.0;
        self.position = spec.start();
    }
}

/// Interpolated point on `route` at `progress`.
///
/// Progress outside `[0, route.len() - 1)` is clamped to the route's ends.
/// A single-point route always yields that point.  `route` must not be empty;
/// every route in a built `Registry` has at least two points.
pub(crate) fn position_at(route: &[GeoPoint], progress: f64) -> GeoPoint {
    if route.len() < 2 {
        return route[0];
    }
    let last_segment = route.len() - 2;
    let p = progress.max(0.0);
    let segment = (p.floor() as usize).min(last_segment);
    let t = (p - segment as f64).min(1.0);
    route[segment].lerp(route[segment + 1], t)
}

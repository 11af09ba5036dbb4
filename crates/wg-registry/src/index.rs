//! R-tree prefilter over watch-point positions.
//!
//! Entries live in plain `[lat, lon]` degree space.  A query for radius `r`
//! around `p` converts `r` into conservative degree half-spans and walks the
//! tree in order of planar degree distance, stopping once the planar distance
//! exceeds the diagonal of that box.  Every watch-point whose haversine
//! distance to `p` is below `r` is returned; a few farther ones may be too, so
//! callers still apply the exact distance test.
//!
//! Near the poles or across the antimeridian the planar box is meaningless
//! and the query degrades to returning every watch-point.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use wg_core::{EARTH_RADIUS_M, GeoPoint, WatchPointId};

use crate::WatchPoint;

/// Safety factor applied to the degree half-spans.
const SPAN_MARGIN: f64 = 1.01;

#[derive(Clone, Debug)]
struct WatchPointEntry {
    point: [f64; 2], // [lat, lon]
    id:    WatchPointId,
}

impl RTreeObject for WatchPointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for WatchPointEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Spatial index of watch-point positions.
pub struct WatchPointIndex {
    tree:  RTree<WatchPointEntry>,
    count: usize,
}

impl WatchPointIndex {
    pub fn new(watch_points: &[WatchPoint]) -> Self {
        let entries: Vec<WatchPointEntry> = watch_points
            .iter()
            .map(|w| WatchPointEntry { point: [w.position.lat, w.position.lon], id: w.id })
            .collect();
        Self {
            count: entries.len(),
            tree:  RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Ids of watch-points that may lie within `radius_m` of `pos`, in
    /// ascending id order.
    pub fn candidates_within(&self, pos: GeoPoint, radius_m: f64) -> Vec<WatchPointId> {
        let mut ids: Vec<WatchPointId> = match half_spans_deg(pos, radius_m) {
            None => self.tree.iter().map(|e| e.id).collect(),
            Some((dlat, dlon)) => {
                let limit_2 = dlat * dlat + dlon * dlon;
                self.tree
                    .nearest_neighbor_iter_with_distance_2(&[pos.lat, pos.lon])
                    .take_while(|(_, d2)| *d2 <= limit_2)
                    .map(|(e, _)| e.id)
                    .collect()
            }
        };
        ids.sort_unstable();
        ids
    }
}

impl std::fmt::Debug for WatchPointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchPointIndex").field("count", &self.count).finish()
    }
}

/// Latitude and longitude half-spans (degrees) that contain every point within
/// `radius_m` of `pos`, or `None` when no planar box does.
fn half_spans_deg(pos: GeoPoint, radius_m: f64) -> Option<(f64, f64)> {
    if !radius_m.is_finite() {
        return None;
    }
    let dlat = (radius_m / EARTH_RADIUS_M).to_degrees() * SPAN_MARGIN;
    let max_abs_lat = pos.lat.abs() + dlat;
    if max_abs_lat >= 89.0 {
        return None;
    }
    let dlon = dlat / max_abs_lat.to_radians().cos();
    if pos.lon - dlon < -180.0 || pos.lon + dlon > 180.0 {
        return None;
    }
    Some((dlat, dlon))
}

//! The validated `Registry` and its builder.

use std::collections::HashSet;

use wg_core::{GeoPoint, MoverId, MoverKind, RiskTier, WatchPointId};

use crate::{MoverSpec, RegistryError, RegistryResult, WatchPoint, WatchPointIndex};

// ── Registry ──────────────────────────────────────────────────────────────────

/// Immutable catalog of movers and watch-points for one simulation.
///
/// `movers()[i].id == MoverId(i)` and `watch_points()[i].id ==
/// WatchPointId(i)`, so ids index directly into the slices.
#[derive(Debug)]
pub struct Registry {
    movers:       Vec<MoverSpec>,
    watch_points: Vec<WatchPoint>,
    index:        WatchPointIndex,
}

impl Registry {
    #[inline]
    pub fn movers(&self) -> &[MoverSpec] {
        &self.movers
    }

    #[inline]
    pub fn watch_points(&self) -> &[WatchPoint] {
        &self.watch_points
    }

    #[inline]
    pub fn mover(&self, id: MoverId) -> Option<&MoverSpec> {
        self.movers.get(id.index())
    }

    #[inline]
    pub fn watch_point(&self, id: WatchPointId) -> Option<&WatchPoint> {
        self.watch_points.get(id.index())
    }

    /// Look a mover up by its label.
    pub fn mover_by_label(&self, label: &str) -> Option<&MoverSpec> {
        self.movers.iter().find(|m| m.label == label)
    }

    /// Look a watch-point up by its label.
    pub fn watch_point_by_label(&self, label: &str) -> Option<&WatchPoint> {
        self.watch_points.iter().find(|w| w.label == label)
    }

    /// Spatial prefilter over watch-point positions.
    #[inline]
    pub fn index(&self) -> &WatchPointIndex {
        &self.index
    }

    pub fn mover_count(&self) -> usize {
        self.movers.len()
    }

    pub fn watch_point_count(&self) -> usize {
        self.watch_points.len()
    }
}

// ── RegistryBuilder ───────────────────────────────────────────────────────────

/// Incrementally collects movers and watch-points; all checks run in
/// [`build`][Self::build].
///
/// ```rust,ignore
/// let mut b = RegistryBuilder::new();
/// let v = b.add_watch_point("Gir Village", GeoPoint::new(21.174, 70.826), 350, RiskTier::Low);
/// let m = b.add_mover("Mane Majesty", MoverKind::Lion, 0.0002, route);
/// let registry = b.build()?;
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    movers:       Vec<MoverSpec>,
    watch_points: Vec<WatchPoint>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mover and return the id it will have in the built registry.
    pub fn add_mover(
        &mut self,
        label: impl Into<String>,
        kind:  MoverKind,
        speed: f64,
        route: Vec<GeoPoint>,
    ) -> MoverId {
        let id = MoverId(self.movers.len() as u32);
        self.movers.push(MoverSpec { id, kind, label: label.into(), speed, route });
        id
    }

    /// Add a watch-point and return the id it will have in the built registry.
    pub fn add_watch_point(
        &mut self,
        label:      impl Into<String>,
        position:   GeoPoint,
        population: u32,
        risk:       RiskTier,
    ) -> WatchPointId {
        let id = WatchPointId(self.watch_points.len() as u32);
        self.watch_points.push(WatchPoint { id, label: label.into(), position, population, risk });
        id
    }

    /// Validate every entry and build the spatial index.
    ///
    /// # Errors
    ///
    /// The first violation found, in insertion order: a route with fewer than
    /// two waypoints, a negative or non-finite speed, a zero population, an
    /// out-of-range coordinate, or a repeated label.
    pub fn build(self) -> RegistryResult<Registry> {
        if self.movers.len() >= u32::MAX as usize || self.watch_points.len() >= u32::MAX as usize {
            return Err(RegistryError::TooManyEntries);
        }

        let mut labels = HashSet::new();
        for m in &self.movers {
            if m.route.len() < 2 {
                return Err(RegistryError::RouteTooShort {
                    label:     m.label.clone(),
                    waypoints: m.route.len(),
                });
            }
            if !m.speed.is_finite() || m.speed < 0.0 {
                return Err(RegistryError::InvalidSpeed { label: m.label.clone(), speed: m.speed });
            }
            if !m.route.iter().all(|p| p.is_valid()) {
                return Err(RegistryError::InvalidCoordinate { what: "mover", label: m.label.clone() });
            }
            if !labels.insert(m.label.as_str()) {
                return Err(RegistryError::DuplicateLabel { what: "mover", label: m.label.clone() });
            }
        }

        let mut labels = HashSet::new();
        for w in &self.watch_points {
            if w.population == 0 {
                return Err(RegistryError::InvalidPopulation { label: w.label.clone() });
            }
            if !w.position.is_valid() {
                return Err(RegistryError::InvalidCoordinate {
                    what:  "watch-point",
                    label: w.label.clone(),
                });
            }
            if !labels.insert(w.label.as_str()) {
                return Err(RegistryError::DuplicateLabel {
                    what:  "watch-point",
                    label: w.label.clone(),
                });
            }
        }

        let index = WatchPointIndex::new(&self.watch_points);
        log::debug!(
            "registry built: {} movers, {} watch-points",
            self.movers.len(),
            self.watch_points.len()
        );

        Ok(Registry {
            movers:       self.movers,
            watch_points: self.watch_points,
            index,
        })
    }
}

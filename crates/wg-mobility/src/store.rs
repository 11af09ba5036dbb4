//! The `MobilityStore` — movement state for every mover.

use wg_core::MoverId;
use wg_registry::Registry;

use crate::MoverState;

/// Holds one [`MoverState`] per registry mover, indexed by `MoverId`.
#[derive(Debug, Clone)]
pub struct MobilityStore {
    pub states: Vec<MoverState>,
}

impl MobilityStore {
    /// Every mover visible at the start of its route.
    pub fn new(registry: &Registry) -> Self {
        Self {
            states: registry.movers().iter().map(MoverState::at_start).collect(),
        }
    }

    #[inline]
    pub fn get(&self, mover: MoverId) -> Option<&MoverState> {
        self.states.get(mover.index())
    }

    #[inline]
    pub fn is_visible(&self, mover: MoverId) -> bool {
        self.get(mover).is_some_and(|s| s.visible)
    }

    /// Number of visible movers.
    pub fn visible_count(&self) -> usize {
        self.states.iter().filter(|s| s.visible).count()
    }

    /// `(MoverId, &MoverState)` for every visible mover, ascending by id.
    pub fn visible(&self) -> impl Iterator<Item = (MoverId, &MoverState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.visible)
            .map(|(i, s)| (MoverId(i as u32), s))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

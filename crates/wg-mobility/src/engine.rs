//! Position update engine: advances visible movers one tick at a time.

use wg_core::MoverId;
use wg_registry::Registry;

use crate::{MobilityError, MobilityResult, MobilityStore};

/// Owns the [`MobilityStore`] and applies the per-tick movement rule.
#[derive(Debug, Clone)]
pub struct MobilityEngine {
    pub store: MobilityStore,
}

impl MobilityEngine {
    pub fn new(registry: &Registry) -> Self {
        Self { store: MobilityStore::new(registry) }
    }

    /// Advance every visible mover by its speed.
    ///
    /// Returns the ids of movers that wrapped back to their route start.
    pub fn advance_all(&mut self, registry: &Registry) -> Vec<MoverId> {
        registry
            .movers()
            .iter()
            .zip(self.store.states.iter_mut())
            .filter(|(_, state)| state.visible)
            .filter_map(|(spec, state)| state.advance(spec).then_some(spec.id))
            .collect()
    }

    /// Put every mover back at `route[0]` with zero progress.  Visibility is
    /// left as the host set it.
    pub fn reset(&mut self, registry: &Registry) {
        for (spec, state) in registry.movers().iter().zip(self.store.states.iter_mut()) {
            state.rewind(spec);
        }
    }

    /// Show or hide one mover.  A hidden mover keeps its progress and resumes
    /// from there when shown again.
    pub fn set_visibility(&mut self, mover: MoverId, visible: bool) -> MobilityResult<()> {
        let state = self
            .store
            .states
            .get_mut(mover.index())
            .ok_or(MobilityError::UnknownMover(mover))?;
        state.visible = visible;
        Ok(())
    }
}

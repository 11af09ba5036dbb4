//! Fluent builder for constructing a [`Simulation`].

use wg_alert::{AlertSequencer, CooldownTracker, SeverityClassifier};
use wg_core::{MoverId, SimClock, SimConfig};
use wg_mobility::MobilityEngine;
use wg_registry::Registry;

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.config(c)`    | `SimConfig::default()`           |
/// | `.running(b)`   | `false` (starts paused)          |
/// | `.hidden(ids)`  | every mover visible              |
pub struct SimBuilder {
    registry: Registry,
    config:   SimConfig,
    running:  bool,
    hidden:   Vec<MoverId>,
}

impl SimBuilder {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            config:  SimConfig::default(),
            running: false,
            hidden:  Vec::new(),
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Movers that start hidden.
    pub fn hidden(mut self, movers: impl IntoIterator<Item = MoverId>) -> Self {
        self.hidden.extend(movers);
        self
    }

    /// Validate the configuration and return a ready simulation.
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        let mut mobility = MobilityEngine::new(&self.registry);
        for id in self.hidden {
            mobility
                .set_visibility(id, false)
                .map_err(|_| SimError::UnknownMover(id))?;
        }

        Ok(Simulation {
            classifier: SeverityClassifier::from_config(&self.config),
            cooldown:   CooldownTracker::new(self.config.cooldown_window()),
            sequencer:  AlertSequencer::new(self.config.display_window()),
            clock:      SimClock::new(),
            config:     self.config,
            registry:   self.registry,
            mobility,
            running:    self.running,
        })
    }
}

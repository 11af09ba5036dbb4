//! The `Simulation` controller and its tick pipeline.

use wg_alert::{
    ActiveAlert, AlertSequencer, AlertState, ClearReason, CooldownTracker, ProximityCandidate,
    SeverityClassifier, detect_all,
};
use wg_core::{GeoPoint, MoverId, SimClock, SimConfig, Timestamp};
use wg_mobility::{MobilityEngine, MobilityError, MobilityStore};
use wg_registry::Registry;

use crate::{SimError, SimObserver, SimResult, SimStats};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What happened during one call to [`Simulation::tick`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// `false` when the simulation was paused and nothing ran.
    pub ran: bool,
    /// Movers that wrapped back to their route start this tick.
    pub wrapped: Vec<MoverId>,
    /// Alert that expired this tick.
    pub expired: Option<ActiveAlert>,
    /// Alert raised this tick.
    pub raised: Option<ActiveAlert>,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// Owns all simulation state: mover progress, the cooldown map, and the alert
/// sequencer.  Single-threaded; every operation completes synchronously.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Simulation {
    pub(crate) config:     SimConfig,
    pub(crate) clock:      SimClock,
    pub(crate) registry:   Registry,
    pub(crate) mobility:   MobilityEngine,
    pub(crate) classifier: SeverityClassifier,
    pub(crate) cooldown:   CooldownTracker,
    pub(crate) sequencer:  AlertSequencer,
    pub(crate) running:    bool,
}

impl Simulation {
    // ── Tick driver surface ───────────────────────────────────────────────

    /// Process one frame at host time `now`.  Does nothing while paused.
    pub fn tick<O: SimObserver>(&mut self, now: Timestamp, observer: &mut O) -> TickReport {
        if !self.running {
            return TickReport::default();
        }
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick, now);

        // ① Movement.
        let wrapped = self.mobility.advance_all(&self.registry);

        // ② Expiry.
        let expired = self.sequencer.expire(now);
        if let Some(alert) = &expired {
            observer.on_alert_cleared(alert, ClearReason::Expired, &self.registry);
        }

        // ③–⑤ Detection, classification, sequencing.  An active alert blocks
        // promotion, so the scan is skipped entirely.
        let mut raised = None;
        if self.sequencer.is_idle() {
            let candidates: Vec<ProximityCandidate> =
                detect_all(&self.registry, &self.mobility.store, self.config.alert_radius_m)
                    .into_iter()
                    .map(|hit| ProximityCandidate::classify(hit, &self.registry, &self.classifier))
                    .collect();

            raised = self.sequencer.offer(&candidates, &mut self.cooldown, now, tick);
            if let Some(alert) = &raised {
                self.log_raised(alert);
                observer.on_alert_raised(alert, &self.registry);
            }
        }

        // ⑥ Stats and snapshots.
        let stats = self.stats();
        observer.on_tick_end(tick, now, &stats);
        if tick.is_multiple_of(self.config.snapshot_interval_ticks) {
            observer.on_snapshot(tick, now, &self.registry, &self.mobility.store);
        }

        self.clock.advance(now);
        TickReport { ran: true, wrapped, expired, raised }
    }

    /// Start or pause.  Takes effect at the next tick.
    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            log::info!("simulation {} at {}", if running { "started" } else { "paused" }, self.clock);
        }
        self.running = running;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the simulation and return every piece of state to its initial
    /// value: mover progress, cooldown map, active alert, counters, clock.
    ///
    /// Mover visibility is a host setting and is kept.
    pub fn reset<O: SimObserver>(&mut self, observer: &mut O) {
        self.running = false;
        self.mobility.reset(&self.registry);
        self.cooldown.clear();
        if let Some(alert) = self.sequencer.reset() {
            observer.on_alert_cleared(&alert, ClearReason::Reset, &self.registry);
        }
        self.clock.reset();
        log::info!("simulation reset");
        observer.on_reset();
    }

    /// Show or hide one mover.
    pub fn set_visibility(&mut self, mover: MoverId, visible: bool) -> SimResult<()> {
        self.mobility
            .set_visibility(mover, visible)
            .map_err(|MobilityError::UnknownMover(id)| SimError::UnknownMover(id))?;
        log::debug!("{mover} visible={visible}");
        Ok(())
    }

    /// Clear the active alert early.
    pub fn dismiss<O: SimObserver>(&mut self, observer: &mut O) -> Option<ActiveAlert> {
        let alert = self.sequencer.dismiss()?;
        observer.on_alert_cleared(&alert, ClearReason::Dismissed, &self.registry);
        Some(alert)
    }

    /// Expire the active alert without running a tick.
    ///
    /// Lets a host time out the on-screen alert while the simulation is
    /// paused.
    pub fn poll_expiry<O: SimObserver>(&mut self, now: Timestamp, observer: &mut O) -> Option<ActiveAlert> {
        let alert = self.sequencer.expire(now)?;
        observer.on_alert_cleared(&alert, ClearReason::Expired, &self.registry);
        Some(alert)
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Derived counters.
    pub fn stats(&self) -> SimStats {
        SimStats {
            active_movers: self.mobility.store.visible_count(),
            watch_points:  self.registry.watch_point_count(),
            total_alerts:  self.sequencer.total_raised(),
            active_alerts: u8::from(self.sequencer.state().is_active()),
        }
    }

    #[inline]
    pub fn alert_state(&self) -> &AlertState {
        self.sequencer.state()
    }

    #[inline]
    pub fn active_alert(&self) -> Option<&ActiveAlert> {
        self.sequencer.active()
    }

    /// Current position of `mover`, hidden or not.
    pub fn mover_position(&self, mover: MoverId) -> Option<GeoPoint> {
        self.mobility.store.get(mover).map(|s| s.position)
    }

    #[inline]
    pub fn store(&self) -> &MobilityStore {
        &self.mobility.store
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn cooldown(&self) -> &CooldownTracker {
        &self.cooldown
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn log_raised(&self, alert: &ActiveAlert) {
        let mover = self.registry.mover(alert.mover).map_or("?", |m| m.label.as_str());
        let place = self.registry.watch_point(alert.watch_point).map_or("?", |w| w.label.as_str());
        log::info!(
            "alert {} [{}] {} -> {} at {:.0} m ({})",
            alert.id.0,
            alert.severity,
            mover,
            place,
            alert.distance_m,
            alert.raised_tick,
        );
    }
}

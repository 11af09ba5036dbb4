//! Simulation observer trait for presentation layers and data collection.

use wg_alert::{ActiveAlert, ClearReason};
use wg_core::{Tick, Timestamp};
use wg_mobility::MobilityStore;
use wg_registry::Registry;

use crate::SimStats;

/// Callbacks invoked by [`Simulation`][crate::Simulation] during ticks and
/// control operations.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — alert printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_alert_raised(&mut self, alert: &ActiveAlert, registry: &Registry) {
///         println!("{}", format_alert_message(alert, registry));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of every running tick.
    fn on_tick_start(&mut self, _tick: Tick, _now: Timestamp) {}

    /// Called when a candidate is promoted to the active alert.
    fn on_alert_raised(&mut self, _alert: &ActiveAlert, _registry: &Registry) {}

    /// Called when the active alert leaves the screen.
    fn on_alert_cleared(&mut self, _alert: &ActiveAlert, _reason: ClearReason, _registry: &Registry) {}

    /// Called at the end of every running tick with the derived counters.
    fn on_tick_end(&mut self, _tick: Tick, _now: Timestamp, _stats: &SimStats) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to mover positions.
    fn on_snapshot(
        &mut self,
        _tick:     Tick,
        _now:      Timestamp,
        _registry: &Registry,
        _store:    &MobilityStore,
    ) {}

    /// Called after a reset has completed.
    fn on_reset(&mut self) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

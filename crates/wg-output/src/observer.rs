//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use wg_core::{Tick, Timestamp};
use wg_mobility::MobilityStore;
use wg_registry::Registry;
use wg_sim::{ActiveAlert, SimObserver, SimStats};

use crate::row::{AlertRow, PositionRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records raised alerts, tick summaries, and mover
/// position snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  Check for them with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, then report the first stored error ahead of any
    /// flush error.
    pub fn finish(&mut self) -> OutputResult<()> {
        let flushed = self.writer.finish();
        match self.last_error.take() {
            Some(e) => Err(e),
            None => flushed,
        }
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_alert_raised(&mut self, alert: &ActiveAlert, registry: &Registry) {
        let (mover, kind) = registry
            .mover(alert.mover)
            .map_or((String::new(), "unknown"), |m| (m.label.clone(), m.kind.as_str()));
        let watch_point = registry
            .watch_point(alert.watch_point)
            .map_or_else(String::new, |w| w.label.clone());

        let row = AlertRow {
            alert_id:     alert.id.0,
            tick:         alert.raised_tick.0,
            raised_at_ms: alert.raised_at.as_millis(),
            mover,
            kind,
            watch_point,
            distance_m:   alert.distance_m,
            severity:     alert.severity.as_str(),
            priority:     alert.severity.priority(),
        };
        let result = self.writer.write_alert(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, now: Timestamp, stats: &SimStats) {
        let row = TickSummaryRow {
            tick:          tick.0,
            now_ms:        now.as_millis(),
            active_movers: stats.active_movers as u64,
            total_alerts:  stats.total_alerts,
            active_alerts: stats.active_alerts,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, now: Timestamp, registry: &Registry, store: &MobilityStore) {
        let rows: Vec<PositionRow> = registry
            .movers()
            .iter()
            .zip(&store.states)
            .map(|(spec, state)| PositionRow {
                tick:     tick.0,
                now_ms:   now.as_millis(),
                mover:    spec.label.clone(),
                lat:      state.position.lat,
                lon:      state.position.lon,
                progress: state.progress,
                visible:  state.visible,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }
}

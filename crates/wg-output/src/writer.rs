//! The `OutputWriter` trait implemented by backend writers.

use crate::{AlertRow, OutputResult, PositionRow, TickSummaryRow};

/// Sink for simulation output rows.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when driven by the observer.
pub trait OutputWriter {
    /// Write one raised alert.
    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of mover positions.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

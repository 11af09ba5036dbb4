//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `alerts.csv`
//! - `tick_summaries.csv`
//! - `positions.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AlertRow, OutputResult, PositionRow, TickSummaryRow};

pub const ALERT_HEADERS: [&str; 9] = [
    "alert_id", "tick", "raised_at_ms", "mover", "kind", "watch_point", "distance_m", "severity", "priority",
];
pub const SUMMARY_HEADERS: [&str; 5] = ["tick", "now_ms", "active_movers", "total_alerts", "active_alerts"];
pub const POSITION_HEADERS: [&str; 7] = ["tick", "now_ms", "mover", "lat", "lon", "progress", "visible"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    alerts:    Writer<File>,
    summaries: Writer<File>,
    positions: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files in it, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut alerts = Writer::from_path(dir.join("alerts.csv"))?;
        alerts.write_record(ALERT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        let mut positions = Writer::from_path(dir.join("positions.csv"))?;
        positions.write_record(POSITION_HEADERS)?;

        Ok(Self { alerts, summaries, positions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()> {
        self.alerts.write_record(&[
            row.alert_id.to_string(),
            row.tick.to_string(),
            row.raised_at_ms.to_string(),
            row.mover.clone(),
            row.kind.to_owned(),
            row.watch_point.clone(),
            format!("{:.1}", row.distance_m),
            row.severity.to_owned(),
            row.priority.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.now_ms.to_string(),
            row.active_movers.to_string(),
            row.total_alerts.to_string(),
            row.active_alerts.to_string(),
        ])?;
        Ok(())
    }

    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.tick.to_string(),
                row.now_ms.to_string(),
                row.mover.clone(),
                format!("{:.6}", row.lat),
                format!("{:.6}", row.lon),
                format!("{:.4}", row.progress),
                (row.visible as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.alerts.flush()?;
        self.summaries.flush()?;
        self.positions.flush()?;
        Ok(())
    }
}

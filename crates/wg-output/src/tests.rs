//! Integration tests for wg-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{ALERT_HEADERS, CsvWriter, POSITION_HEADERS, SUMMARY_HEADERS};
    use crate::row::{AlertRow, PositionRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested").join("run");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("alerts.csv").exists());
        assert!(out.join("tick_summaries.csv").exists());
        assert!(out.join("positions.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(&dir.path().join("alerts.csv")), ALERT_HEADERS);
        assert_eq!(headers(&dir.path().join("tick_summaries.csv")), SUMMARY_HEADERS);
        assert_eq!(headers(&dir.path().join("positions.csv")), POSITION_HEADERS);
    }

    #[test]
    fn alert_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_alert(&AlertRow {
            alert_id:     3,
            tick:         12,
            raised_at_ms: 1_500,
            mover:        "Stripe King".into(),
            kind:         "tiger",
            watch_point:  "Ranthambore Village".into(),
            distance_m:   812.345,
            severity:     "critical",
            priority:     3,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("alerts.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get(3), Some("Stripe King"));
        assert_eq!(records[0].get(6), Some("812.3"));
        assert_eq!(records[0].get(7), Some("critical"));
    }

    #[test]
    fn positions_and_summaries_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = |mover: &str, visible| PositionRow {
            tick: 4,
            now_ms: 64,
            mover: mover.into(),
            lat: 26.1,
            lon: 76.4,
            progress: 0.25,
            visible,
        };
        w.write_positions(&[row("a", true), row("b", false)]).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 4, now_ms: 64, active_movers: 1, total_alerts: 0, active_alerts: 0 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        let visible: Vec<String> = rdr.records().map(|r| r.unwrap()[6].to_owned()).collect();
        assert_eq!(visible, ["1", "0"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use wg_core::{GeoPoint, MoverKind, RiskTier, SimConfig, Timestamp};
    use wg_registry::RegistryBuilder;
    use wg_sim::SimBuilder;

    use crate::{AlertRow, CsvWriter, OutputError, OutputResult, OutputWriter, PositionRow, SimOutputObserver, TickSummaryRow};

    /// Collects rows in memory.
    #[derive(Default)]
    struct MemWriter {
        alerts:    Vec<AlertRow>,
        summaries: Vec<TickSummaryRow>,
        positions: Vec<PositionRow>,
        fail:      bool,
        finished:  bool,
    }

    impl OutputWriter for MemWriter {
        fn write_alert(&mut self, row: &AlertRow) -> OutputResult<()> {
            self.alerts.push(row.clone());
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.summaries.push(*row);
            Ok(())
        }
        fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
            self.positions.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn sim(snapshot_interval_ticks: u64) -> wg_sim::Simulation {
        let mut b = RegistryBuilder::new();
        b.add_watch_point("origin", GeoPoint::new(0.0, 0.0), 100, RiskTier::High);
        let p = GeoPoint::new(0.0, 0.005);
        b.add_mover("stalker", MoverKind::Tiger, 0.0, vec![p, p]);
        let q = GeoPoint::new(0.0, 0.2);
        b.add_mover("wanderer", MoverKind::Elephant, 0.0, vec![q, q]);

        let config = SimConfig { snapshot_interval_ticks, ..SimConfig::default() };
        SimBuilder::new(b.build().unwrap()).config(config).running(true).build().unwrap()
    }

    #[test]
    fn records_alerts_summaries_and_snapshots() {
        let mut sim = sim(2);
        let mut obs = SimOutputObserver::new(MemWriter::default());
        for t in 0..4 {
            sim.tick(Timestamp::from_millis(t * 100), &mut obs);
        }
        assert!(obs.take_error().is_none());
        let w = obs.into_writer();

        assert_eq!(w.alerts.len(), 1);
        assert_eq!(w.alerts[0].mover, "stalker");
        assert_eq!(w.alerts[0].severity, "critical");
        assert_eq!(w.alerts[0].priority, 3);

        assert_eq!(w.summaries.len(), 4);
        assert_eq!(w.summaries[3].now_ms, 300);
        assert_eq!(w.summaries[3].total_alerts, 1);

        // Ticks 0 and 2, two movers each.
        assert_eq!(w.positions.len(), 4);
        assert_eq!(w.positions[2].tick, 2);
    }

    #[test]
    fn first_error_is_kept() {
        let mut sim = sim(0);
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.tick(Timestamp::ZERO, &mut obs);
        sim.tick(Timestamp::from_millis(16), &mut obs);

        assert!(matches!(obs.finish(), Err(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_flushes_even_after_write_error() {
        let mut sim = sim(0);
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.tick(Timestamp::ZERO, &mut obs);

        assert!(obs.finish().is_err());
        let w = obs.into_writer();
        assert!(w.finished);
        // The alert row landed even though the summary write failed.
        assert_eq!(w.alerts.len(), 1);
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = sim(1);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        for t in 0..3 {
            sim.tick(Timestamp::from_secs(t), &mut obs);
        }
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("positions.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
        let mut rdr = csv::Reader::from_path(dir.path().join("alerts.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);
    }
}

//! `wg-output` — simulation output writers for wildguard.
//!
//! | Backend | Files created                                              |
//! |---------|------------------------------------------------------------|
//! | CSV     | `alerts.csv`, `tick_summaries.csv`, `positions.csv`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wg_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! for now in frames {
//!     sim.tick(now, &mut obs);
//! }
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AlertRow, PositionRow, TickSummaryRow};
pub use writer::OutputWriter;

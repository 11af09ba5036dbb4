//! Simulation configuration.
//!
//! `SimConfig::default()` is the stock dashboard tuning: a 4 km alert
//! radius, severity clauses at 1/2/3 km, a 45 s per-pair cooldown and a 5 s
//! alert display time.

use crate::{CoreError, CoreResult};

/// Tunable constants of the alert pipeline.
///
/// Typically left at the default; the demo binary can load an override from
/// JSON when the `serde` feature is enabled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Pairs at or beyond this distance produce no candidate.
    pub alert_radius_m: f64,

    /// Radius of the `critical` clause.
    pub critical_radius_m: f64,

    /// Radius of the `high` clause.
    pub high_radius_m: f64,

    /// Radius of the `medium` clause.
    pub medium_radius_m: f64,

    /// Minimum time between two alerts for the same mover/watch-point pair.
    pub cooldown_ms: u64,

    /// How long an alert stays active before it expires on its own.
    pub alert_display_ms: u64,

    /// Emit position snapshots to observers every N ticks.  0 disables them.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            alert_radius_m:          4_000.0,
            critical_radius_m:       1_000.0,
            high_radius_m:           2_000.0,
            medium_radius_m:         3_000.0,
            cooldown_ms:             45_000,
            alert_display_ms:        5_000,
            snapshot_interval_ticks: 0,
        }
    }
}

impl SimConfig {
    /// Check that every radius is finite and positive and that the radii
    /// increase strictly from `critical` to `alert`.
    pub fn validate(&self) -> CoreResult<()> {
        let radii = [
            ("critical_radius_m", self.critical_radius_m),
            ("high_radius_m",     self.high_radius_m),
            ("medium_radius_m",   self.medium_radius_m),
            ("alert_radius_m",    self.alert_radius_m),
        ];
        for (name, r) in radii {
            if !r.is_finite() || r <= 0.0 {
                return Err(CoreError::Config(format!("{name} must be finite and positive, got {r}")));
            }
        }
        for pair in radii.windows(2) {
            let ((lo_name, lo), (hi_name, hi)) = (pair[0], pair[1]);
            if lo >= hi {
                return Err(CoreError::Config(format!(
                    "{lo_name} ({lo}) must be smaller than {hi_name} ({hi})"
                )));
            }
        }
        Ok(())
    }

    /// Cooldown window as signed milliseconds for timestamp comparisons.
    #[inline]
    pub fn cooldown_window(&self) -> i64 {
        i64::try_from(self.cooldown_ms).unwrap_or(i64::MAX)
    }

    /// Alert display duration as signed milliseconds.
    #[inline]
    pub fn display_window(&self) -> i64 {
        i64::try_from(self.alert_display_ms).unwrap_or(i64::MAX)
    }
}

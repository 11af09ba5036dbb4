//! Severity classification.
//!
//! Clauses are evaluated top-down and the first match wins:
//!
//! | Severity   | Distance below | Condition                                             |
//! |------------|----------------|-------------------------------------------------------|
//! | `critical` | critical (1 km)| tiger or lion, and tier high                          |
//! | `high`     | high (2 km)    | tiger, lion or leopard; or elephant and tier high     |
//! | `medium`   | medium (3 km)  | bear, or tier medium                                  |
//! | `low`      | —              | anything else                                         |
//!
//! An `Unknown` kind or tier short-circuits to `low`.  Because the radii
//! increase strictly, moving closer can only add matching clauses, so the
//! result never drops in priority as distance shrinks.

use wg_core::{MoverKind, RiskTier, Severity, SimConfig};

/// Radii of the three distance-gated clauses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityClassifier {
    pub critical_radius_m: f64,
    pub high_radius_m:     f64,
    pub medium_radius_m:   f64,
}

impl Default for SeverityClassifier {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl SeverityClassifier {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            critical_radius_m: config.critical_radius_m,
            high_radius_m:     config.high_radius_m,
            medium_radius_m:   config.medium_radius_m,
        }
    }

    pub fn classify(&self, distance_m: f64, kind: MoverKind, tier: RiskTier) -> Severity {
        use MoverKind::*;

        if kind == Unknown || tier == RiskTier::Unknown {
            return Severity::Low;
        }

        let big_cat = matches!(kind, Tiger | Lion);

        if distance_m < self.critical_radius_m && big_cat && tier == RiskTier::High {
            return Severity::Critical;
        }
        if distance_m < self.high_radius_m
            && (big_cat || kind == Leopard || (kind == Elephant && tier == RiskTier::High))
        {
            return Severity::High;
        }
        if distance_m < self.medium_radius_m && (kind == Bear || tier == RiskTier::Medium) {
            return Severity::Medium;
        }
        Severity::Low
    }
}

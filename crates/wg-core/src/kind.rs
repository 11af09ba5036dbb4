//! Classification enums shared across the alert pipeline.
//!
//! `MoverKind` and `RiskTier` parse from strings without failing: anything
//! unrecognised becomes `Unknown`, which the severity classifier maps to
//! [`Severity::Low`].

use std::fmt;
use std::str::FromStr;

/// The species of a mover.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoverKind {
    Elephant,
    Tiger,
    Lion,
    Leopard,
    Bear,
    /// Parsed from an unrecognised label.
    Unknown,
}

impl MoverKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MoverKind::Elephant => "elephant",
            MoverKind::Tiger    => "tiger",
            MoverKind::Lion     => "lion",
            MoverKind::Leopard  => "leopard",
            MoverKind::Bear     => "bear",
            MoverKind::Unknown  => "unknown",
        }
    }
}

impl FromStr for MoverKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "elephant" => MoverKind::Elephant,
            "tiger"    => MoverKind::Tiger,
            "lion"     => MoverKind::Lion,
            "leopard"  => MoverKind::Leopard,
            "bear"     => MoverKind::Bear,
            _          => MoverKind::Unknown,
        })
    }
}

impl fmt::Display for MoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative risk tier of a watch-point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskTier {
    Low,
    Medium,
    High,
    /// Parsed from an unrecognised label.
    Unknown,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low     => "low",
            RiskTier::Medium  => "medium",
            RiskTier::High    => "high",
            RiskTier::Unknown => "unknown",
        }
    }
}

impl FromStr for RiskTier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "low"    => RiskTier::Low,
            "medium" => RiskTier::Medium,
            "high"   => RiskTier::High,
            _        => RiskTier::Unknown,
        })
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert severity.  Variants are declared in ascending priority, so the
/// derived `Ord` agrees with [`Severity::priority`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Fixed ranking weight: critical=3, high=2, medium=1, low=0.
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            Severity::Low      => 0,
            Severity::Medium   => 1,
            Severity::High     => 2,
            Severity::Critical => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low      => "low",
            Severity::Medium   => "medium",
            Severity::High     => "high",
            Severity::Critical => "critical",
        }
    }

    /// Banner title shown by alert presentation layers.
    pub fn title(self) -> &'static str {
        match self {
            Severity::Low      => "LOW ALERT",
            Severity::Medium   => "MEDIUM ALERT",
            Severity::High     => "HIGH ALERT",
            Severity::Critical => "CRITICAL ALERT",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

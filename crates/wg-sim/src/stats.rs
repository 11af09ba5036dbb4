//! Derived counters for the live stats panel.

/// A snapshot of the simulation counters.  Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimStats {
    /// Visible movers.
    pub active_movers: usize,
    /// Watch-points in the registry.
    pub watch_points: usize,
    /// Alerts raised since the last reset.
    pub total_alerts: u64,
    /// 1 while an alert is on display, else 0.
    pub active_alerts: u8,
}

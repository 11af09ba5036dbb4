//! Plain data row types written by output backends.

/// One raised alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub alert_id:     u64,
    pub tick:         u64,
    pub raised_at_ms: i64,
    pub mover:        String,
    pub kind:         &'static str,
    pub watch_point:  String,
    pub distance_m:   f64,
    pub severity:     &'static str,
    pub priority:     u8,
}

/// Counters at the end of one running tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub now_ms:        i64,
    pub active_movers: u64,
    pub total_alerts:  u64,
    pub active_alerts: u8,
}

/// One mover's position at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRow {
    pub tick:     u64,
    pub now_ms:   i64,
    pub mover:    String,
    pub lat:      f64,
    pub lon:      f64,
    pub progress: f64,
    pub visible:  bool,
}

//! Outbound notification hook.
//!
//! The simulation never talks to a gateway itself.  A host supplies a
//! [`NotificationRelay`] and wraps it in a [`RelayObserver`], which formats
//! each raised alert and forwards it exactly once.

use wg_alert::ActiveAlert;
use wg_core::Severity;
use wg_registry::Registry;

use crate::SimObserver;

/// Outcome of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent { reference: String },
    Failed { reason: String },
}

/// Per-recipient delivery result returned by a relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub recipient: String,
    pub status:    DeliveryStatus,
}

impl DeliveryReport {
    #[inline]
    pub fn is_sent(&self) -> bool {
        matches!(self.status, DeliveryStatus::Sent { .. })
    }
}

/// A channel that delivers a text message to a fixed contact list.
///
/// Failures are reported per recipient and never fail the caller.
pub trait NotificationRelay {
    fn send(&mut self, message: &str) -> Vec<DeliveryReport>;
}

/// One-line human-readable description of `alert`.
///
/// ```text
/// CRITICAL ALERT: Stripe King (tiger) 0.8 km from Ranthambore Village (380 people)
/// ```
pub fn format_alert_message(alert: &ActiveAlert, registry: &Registry) -> String {
    let (mover, kind) = registry
        .mover(alert.mover)
        .map_or(("unknown mover", "unknown"), |m| (m.label.as_str(), m.kind.as_str()));
    let (place, population) = registry
        .watch_point(alert.watch_point)
        .map_or(("unknown location", 0), |w| (w.label.as_str(), w.population));

    format!(
        "{}: {mover} ({kind}) {:.1} km from {place} ({population} people)",
        alert.severity.title(),
        alert.distance_m / 1000.0,
    )
}

/// Forwards every raised alert at or above `min_severity` to a relay and
/// keeps the delivery reports.
pub struct RelayObserver<R: NotificationRelay> {
    relay:        R,
    min_severity: Severity,
    reports:      Vec<DeliveryReport>,
}

impl<R: NotificationRelay> RelayObserver<R> {
    pub fn new(relay: R) -> Self {
        Self { relay, min_severity: Severity::Low, reports: Vec::new() }
    }

    /// Only forward alerts of at least `severity`.
    pub fn min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Every report collected so far.
    pub fn reports(&self) -> &[DeliveryReport] {
        &self.reports
    }

    /// Drain the collected reports.
    pub fn take_reports(&mut self) -> Vec<DeliveryReport> {
        std::mem::take(&mut self.reports)
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn into_relay(self) -> R {
        self.relay
    }
}

impl<R: NotificationRelay> SimObserver for RelayObserver<R> {
    fn on_alert_raised(&mut self, alert: &ActiveAlert, registry: &Registry) {
        if alert.severity < self.min_severity {
            return;
        }
        let message = format_alert_message(alert, registry);
        let reports = self.relay.send(&message);
        let failed = reports.iter().filter(|r| !r.is_sent()).count();
        if failed > 0 {
            log::warn!("alert {}: {failed} of {} deliveries failed", alert.id, reports.len());
        }
        self.reports.extend(reports);
    }
}

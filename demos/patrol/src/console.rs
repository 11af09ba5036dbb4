//! Console stand-in for an SMS gateway.
//!
//! Prints each message once per contact.  Numbers that do not look like
//! E.164 (`+` followed by digits) are reported as failed, which is how a
//! real gateway rejects them.

use wg_sim::{DeliveryReport, DeliveryStatus, NotificationRelay};

/// Emergency contacts notified by the demo.
pub const CONTACTS: [&str; 3] = ["+919800000001", "+919800000002", "forest-office"];

pub struct ConsoleRelay {
    contacts: Vec<String>,
    sent:     u64,
}

impl ConsoleRelay {
    pub fn new<S: AsRef<str>>(contacts: &[S]) -> Self {
        Self {
            contacts: contacts.iter().map(|c| c.as_ref().to_owned()).collect(),
            sent:     0,
        }
    }

    pub fn sent(&self) -> u64 {
        self.sent
    }
}

fn is_e164(number: &str) -> bool {
    number
        .strip_prefix('+')
        .is_some_and(|digits| (8..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl NotificationRelay for ConsoleRelay {
    fn send(&mut self, message: &str) -> Vec<DeliveryReport> {
        self.contacts
            .iter()
            .map(|recipient| {
                let status = if is_e164(recipient) {
                    self.sent += 1;
                    println!("  [sms → {recipient}] {message}");
                    DeliveryStatus::Sent { reference: format!("console-{:06}", self.sent) }
                } else {
                    DeliveryStatus::Failed { reason: format!("'{recipient}' is not an E.164 number") }
                };
                DeliveryReport { recipient: recipient.clone(), status }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_e164_contact_fails_and_others_are_sent() {
        let mut relay = ConsoleRelay::new(&CONTACTS);
        let reports = relay.send("HIGH ALERT: test");

        assert_eq!(reports.len(), 3);
        assert!(reports[0].is_sent() && reports[1].is_sent());
        assert!(matches!(reports[2].status, DeliveryStatus::Failed { .. }));
        assert_eq!(relay.sent(), 2);
    }
}

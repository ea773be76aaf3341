//! Event handler trait.

use super::types::*;

/// Receives scan lifecycle events. Every method defaults to a no-op so
/// handlers implement only what they care about.
pub trait ScanEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}

    fn on_rule_fault(&self, _event: &RuleFaultEvent) {}

    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
}

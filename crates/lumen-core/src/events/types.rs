//! Event payloads.

use crate::model::Surface;

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub app_name: String,
    pub surface: Surface,
    /// Rules applicable to the scanned surface.
    pub rule_count: usize,
}

/// Payload for `on_rule_fault`.
#[derive(Debug, Clone)]
pub struct RuleFaultEvent {
    pub rule_id: String,
    pub node_id: String,
    pub message: String,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub nodes_visited: usize,
    pub findings: usize,
    pub faults: usize,
    pub cancelled: bool,
    pub duration_ms: u64,
}

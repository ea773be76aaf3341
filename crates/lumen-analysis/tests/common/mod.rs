//! Shared helpers for lumen-analysis integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lumen_analysis::Rule;
use lumen_core::events::{RuleFaultEvent, ScanCompleteEvent, ScanEventHandler, ScanStartedEvent};
use lumen_core::{EvaluationContext, Finding, Severity, UiNode};

/// Root of the workspace `test-fixtures` folder, found by walking up from the crate.
pub fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!("Could not find test-fixtures directory from CARGO_MANIFEST_DIR={manifest_dir}");
        }
    }
    path.join("test-fixtures")
}

pub fn load_app(name: &str) -> UiNode {
    let path = fixtures_root().join("apps").join(name);
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    UiNode::from_json(&json)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn ids(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.id.as_str()).collect()
}

/// Reports one finding on every node, tagged with its own id.
pub struct EveryNode(pub &'static str);

impl Rule for EveryNode {
    fn id(&self) -> &'static str { self.0 }
    fn description(&self) -> &'static str { "test rule matching every node" }
    fn severity(&self) -> Severity { Severity::Low }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        vec![Finding::builder(self.0, Severity::Low, node, ctx).message("seen").build()]
    }
}

/// Panics on one node id, reports nothing elsewhere.
pub struct PanicsOn(pub &'static str);

impl Rule for PanicsOn {
    fn id(&self) -> &'static str { "PANICS" }
    fn description(&self) -> &'static str { "test rule that faults" }
    fn severity(&self) -> Severity { Severity::High }

    fn evaluate(&self, node: &UiNode, _ctx: &EvaluationContext) -> Vec<Finding> {
        if node.id == self.0 {
            panic!("malformed input on {}", node.id);
        }
        Vec::new()
    }
}

#[derive(Default)]
pub struct RecordingHandler {
    pub started: AtomicUsize,
    pub faults: AtomicUsize,
    pub completed: AtomicUsize,
}

impl ScanEventHandler for RecordingHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_rule_fault(&self, _event: &RuleFaultEvent) {
        self.faults.fetch_add(1, Ordering::SeqCst);
    }

    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn recording() -> Arc<RecordingHandler> {
    Arc::new(RecordingHandler::default())
}

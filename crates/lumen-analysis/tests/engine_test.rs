//! Scan engine behavior: ordering, surface filtering, fault isolation,
//! identity guard, parallel determinism, cancellation, events.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use lumen_analysis::{Rule, RuleCatalog, ScanEngine};
use lumen_core::errors::{EvaluationError, LumenErrorCode, ScanError};
use lumen_core::{Cancellable, CancellationToken, EvaluationContext, Finding, Severity, Surface, UiNode};

use common::{ids, EveryNode, PanicsOn};

fn ctx() -> EvaluationContext {
    EvaluationContext::new(Surface::CanvasApp, "Expenses")
}

fn tree() -> UiNode {
    UiNode::new("root", "Screen")
        .with_child(UiNode::new("A", "Label"))
        .with_child(UiNode::new("B", "Label"))
}

#[test]
fn findings_follow_pre_order_then_catalog_order() {
    let catalog = RuleCatalog::new(vec![Arc::new(EveryNode("FIRST")), Arc::new(EveryNode("SECOND"))]);
    let outcome = ScanEngine::new(catalog).scan(&tree(), &ctx());

    assert_eq!(
        ids(&outcome.findings),
        vec!["FIRST:root", "SECOND:root", "FIRST:A", "SECOND:A", "FIRST:B", "SECOND:B"]
    );
    assert_eq!(outcome.nodes_visited, 3);
    assert!(!outcome.cancelled);
}

#[test]
fn single_rule_sees_root_then_children() {
    let catalog = RuleCatalog::new(vec![Arc::new(EveryNode("ONLY"))]);
    let outcome = ScanEngine::new(catalog).scan(&tree(), &ctx());
    assert_eq!(ids(&outcome.findings), vec!["ONLY:root", "ONLY:A", "ONLY:B"]);
}

#[test]
fn rule_fault_is_isolated() {
    let catalog = RuleCatalog::new(vec![
        Arc::new(EveryNode("BEFORE")),
        Arc::new(PanicsOn("A")),
        Arc::new(EveryNode("AFTER")),
    ]);
    let outcome = ScanEngine::new(catalog).scan(&tree(), &ctx());

    assert_eq!(
        ids(&outcome.findings),
        vec!["BEFORE:root", "AFTER:root", "BEFORE:A", "AFTER:A", "BEFORE:B", "AFTER:B"]
    );
    assert_eq!(outcome.faults.len(), 1);
    let fault = &outcome.faults[0];
    assert_eq!(fault.rule_id, "PANICS");
    assert_eq!(fault.node_id, "A");
    assert!(matches!(
        &fault.error,
        EvaluationError::RulePanic { message } if message.contains("malformed input on A")
    ));
    assert_eq!(fault.error.error_code(), "RULE_FAULT");
    assert!(!outcome.is_clean());
}

#[test]
fn surface_filter_is_applied() {
    struct PortalOnly;
    impl Rule for PortalOnly {
        fn id(&self) -> &'static str { "PORTAL_ONLY" }
        fn description(&self) -> &'static str { "portal-only test rule" }
        fn severity(&self) -> Severity { Severity::Low }
        fn applies_to(&self) -> Option<&'static [Surface]> { Some(&[Surface::PortalPage]) }
        fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
            vec![Finding::builder(self.id(), Severity::Low, node, ctx).build()]
        }
    }

    let engine = ScanEngine::new(RuleCatalog::new(vec![Arc::new(PortalOnly)]));
    assert!(engine.scan(&tree(), &ctx()).findings.is_empty());

    let portal = EvaluationContext::new(Surface::PortalPage, "Portal");
    assert_eq!(engine.scan(&tree(), &portal).findings.len(), 3);
}

#[test]
fn shared_subtree_is_scanned_once() {
    let shared = Arc::new(UiNode::new("shared", "Label"));
    let root = UiNode::new("root", "Screen")
        .with_shared_child(shared.clone())
        .with_shared_child(shared);
    let outcome = ScanEngine::new(RuleCatalog::new(vec![Arc::new(EveryNode("R"))])).scan(&root, &ctx());
    assert_eq!(ids(&outcome.findings), vec!["R:root", "R:shared"]);
    assert_eq!(outcome.nodes_visited, 2);
}

fn wide_tree(width: usize) -> UiNode {
    (0..width).fold(UiNode::new("root", "Screen"), |root, i| {
        root.with_child(
            UiNode::new(format!("grp{i}"), "Container")
                .with_child(
                    UiNode::new(format!("lbl{i}"), "Label")
                        .with_property("Color", "Color.Gray")
                        .with_property("Fill", "White"),
                )
                .with_child(UiNode::new(format!("lnk{i}"), "Link").with_text("click here")),
        )
    })
}

#[test]
fn parallel_scan_matches_sequential_order() {
    let root = wide_tree(64);
    let sequential = ScanEngine::new(RuleCatalog::all()).scan(&root, &ctx());
    let parallel = ScanEngine::new(RuleCatalog::all())
        .with_threads(4)
        .unwrap()
        .scan(&root, &ctx());
    let global_pool = ScanEngine::new(RuleCatalog::all())
        .with_parallelism(true)
        .scan(&root, &ctx());

    assert_eq!(sequential.findings.len(), 128);
    assert_eq!(sequential.findings, parallel.findings);
    assert_eq!(sequential.findings, global_pool.findings);
}

#[test]
fn repeated_scans_are_identical() {
    let engine = ScanEngine::new(RuleCatalog::all());
    let root = wide_tree(8);
    assert_eq!(engine.scan(&root, &ctx()).findings, engine.scan(&root, &ctx()).findings);
}

/// Cancels the shared token when it reaches a given node.
struct CancelAt {
    node_id: &'static str,
    token: CancellationToken,
}

impl Rule for CancelAt {
    fn id(&self) -> &'static str { "CANCEL_AT" }
    fn description(&self) -> &'static str { "cancels the scan" }
    fn severity(&self) -> Severity { Severity::Low }
    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        if node.id == self.node_id {
            self.token.cancel();
        }
        vec![Finding::builder(self.id(), Severity::Low, node, ctx).build()]
    }
}

#[test]
fn cancellation_returns_partial_prefix() {
    let token = CancellationToken::new();
    let catalog = RuleCatalog::new(vec![Arc::new(CancelAt {
        node_id: "A",
        token: token.clone(),
    })]);
    let outcome = ScanEngine::new(catalog)
        .with_cancellation(token)
        .scan(&tree(), &ctx());

    assert!(outcome.cancelled);
    assert_eq!(outcome.nodes_visited, 2);
    assert_eq!(ids(&outcome.findings), vec!["CANCEL_AT:root", "CANCEL_AT:A"]);

    let err = outcome.into_result().unwrap_err();
    assert!(matches!(err, ScanError::Cancelled { nodes_visited: 2 }));
    assert!(err.coded_string().starts_with("[CANCELLED]"));
}

#[test]
fn cancelled_before_start_visits_nothing() {
    let token = CancellationToken::new();
    token.cancel();
    let outcome = ScanEngine::new(RuleCatalog::all())
        .with_parallelism(true)
        .with_cancellation(token)
        .scan(&wide_tree(4), &ctx());
    assert!(outcome.cancelled);
    assert_eq!(outcome.nodes_visited, 0);
    assert!(outcome.findings.is_empty());
}

#[test]
fn events_are_emitted_once_per_scan_and_per_fault() {
    let handler = common::recording();
    let catalog = RuleCatalog::new(vec![Arc::new(PanicsOn("A")), Arc::new(PanicsOn("B"))]);
    let outcome = ScanEngine::new(catalog)
        .with_event_handler(handler.clone())
        .scan(&tree(), &ctx());

    assert_eq!(outcome.faults.len(), 2);
    assert_eq!(handler.started.load(Ordering::SeqCst), 1);
    assert_eq!(handler.faults.load(Ordering::SeqCst), 2);
    assert_eq!(handler.completed.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_catalog_scans_cleanly() {
    let outcome = ScanEngine::new(RuleCatalog::empty()).scan(&tree(), &ctx());
    assert!(outcome.is_clean());
    assert_eq!(outcome.nodes_visited, 3);
    assert!(outcome.into_result().is_ok());
}

//! Tests for scan event dispatch.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lumen_core::events::*;
use lumen_core::Surface;

#[derive(Default)]
struct Counting {
    started: AtomicUsize,
    faults: AtomicUsize,
}

impl ScanEventHandler for Counting {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_rule_fault(&self, _event: &RuleFaultEvent) {
        self.faults.fetch_add(1, Ordering::SeqCst);
    }
}

struct Exploding;

impl ScanEventHandler for Exploding {
    fn on_rule_fault(&self, _event: &RuleFaultEvent) {
        panic!("handler bug");
    }
}

fn fault_event() -> RuleFaultEvent {
    RuleFaultEvent {
        rule_id: "CONTRAST".to_string(),
        node_id: "lbl1".to_string(),
        message: "boom".to_string(),
    }
}

#[test]
fn empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_rule_fault(&fault_event());
}

#[test]
fn events_reach_every_handler() {
    let counting = Arc::new(Counting::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(counting.clone());

    dispatcher.emit_scan_started(&ScanStartedEvent {
        app_name: "Expenses".to_string(),
        surface: Surface::CanvasApp,
        rule_count: 8,
    });
    dispatcher.emit_rule_fault(&fault_event());
    dispatcher.emit_scan_complete(&ScanCompleteEvent {
        nodes_visited: 3,
        findings: 1,
        faults: 1,
        cancelled: false,
        duration_ms: 0,
    });

    assert_eq!(counting.started.load(Ordering::SeqCst), 1);
    assert_eq!(counting.faults.load(Ordering::SeqCst), 1);
}

#[test]
fn panicking_handler_does_not_starve_later_handlers() {
    let counting = Arc::new(Counting::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Exploding));
    dispatcher.register(counting.clone());

    dispatcher.emit_rule_fault(&fault_event());

    assert_eq!(counting.faults.load(Ordering::SeqCst), 1);
}

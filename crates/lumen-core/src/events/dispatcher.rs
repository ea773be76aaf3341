//! Synchronous event dispatch.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use super::handler::ScanEventHandler;
use super::types::*;

/// Fans events out to registered handlers. With no handlers, emitting is a
/// loop over an empty `Vec`.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ScanEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn ScanEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn ScanEventHandler)>(&self, f: F) {
        for (index, handler) in self.handlers.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| f(handler.as_ref())));
            if result.is_err() {
                tracing::warn!(handler = index, "scan event handler panicked");
            }
        }
    }

    pub fn emit_scan_started(&self, event: &ScanStartedEvent) {
        self.emit(|h| h.on_scan_started(event));
    }

    pub fn emit_rule_fault(&self, event: &RuleFaultEvent) {
        self.emit(|h| h.on_rule_fault(event));
    }

    pub fn emit_scan_complete(&self, event: &ScanCompleteEvent) {
        self.emit(|h| h.on_scan_complete(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

//! Per-scan evaluation context.

use serde::{Deserialize, Serialize};

use super::node::UiNode;
use super::surface::Surface;

/// Scan-level data handed to every rule invocation. Created once per scan and
/// never mutated while the scan runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationContext {
    pub surface: Surface,
    pub app_name: String,
    /// Current screen or page, used when a node carries no screen of its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
}

impl EvaluationContext {
    pub fn new(surface: Surface, app_name: impl Into<String>) -> Self {
        Self {
            surface,
            app_name: app_name.into(),
            screen: None,
        }
    }

    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(screen.into());
        self
    }

    /// Screen a finding on `node` is attributed to: the node's own screen,
    /// else the context screen, else none.
    pub fn screen_for<'a>(&'a self, node: &'a UiNode) -> Option<&'a str> {
        node.screen().or(self.screen.as_deref())
    }
}

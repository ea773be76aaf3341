//! The contract every diagnostic rule implements.

use lumen_core::{EvaluationContext, Finding, Severity, Surface, UiNode};

/// A single, stateless accessibility check.
///
/// `evaluate` inspects one node and returns every finding for it, recomputed
/// from scratch on each call. It must not panic on missing or mistyped
/// properties; indeterminate input yields no finding.
pub trait Rule: Send + Sync {
    /// Stable short code, e.g. `CONTRAST`.
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Default severity. Individual findings may be raised or lowered.
    fn severity(&self) -> Severity;

    /// Surfaces this rule runs on; `None` means every surface.
    fn applies_to(&self) -> Option<&'static [Surface]> {
        None
    }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding>;

    fn is_applicable(&self, surface: Surface) -> bool {
        self.applies_to()
            .map_or(true, |surfaces| surfaces.contains(&surface))
    }
}

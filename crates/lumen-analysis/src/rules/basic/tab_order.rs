//! TAB_ORDER: positive tab indexes override the natural focus order.

use lumen_core::{EvaluationContext, Finding, Severity, Surface, UiNode, WcagCriterion};

use crate::matching::properties;
use crate::rules::Rule;

const SURFACES: &[Surface] = &[Surface::CanvasApp, Surface::PortalPage];

pub struct TabOrderRule;

impl Rule for TabOrderRule {
    fn id(&self) -> &'static str { "TAB_ORDER" }
    fn description(&self) -> &'static str { "Focus order should follow the visual reading order" }
    fn severity(&self) -> Severity { Severity::Low }
    fn applies_to(&self) -> Option<&'static [Surface]> { Some(SURFACES) }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        let Some(index) = properties::number(node, "TabIndex") else {
            return Vec::new();
        };
        if index <= 0.0 {
            return Vec::new();
        }

        vec![Finding::builder(self.id(), self.severity(), node, ctx)
            .sub_type("POSITIVE_INDEX")
            .message(format!("'{}' sets TabIndex to {index}", node.id))
            .rationale("A positive tab index moves the control ahead of the layout order, which disorients keyboard users.")
            .suggested_fix("Use TabIndex 0 (or -1 to remove from focus) and order controls in the layout instead.")
            .criterion(WcagCriterion::FocusOrder)
            .build()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_index_is_flagged() {
        let ctx = EvaluationContext::new(Surface::CanvasApp, "Expenses");
        let node = UiNode::new("btn1", "Button").with_property("TabIndex", 3);
        let findings = TabOrderRule.evaluate(&node, &ctx);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].issue_type, "TAB_ORDER_POSITIVE_INDEX");
    }

    #[test]
    fn zero_negative_and_garbage_are_ignored() {
        let ctx = EvaluationContext::new(Surface::CanvasApp, "Expenses");
        for value in ["0", "-1", "first"] {
            let node = UiNode::new("btn1", "Button").with_property("TabIndex", value);
            assert!(TabOrderRule.evaluate(&node, &ctx).is_empty(), "{value}");
        }
    }

    #[test]
    fn not_applicable_to_model_driven_apps() {
        assert!(TabOrderRule.is_applicable(Surface::PortalPage));
        assert!(!TabOrderRule.is_applicable(Surface::ModelDrivenApp));
    }
}

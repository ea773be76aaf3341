//! ALT_TEXT: images need a text alternative unless they are decorative.

use lumen_core::{EvaluationContext, Finding, Severity, UiNode, WcagCriterion};

use crate::matching::properties;
use crate::matching::text::enum_member;
use crate::rules::control_types;
use crate::rules::Rule;

/// Properties that carry an image's text alternative.
pub const ALT_TEXT_KEYS: &[&str] = &["AltText", "Alt", "AccessibleLabel", "AriaLabel"];

const DECORATIVE_ROLES: &[&str] = &["presentation", "none"];

pub struct AltTextRule;

impl Rule for AltTextRule {
    fn id(&self) -> &'static str { "ALT_TEXT" }
    fn description(&self) -> &'static str { "Images must have a text alternative unless purely decorative" }
    fn severity(&self) -> Severity { Severity::High }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        if !node.is_type(control_types::IMAGE) || is_decorative(node) {
            return Vec::new();
        }
        if properties::has_any(node, ALT_TEXT_KEYS) {
            return Vec::new();
        }

        vec![Finding::builder(self.id(), self.severity(), node, ctx)
            .sub_type("MISSING")
            .message(format!("Image '{}' has no alternative text", node.id))
            .rationale("Screen reader users receive no information from an image without a text alternative.")
            .suggested_fix("Set AccessibleLabel to describe the image, or mark it decorative if it conveys nothing.")
            .criterion(WcagCriterion::NonTextContent)
            .build()]
    }
}

fn is_decorative(node: &UiNode) -> bool {
    if properties::is_truthy(node, "Decorative") {
        return true;
    }
    properties::first_text(node, &["Role", "AccessibleRole"])
        .is_some_and(|role| {
            DECORATIVE_ROLES
                .iter()
                .any(|r| enum_member(&role).eq_ignore_ascii_case(r))
        })
}

//! ACCESSIBLE_LABEL: interactive controls need an accessible name.

use lumen_core::{EvaluationContext, Finding, Severity, UiNode, WcagCriterion};

use crate::matching::properties::{self, TextSource};
use crate::rules::control_types;
use crate::rules::Rule;

const LABEL_KEYS: &[&str] = &["AccessibleLabel", "AriaLabel", "aria-label", "Label", "LabelText"];

pub struct AccessibleLabelRule;

impl Rule for AccessibleLabelRule {
    fn id(&self) -> &'static str { "ACCESSIBLE_LABEL" }
    fn description(&self) -> &'static str { "Interactive controls must expose an accessible name" }
    fn severity(&self) -> Severity { Severity::Medium }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        if !node.is_type(control_types::INTERACTIVE) {
            return Vec::new();
        }
        if properties::has_any(node, LABEL_KEYS) {
            return Vec::new();
        }
        if node.is_type(control_types::BUTTON_LIKE)
            && properties::resolve_text(node, &[TextSource::Text, TextSource::Property("Text")]).is_some()
        {
            return Vec::new();
        }

        vec![Finding::builder(self.id(), self.severity(), node, ctx)
            .sub_type("MISSING")
            .message(format!(
                "{} '{}' has no accessible label",
                node.control_type, node.id
            ))
            .rationale("Assistive technology announces interactive controls by name; unnamed controls are unusable without sight.")
            .suggested_fix("Set AccessibleLabel to a short description of the control's purpose.")
            .criterion(WcagCriterion::NameRoleValue)
            .build()]
    }
}

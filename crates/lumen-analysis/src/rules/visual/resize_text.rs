//! RESIZE_TEXT: text must survive being scaled to 200% without loss.

use std::sync::LazyLock;

use regex::Regex;

use lumen_core::{EvaluationContext, Finding, Severity, Surface, UiNode, WcagCriterion};

use crate::matching::patterns;
use crate::matching::properties;
use crate::matching::text::enum_member;
use crate::rules::control_types;
use crate::rules::Rule;

const SURFACES: &[Surface] = &[Surface::CanvasApp, Surface::PortalPage];

const RESPONSIVE_KEYS: &[&str] = &["AutoHeight", "AutoSize", "Responsive", "ResponsiveFontSize", "ScaleText"];
const TRUNCATION_KEYS: &[&str] = &["Truncate", "Truncation", "TextOverflow", "Ellipsis"];
const FALLBACK_KEYS: &[&str] = &["Tooltip", "Title", "HoverText"];
const HEIGHT_KEYS: &[&str] = &["Height", "MaxHeight"];

static PIXEL_LENGTH: LazyLock<Option<Regex>> =
    LazyLock::new(|| patterns::compile(r"(?i)^\s*\d+(\.\d+)?\s*px\s*$"));

pub struct ResizeTextRule;

impl Rule for ResizeTextRule {
    fn id(&self) -> &'static str { "RESIZE_TEXT" }
    fn description(&self) -> &'static str { "Text must be resizable up to 200% without loss of content" }
    fn severity(&self) -> Severity { Severity::Medium }
    fn applies_to(&self) -> Option<&'static [Surface]> { Some(SURFACES) }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        let mut findings = Vec::new();
        let is_text = node.is_type(control_types::TEXT);

        if is_text && has_pixel_font(node) && !properties::any_truthy(node, RESPONSIVE_KEYS) {
            findings.push(
                self.finding(node, ctx, "FIXED_FONT", Severity::Low)
                    .message(format!("'{}' uses a fixed pixel font size", node.id))
                    .rationale("Pixel font sizes may not scale with user text-size preferences.")
                    .suggested_fix("Use relative units or enable a responsive scaling property.")
                    .build(),
            );
        }

        if node.is_type(control_types::CONTAINER) && clips_overflow(node) && has_fixed_height(node) {
            findings.push(
                self.finding(node, ctx, "OVERFLOW_CLIP", Severity::Medium)
                    .message(format!("Container '{}' hides overflow at a fixed height", node.id))
                    .rationale("Enlarged text grows past a fixed height and is cut off when overflow is hidden.")
                    .suggested_fix("Let the container grow with its content or allow scrolling.")
                    .build(),
            );
        }

        if is_text && truncates(node) && !properties::has_any(node, FALLBACK_KEYS) {
            findings.push(
                self.finding(node, ctx, "TRUNCATION", Severity::Medium)
                    .message(format!("Text in '{}' is truncated with no tooltip fallback", node.id))
                    .rationale("Truncated text hides content once it is enlarged, with no other way to read it.")
                    .suggested_fix("Allow wrapping, or expose the full text through a Tooltip.")
                    .build(),
            );
        }

        findings
    }
}

impl ResizeTextRule {
    fn finding<'a>(
        &self,
        node: &'a UiNode,
        ctx: &'a EvaluationContext,
        sub_type: &'a str,
        severity: Severity,
    ) -> lumen_core::FindingBuilder<'a> {
        Finding::builder(self.id(), severity, node, ctx)
            .sub_type(sub_type)
            .criterion(WcagCriterion::ResizeText)
    }
}

fn has_pixel_font(node: &UiNode) -> bool {
    properties::first_text(node, &["FontSize"])
        .is_some_and(|size| patterns::matches(&PIXEL_LENGTH, &size))
}

fn clips_overflow(node: &UiNode) -> bool {
    properties::first_text(node, &["Overflow"]).is_some_and(|overflow| {
        let member = enum_member(&overflow);
        member.eq_ignore_ascii_case("hidden") || member.eq_ignore_ascii_case("clip")
    })
}

/// A positive numeric or pixel height. Relative and formula heights are not fixed.
fn has_fixed_height(node: &UiNode) -> bool {
    HEIGHT_KEYS.iter().any(|key| {
        properties::number(node, key).is_some_and(|h| h > 0.0)
            || properties::first_text(node, &[*key]).is_some_and(|h| patterns::matches(&PIXEL_LENGTH, &h))
    })
}

fn truncates(node: &UiNode) -> bool {
    TRUNCATION_KEYS.iter().any(|key| {
        node.property(key).is_some_and(|value| {
            let member = value.as_text();
            let member = enum_member(&member);
            value.is_truthy()
                || member.eq_ignore_ascii_case("ellipsis")
                || member.eq_ignore_ascii_case("clip")
        })
    })
}

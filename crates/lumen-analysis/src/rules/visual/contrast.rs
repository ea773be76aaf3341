//! CONTRAST: text must meet the WCAG minimum contrast ratio against its
//! background.

use std::sync::LazyLock;

use regex::Regex;

use lumen_core::{EvaluationContext, Finding, Severity, UiNode, WcagCriterion};

use crate::matching::color::{contrast_ratio, Rgba};
use crate::matching::patterns;
use crate::matching::properties;
use crate::rules::control_types;
use crate::rules::Rule;

pub const DEFAULT_FONT_SIZE: f64 = 13.0;
pub const NORMAL_TEXT_RATIO: f64 = 4.5;
pub const LARGE_TEXT_RATIO: f64 = 3.0;

/// Properties that hold a color, scanned for state conveyed by color alone.
const COLOR_KEYS: &[&str] = &[
    "Color",
    "Fill",
    "BorderColor",
    "HoverColor",
    "HoverFill",
    "PressedColor",
    "PressedFill",
    "DisabledColor",
    "DisabledFill",
    "FocusedBorderColor",
];

static CONDITIONAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| patterns::compile(r"(?i)\b(if|switch)\s*\("));

pub struct ContrastRule;

impl Rule for ContrastRule {
    fn id(&self) -> &'static str { "CONTRAST" }
    fn description(&self) -> &'static str { "Text must have sufficient contrast against its background" }
    fn severity(&self) -> Severity { Severity::High }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        if !node.is_type(control_types::TEXT) {
            return Vec::new();
        }
        let mut findings = Vec::new();

        let foreground = properties::first_text(node, &["Color"]).and_then(|v| Rgba::parse(&v));
        let background = properties::first_text(node, &["Fill"]).and_then(|v| Rgba::parse(&v));

        if let (Some(fg), Some(bg)) = (foreground, background) {
            let ratio = contrast_ratio(&fg, &bg);
            let large = is_large_text(node);
            let required = required_ratio(large);
            if is_insufficient(ratio, large) {
                findings.push(
                    Finding::builder(self.id(), Severity::High, node, ctx)
                        .sub_type("INSUFFICIENT")
                        .message(format!(
                            "Contrast ratio {ratio:.2}:1 is below the required {required}:1 for {} text",
                            if large { "large" } else { "normal" }
                        ))
                        .rationale("Low-contrast text is hard to read for users with low vision or color deficiencies.")
                        .suggested_fix(format!("Adjust Color or Fill to reach at least {required}:1."))
                        .criterion(WcagCriterion::ContrastMinimum)
                        .build(),
                );
            }
        }

        if let Some(key) = COLOR_KEYS.iter().find(|key| {
            properties::first_text(node, &[**key]).is_some_and(|v| patterns::matches(&CONDITIONAL, &v))
        }) {
            findings.push(
                Finding::builder(self.id(), Severity::Medium, node, ctx)
                    .sub_type("COLOR_ONLY_STATE")
                    .message(format!("{key} changes with a condition; state may be conveyed by color alone"))
                    .rationale("Users who cannot perceive color miss state that is shown only through a color change.")
                    .suggested_fix("Pair the color change with text, an icon, or another non-color cue.")
                    .criterion(WcagCriterion::UseOfColor)
                    .build(),
            );
        }

        if background.is_some_and(|bg| bg.a < 0.5) {
            findings.push(
                Finding::builder(self.id(), Severity::Low, node, ctx)
                    .sub_type("TRANSPARENT_BACKGROUND")
                    .message("Background is mostly transparent; effective contrast depends on what lies beneath")
                    .rationale("Contrast against a transparent fill cannot be verified statically.")
                    .suggested_fix("Use an opaque Fill or verify contrast against every underlying surface.")
                    .criterion(WcagCriterion::ContrastMinimum)
                    .build(),
            );
        }

        findings
    }
}

/// Size 18 or more, or 14 or more when bold.
pub fn is_large_text(node: &UiNode) -> bool {
    let size = properties::number(node, "Size").unwrap_or(DEFAULT_FONT_SIZE);
    let bold = properties::first_text(node, &["FontWeight"]).is_some_and(|weight| {
        let weight = weight.to_ascii_lowercase();
        weight.contains("bold") || weight.contains("semibold")
    });
    size >= 18.0 || (size >= 14.0 && bold)
}

pub fn required_ratio(large_text: bool) -> f64 {
    if large_text {
        LARGE_TEXT_RATIO
    } else {
        NORMAL_TEXT_RATIO
    }
}

/// Strictly below the requirement; a ratio exactly at it passes.
pub fn is_insufficient(ratio: f64, large_text: bool) -> bool {
    ratio < required_ratio(large_text)
}

//! LINK_PURPOSE: link text must describe where the link goes.
//!
//! Each node is judged on its own. A bare action word such as "Edit" is only
//! reported when the link carries no contextual label; sibling links are never
//! compared.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;

use lumen_core::{EvaluationContext, Finding, Severity, UiNode, WcagCriterion};

use crate::matching::properties::{self, TextSource};
use crate::matching::text::{enum_member, normalize_phrase};
use crate::matching::patterns;
use crate::rules::control_types;
use crate::rules::Rule;

const NAVIGATION_KEYS: &[&str] = &["Href", "Url", "NavigateUrl", "Link"];

/// Where a link's visible text is read from, in order.
const TEXT_CHAIN: &[TextSource] = &[
    TextSource::Text,
    TextSource::Name,
    TextSource::Property("Text"),
    TextSource::Property("Label"),
    TextSource::Property("Content"),
    TextSource::Property("DisplayText"),
    TextSource::Property("Value"),
];

/// Properties that give a link an accessible name beyond its visible text.
const LABEL_KEYS: &[&str] = &["AccessibleLabel", "AriaLabel", "aria-label", "Title", "Tooltip"];

/// Labels that also tie an action word to its target.
const CONTEXT_KEYS: &[&str] = &[
    "AccessibleLabel",
    "AriaLabel",
    "aria-label",
    "AriaDescribedBy",
    "aria-describedby",
    "Title",
    "Tooltip",
];

static GENERIC_PHRASES: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "click here",
        "click",
        "here",
        "click this",
        "this",
        "this link",
        "link",
        "read more",
        "more",
        "learn more",
        "see more",
        "more info",
        "more information",
        "info",
        "details",
        "go",
        "continue",
        "page",
    ]
    .into_iter()
    .collect()
});

static ACTION_WORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    ["edit", "delete", "view", "open", "select", "remove"]
        .into_iter()
        .collect()
});

static BARE_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| patterns::compile(r"(?i)^(https?://|ftp://|www\.)\S+$"));

pub struct LinkPurposeRule;

impl Rule for LinkPurposeRule {
    fn id(&self) -> &'static str { "LINK_PURPOSE" }
    fn description(&self) -> &'static str { "The purpose of each link must be clear from its text or label" }
    fn severity(&self) -> Severity { Severity::Medium }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        if !is_link(node) {
            return Vec::new();
        }

        let labelled = has_descriptive_label(node);
        let Some(text) = properties::resolve_text(node, TEXT_CHAIN) else {
            if labelled {
                return Vec::new();
            }
            return vec![self
                .finding(node, ctx, "EMPTY", Severity::High)
                .message(format!("Link '{}' has no text or accessible label", node.id))
                .rationale("A link without a name is announced only as \"link\", giving no hint of its destination.")
                .suggested_fix("Give the link visible text or an AccessibleLabel naming its destination.")
                .build()];
        };

        let mut findings = Vec::new();
        let phrase = normalize_phrase(&text);

        if !labelled && GENERIC_PHRASES.contains(phrase.as_str()) {
            findings.push(
                self.finding(node, ctx, "GENERIC", Severity::Medium)
                    .message(format!("Link text '{text}' does not describe its destination"))
                    .rationale("Screen reader users often navigate by a list of links, where generic text is meaningless.")
                    .suggested_fix("Replace the text with a description of the destination, or add an AccessibleLabel.")
                    .build(),
            );
        }

        if patterns::matches(&BARE_URL, text.trim()) {
            findings.push(
                self.finding(node, ctx, "URL_TEXT", Severity::Low)
                    .message(format!("Link text is a bare URL: {text}"))
                    .rationale("URLs are read character by character and rarely describe the destination.")
                    .suggested_fix("Use the page or document title as the link text.")
                    .build(),
            );
        }

        if !labelled && text.trim().chars().count() == 1 {
            findings.push(
                self.finding(node, ctx, "SINGLE_CHAR", Severity::Medium)
                    .message(format!("Link text '{text}' is a single character"))
                    .rationale("Single-character links are hard to activate and convey no purpose when read aloud.")
                    .suggested_fix("Use descriptive text or add an AccessibleLabel.")
                    .build(),
            );
        }

        if ACTION_WORDS.contains(phrase.as_str()) && !properties::has_any(node, CONTEXT_KEYS) {
            findings.push(
                self.finding(node, ctx, "AMBIGUOUS_ACTION", Severity::Low)
                    .message(format!("Link text '{text}' does not say what it acts on"))
                    .rationale("Repeated action links such as \"Edit\" are indistinguishable out of context.")
                    .suggested_fix("Add an AccessibleLabel naming the target, e.g. \"Edit invoice 1042\".")
                    .build(),
            );
        }

        findings
    }
}

impl LinkPurposeRule {
    fn finding<'a>(
        &self,
        node: &'a UiNode,
        ctx: &'a EvaluationContext,
        sub_type: &'a str,
        severity: Severity,
    ) -> lumen_core::FindingBuilder<'a> {
        Finding::builder(self.id(), severity, node, ctx)
            .sub_type(sub_type)
            .criterion(WcagCriterion::LinkPurposeInContext)
    }
}

/// Link by type, by declared role, or by carrying a navigation target.
pub fn is_link(node: &UiNode) -> bool {
    if node.is_type(control_types::LINK) {
        return true;
    }
    let role_is_link = properties::first_text(node, &["Role", "AccessibleRole"])
        .is_some_and(|role| enum_member(&role).eq_ignore_ascii_case("link"));
    role_is_link || properties::has_any(node, NAVIGATION_KEYS)
}

/// A label counts only when it is not itself generic.
fn has_descriptive_label(node: &UiNode) -> bool {
    LABEL_KEYS.iter().any(|key| {
        properties::first_text(node, &[*key])
            .is_some_and(|label| !GENERIC_PHRASES.contains(normalize_phrase(&label).as_str()))
    })
}

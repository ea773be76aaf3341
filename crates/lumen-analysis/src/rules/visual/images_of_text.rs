//! IMAGES_OF_TEXT: text should be rendered as text, not baked into images.
//!
//! Sub-checks run in a fixed order and each reports at most once per node.
//! A matching control name short-circuits the filename check. Logos are
//! exempt from the name and filename checks only.

use std::sync::LazyLock;

use regex::Regex;

use lumen_core::{EvaluationContext, Finding, Severity, UiNode, WcagCriterion};

use crate::matching::keywords::KeywordTable;
use crate::matching::patterns;
use crate::matching::properties;
use crate::matching::text::word_count;
use crate::rules::basic::alt_text::ALT_TEXT_KEYS;
use crate::rules::control_types;
use crate::rules::Rule;

/// Properties holding the image source, in lookup order.
const SOURCE_KEYS: &[&str] = &["Image", "Source", "Src", "ImageSource", "Url"];

const IMAGE_KIND_KEYS: &[&str] = &["ImageType", "ImageKind", "Category"];

/// Alt text longer than this many words suggests the image is mostly text.
pub const LONG_ALT_TEXT_WORDS: usize = 10;

static TEXT_NAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    patterns::compile(r"(?i)(banner|header|heading|headline|title|caption|slogan|tagline|quote|promo|text)")
});

static TEXT_FILENAME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    patterns::compile(
        r"(?i)(?:^|[/\\])[^/\\?#]*(banner|header|heading|headline|title|caption|slogan|tagline|quote|promo|text)[^/\\?#]*\.(png|jpe?g|gif|bmp|webp|tiff?)(?:[?#].*)?$",
    )
});

static TEXT_KIND: LazyLock<Option<Regex>> =
    LazyLock::new(|| patterns::compile(r"(?i)(text|banner|header)"));

static LOGO_WORDS: LazyLock<Option<KeywordTable<()>>> = LazyLock::new(|| {
    KeywordTable::new(vec![((), vec!["logo", "brand", "trademark", "wordmark", "company", "icon"])])
        .map_err(|e| tracing::error!(error = %e, "logo keyword table failed to build"))
        .ok()
});

pub struct ImagesOfTextRule;

impl Rule for ImagesOfTextRule {
    fn id(&self) -> &'static str { "IMAGES_OF_TEXT" }
    fn description(&self) -> &'static str { "Use real text rather than images of text" }
    fn severity(&self) -> Severity { Severity::Medium }

    fn evaluate(&self, node: &UiNode, ctx: &EvaluationContext) -> Vec<Finding> {
        if !node.is_type(control_types::IMAGE) {
            return Vec::new();
        }

        let source = properties::first_text(node, SOURCE_KEYS);
        let alt = properties::first_text(node, ALT_TEXT_KEYS);
        let logo = [node.name.as_deref(), source.as_deref(), alt.as_deref()]
            .into_iter()
            .flatten()
            .any(is_logo_text);

        let mut findings = Vec::new();

        let name_hit = !logo
            && node
                .name
                .as_deref()
                .is_some_and(|name| patterns::matches(&TEXT_NAME, name));
        if name_hit {
            findings.push(
                self.finding(node, ctx, "NAME")
                    .message(format!(
                        "Image '{}' is named like a text graphic",
                        node.name.as_deref().unwrap_or(&node.id)
                    ))
                    .build(),
            );
        } else if !logo {
            if let Some(src) = source.as_deref().filter(|src| patterns::matches(&TEXT_FILENAME, src)) {
                findings.push(
                    self.finding(node, ctx, "FILENAME")
                        .message(format!("Image source '{src}' looks like a text graphic"))
                        .build(),
                );
            }
        }

        if let Some(alt) = alt.as_deref().filter(|alt| word_count(alt) > LONG_ALT_TEXT_WORDS) {
            findings.push(
                self.finding(node, ctx, "ALT_TEXT")
                    .message(format!(
                        "Alternative text runs to {} words, suggesting the image contains text",
                        word_count(alt)
                    ))
                    .build(),
            );
        }

        let flagged = properties::is_truthy(node, "ContainsText")
            || properties::first_text(node, IMAGE_KIND_KEYS)
                .is_some_and(|kind| patterns::matches(&TEXT_KIND, &kind));
        if flagged {
            findings.push(
                self.finding(node, ctx, "FLAG")
                    .message(format!("Image '{}' is declared to contain text", node.id))
                    .build(),
            );
        }

        findings
    }
}

impl ImagesOfTextRule {
    fn finding<'a>(
        &self,
        node: &'a UiNode,
        ctx: &'a EvaluationContext,
        sub_type: &'a str,
    ) -> lumen_core::FindingBuilder<'a> {
        Finding::builder(self.id(), self.severity(), node, ctx)
            .sub_type(sub_type)
            .rationale("Text inside an image cannot be resized, restyled, or reliably read by assistive technology.")
            .suggested_fix("Render the text with a Label over a plain image, or keep the image only if it is a logo.")
            .criterion(WcagCriterion::ImagesOfText)
    }
}

/// Logos and brand marks are allowed to be images of text.
pub fn is_logo_text(value: &str) -> bool {
    LOGO_WORDS
        .as_ref()
        .is_some_and(|table| table.is_match(value))
}

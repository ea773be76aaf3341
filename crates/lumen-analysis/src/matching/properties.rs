//! Property lookup with ordered fallback chains.
//!
//! Every lookup returns `Option`: a missing key, a blank string, or a value of
//! the wrong shape all read as "absent" so rules fail open.

use std::borrow::Cow;

use lumen_core::{PropertyValue, UiNode};

/// A place a rule may read text from, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// The node's visible `text` field.
    Text,
    /// The node's declared `name` field.
    Name,
    /// A named property, rendered as a string.
    Property(&'static str),
}

/// First non-blank text along `chain`, trimmed.
pub fn resolve_text<'a>(node: &'a UiNode, chain: &[TextSource]) -> Option<Cow<'a, str>> {
    chain.iter().find_map(|source| match source {
        TextSource::Text => non_blank(node.text.as_deref()).map(Cow::Borrowed),
        TextSource::Name => non_blank(node.name.as_deref()).map(Cow::Borrowed),
        TextSource::Property(key) => property_text(node, key),
    })
}

/// First property in `keys` holding non-blank text.
pub fn first_text<'a>(node: &'a UiNode, keys: &[&str]) -> Option<Cow<'a, str>> {
    keys.iter().find_map(|key| property_text(node, key))
}

/// Numeric value of `key`, accepting numbers of any width and numeric strings.
pub fn number(node: &UiNode, key: &str) -> Option<f64> {
    node.property(key).and_then(PropertyValue::as_f64)
}

pub fn is_truthy(node: &UiNode, key: &str) -> bool {
    node.property(key).is_some_and(PropertyValue::is_truthy)
}

pub fn any_truthy(node: &UiNode, keys: &[&str]) -> bool {
    keys.iter().any(|key| is_truthy(node, key))
}

/// Whether any of `keys` is present with a non-blank value.
pub fn has_any(node: &UiNode, keys: &[&str]) -> bool {
    keys.iter()
        .any(|key| node.property(key).is_some_and(|v| !v.is_blank()))
}

fn property_text<'a>(node: &'a UiNode, key: &str) -> Option<Cow<'a, str>> {
    let value = node.property(key)?;
    if value.is_blank() {
        return None;
    }
    match value.as_text() {
        Cow::Borrowed(s) => Some(Cow::Borrowed(s.trim())),
        Cow::Owned(s) => Some(Cow::Owned(s.trim().to_string())),
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> UiNode {
        UiNode::new("lnk1", "Link")
            .with_name("  ")
            .with_property("Label", "")
            .with_property("Content", " Quarterly report ")
            .with_property("Size", "14")
            .with_property("Visible", true)
    }

    #[test]
    fn fallback_chain_skips_blank_sources() {
        let node = link();
        let text = resolve_text(
            &node,
            &[
                TextSource::Text,
                TextSource::Name,
                TextSource::Property("Label"),
                TextSource::Property("Content"),
            ],
        );
        assert_eq!(text.as_deref(), Some("Quarterly report"));
    }

    #[test]
    fn chain_order_wins() {
        let node = link().with_text("Report");
        let text = resolve_text(&node, &[TextSource::Text, TextSource::Property("Content")]);
        assert_eq!(text.as_deref(), Some("Report"));
    }

    #[test]
    fn numeric_and_boolean_lookup() {
        let node = link();
        assert_eq!(number(&node, "Size"), Some(14.0));
        assert_eq!(number(&node, "Visible"), None);
        assert_eq!(number(&node, "Missing"), None);
        assert!(is_truthy(&node, "Visible"));
        assert!(!any_truthy(&node, &["Missing", "Size"]));
    }

    #[test]
    fn presence_checks_ignore_blank_values() {
        let node = link();
        assert!(!has_any(&node, &["Label"]));
        assert!(has_any(&node, &["Label", "Content"]));
        assert_eq!(first_text(&node, &["Label"]), None);
    }
}

//! Untyped property values carried by UI nodes.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single property value as ingestion found it.
///
/// Low-code packages store numbers in several widths and often as
/// numeric-looking strings, so every accessor coerces and returns `None`
/// rather than failing when the value has the wrong shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl PropertyValue {
    /// String rendering of the value. Text is borrowed, everything else formatted.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Integer(i) => Cow::Owned(i.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        }
    }

    /// Numeric view of the value. Accepts any numeric variant or a string that
    /// parses as a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Bool(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Truthiness used by flag-like properties (`true`, non-zero, "yes", "on", "1").
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "on" | "1"
            ),
        }
    }

    /// Empty or whitespace-only text. Non-text values are never blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_coercion_accepts_widths_and_strings() {
        assert_eq!(PropertyValue::Integer(18).as_f64(), Some(18.0));
        assert_eq!(PropertyValue::Float(14.5).as_f64(), Some(14.5));
        assert_eq!(PropertyValue::from(" 21 ").as_f64(), Some(21.0));
        assert_eq!(PropertyValue::from("large").as_f64(), None);
        assert_eq!(PropertyValue::Bool(true).as_f64(), None);
        assert_eq!(PropertyValue::from("NaN").as_f64(), None);
    }

    #[test]
    fn text_coercion_renders_every_variant() {
        assert_eq!(PropertyValue::Integer(3).as_text(), "3");
        assert_eq!(PropertyValue::Float(14.0).as_text(), "14");
        assert_eq!(PropertyValue::Bool(false).as_text(), "false");
        assert_eq!(PropertyValue::from("RGBA(0,0,0,1)").as_text(), "RGBA(0,0,0,1)");
    }

    #[test]
    fn truthiness() {
        assert!(PropertyValue::Bool(true).is_truthy());
        assert!(PropertyValue::from("Yes").is_truthy());
        assert!(PropertyValue::Integer(1).is_truthy());
        assert!(!PropertyValue::from("ellipsis").is_truthy());
        assert!(!PropertyValue::Integer(0).is_truthy());
    }

    #[test]
    fn untagged_json_picks_the_natural_variant() {
        let values: Vec<PropertyValue> =
            serde_json::from_str(r#"[true, 12, 12.5, "12"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                PropertyValue::Bool(true),
                PropertyValue::Integer(12),
                PropertyValue::Float(12.5),
                PropertyValue::Text("12".to_string()),
            ]
        );
    }
}

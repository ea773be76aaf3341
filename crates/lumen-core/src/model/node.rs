//! UI tree nodes.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::property::PropertyValue;
use crate::errors::ModelError;

/// Per-node metadata attached by ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeMeta {
    /// Name of the screen or page that owns the control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    /// Any other ingestion metadata, kept verbatim.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// One control in the normalized UI tree.
///
/// Children are held behind `Arc` so ingestion may share subtrees; the scan
/// engine guards traversal by node identity, so a shared or repeated child is
/// visited once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub control_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub children: Vec<Arc<UiNode>>,
}

impl UiNode {
    pub fn new(id: impl Into<String>, control_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            control_type: control_type.into(),
            name: None,
            text: None,
            properties: BTreeMap::new(),
            meta: NodeMeta::default(),
            children: Vec::new(),
        }
    }

    /// Parse a tree from its JSON form (`type` carries the control type).
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Parse {
            message: e.to_string(),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.meta.screen = Some(screen.into());
        self
    }

    pub fn with_child(mut self, child: UiNode) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    /// Attach an already shared child without copying it.
    pub fn with_shared_child(mut self, child: Arc<UiNode>) -> Self {
        self.children.push(child);
        self
    }

    /// Look up a property by its exact (case-sensitive) key.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Control type folded for comparison: lowercase, with spaces, hyphens and
    /// underscores removed ("Text Input" and "text_input" both give "textinput").
    pub fn type_key(&self) -> String {
        self.control_type
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase()
    }

    /// Whether the control type is one of `types` (given in folded form).
    pub fn is_type(&self, types: &[&str]) -> bool {
        let key = self.type_key();
        types.iter().any(|t| *t == key)
    }

    /// The node's own screen metadata, if ingestion recorded one.
    pub fn screen(&self) -> Option<&str> {
        self.meta.screen.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_lookup() {
        let node = UiNode::new("lbl1", "Label")
            .with_name("lblTitle")
            .with_text("Welcome")
            .with_property("Size", 18)
            .with_screen("Home");

        assert_eq!(node.property("Size"), Some(&PropertyValue::Integer(18)));
        assert_eq!(node.property("size"), None, "keys are case-sensitive");
        assert_eq!(node.screen(), Some("Home"));
        assert!(node.is_type(&["label"]));
        assert!(!node.is_type(&["button"]));
        assert!(UiNode::new("t", "Text Input").is_type(&["textinput"]));
    }

    #[test]
    fn from_json_reads_nested_tree() {
        let json = r#"{
            "id": "screen1",
            "type": "Screen",
            "children": [
                { "id": "btn1", "type": "Button", "text": "Save",
                  "properties": { "Size": "14", "Visible": true },
                  "meta": { "screen": "Screen1" } }
            ]
        }"#;
        let root = UiNode::from_json(json).unwrap();
        assert_eq!(root.children.len(), 1);
        let child = &root.children[0];
        assert_eq!(child.control_type, "Button");
        assert_eq!(child.property("Size").and_then(PropertyValue::as_f64), Some(14.0));
        assert_eq!(child.screen(), Some("Screen1"));
    }

    #[test]
    fn from_json_rejects_missing_id() {
        let err = UiNode::from_json(r#"{ "type": "Label" }"#).unwrap_err();
        assert!(matches!(err, ModelError::Parse { .. }));
    }
}

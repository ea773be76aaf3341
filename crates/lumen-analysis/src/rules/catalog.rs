//! Ordered, composable rule collections.

use std::fmt;
use std::sync::Arc;

use lumen_core::config::RulesConfig;
use lumen_core::errors::ConfigError;

use super::basic::{AccessibleLabelRule, AltTextRule, InputPurposeRule, LinkPurposeRule, TabOrderRule};
use super::traits::Rule;
use super::visual::{ContrastRule, ImagesOfTextRule, ResizeTextRule};

/// Catalog names accepted by [`RuleCatalog::by_name`].
pub const CATALOG_NAMES: &[&str] = &["basic", "visual", "contrast", "all"];

/// An ordered list of rules. Order is the canonical order of findings within
/// a node; grouping has no other effect on evaluation.
#[derive(Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<Arc<dyn Rule>>,
}

impl RuleCatalog {
    pub fn new(rules: Vec<Arc<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Structural checks: alt text, labels, tab order, input purpose, link purpose.
    pub fn basic() -> Self {
        Self::new(vec![
            Arc::new(AltTextRule),
            Arc::new(AccessibleLabelRule),
            Arc::new(TabOrderRule),
            Arc::new(InputPurposeRule),
            Arc::new(LinkPurposeRule),
        ])
    }

    /// Visual checks: contrast, images of text, text resizing.
    pub fn visual() -> Self {
        Self::new(vec![
            Arc::new(ContrastRule),
            Arc::new(ImagesOfTextRule),
            Arc::new(ResizeTextRule),
        ])
    }

    pub fn all() -> Self {
        Self::basic().concat(Self::visual())
    }

    /// Resolve a catalog by name, case-insensitively. `contrast` is an alias
    /// for `visual`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "basic" => Some(Self::basic()),
            "visual" | "contrast" => Some(Self::visual()),
            "all" => Some(Self::all()),
            _ => None,
        }
    }

    /// Concatenate the configured catalogs in order, then drop disabled rules.
    pub fn from_config(config: &RulesConfig) -> Result<Self, ConfigError> {
        let mut catalog = Self::empty();
        for name in config.effective_catalogs() {
            let group = Self::by_name(&name).ok_or_else(|| ConfigError::InvalidValue {
                field: "rules.catalogs".to_string(),
                message: format!("unknown catalog '{name}', expected one of {CATALOG_NAMES:?}"),
            })?;
            catalog = catalog.concat(group);
        }
        catalog.rules.retain(|rule| !config.is_disabled(rule.id()));
        Ok(catalog)
    }

    pub fn concat(mut self, other: RuleCatalog) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn with_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Remove every rule with the given id.
    pub fn without(mut self, rule_id: &str) -> Self {
        self.rules.retain(|rule| rule.id() != rule_id);
        self
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// First rule with the given id.
    pub fn get(&self, rule_id: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.iter().find(|rule| rule.id() == rule_id)
    }
}

impl Extend<Arc<dyn Rule>> for RuleCatalog {
    fn extend<I: IntoIterator<Item = Arc<dyn Rule>>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl FromIterator<Arc<dyn Rule>> for RuleCatalog {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Rule>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for RuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleCatalog")
            .field("rules", &self.ids())
            .finish()
    }
}

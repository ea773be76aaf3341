//! Rule selection configuration.

use serde::{Deserialize, Serialize};

/// Which rule catalogs run, and which individual rules are switched off.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Catalog names, concatenated in order. Default: `["all"]`.
    pub catalogs: Vec<String>,
    /// Rule ids removed from the combined catalog.
    pub disabled_rules: Vec<String>,
}

impl RulesConfig {
    pub fn effective_catalogs(&self) -> Vec<String> {
        if self.catalogs.is_empty() {
            vec!["all".to_string()]
        } else {
            self.catalogs.clone()
        }
    }

    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.disabled_rules.iter().any(|r| r.eq_ignore_ascii_case(rule_id))
    }
}

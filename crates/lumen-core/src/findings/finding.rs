//! The finding record and its builder.

use serde::{Deserialize, Serialize};

use super::severity::Severity;
use super::wcag::WcagCriterion;
use crate::model::{EvaluationContext, Surface, UiNode};

/// One reported diagnostic tied to a rule, a node, and an explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// `<ruleId>:[<subType>:]<nodeId>`
    pub id: String,
    pub rule_id: String,
    pub severity: Severity,
    pub surface: Surface,
    pub app_name: String,
    pub screen: Option<String>,
    pub control_id: String,
    pub control_type: String,
    pub issue_type: String,
    pub message: String,
    pub wcag_reference: String,
    pub section508_reference: String,
    pub rationale: String,
    pub suggested_fix: String,
    pub wcag_criterion: Option<WcagCriterion>,
}

impl Finding {
    /// Start a finding for `node` raised by `rule_id`.
    pub fn builder<'a>(
        rule_id: &'a str,
        severity: Severity,
        node: &'a UiNode,
        ctx: &'a EvaluationContext,
    ) -> FindingBuilder<'a> {
        FindingBuilder {
            rule_id,
            severity,
            node,
            ctx,
            sub_type: None,
            issue_type: None,
            message: String::new(),
            rationale: String::new(),
            suggested_fix: String::new(),
            criterion: None,
        }
    }

    /// Compose the conventional finding key.
    pub fn compose_id(rule_id: &str, sub_type: Option<&str>, node_id: &str) -> String {
        match sub_type {
            Some(sub) => format!("{rule_id}:{sub}:{node_id}"),
            None => format!("{rule_id}:{node_id}"),
        }
    }
}

/// Builder carrying the node and context a finding is attributed to, so
/// identity and screen resolution happen in one place.
#[derive(Debug)]
pub struct FindingBuilder<'a> {
    rule_id: &'a str,
    severity: Severity,
    node: &'a UiNode,
    ctx: &'a EvaluationContext,
    sub_type: Option<&'a str>,
    issue_type: Option<String>,
    message: String,
    rationale: String,
    suggested_fix: String,
    criterion: Option<WcagCriterion>,
}

impl<'a> FindingBuilder<'a> {
    /// Sub-type segment of the id, used when a rule reports several issues per node.
    pub fn sub_type(mut self, sub_type: &'a str) -> Self {
        self.sub_type = Some(sub_type);
        self
    }

    /// Issue type. Defaults to `<RULE_ID>_<SUB_TYPE>` (or the rule id alone).
    pub fn issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = Some(issue_type.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    pub fn suggested_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = fix.into();
        self
    }

    pub fn criterion(mut self, criterion: WcagCriterion) -> Self {
        self.criterion = Some(criterion);
        self
    }

    pub fn build(self) -> Finding {
        let issue_type = self.issue_type.unwrap_or_else(|| match self.sub_type {
            Some(sub) => format!("{}_{}", self.rule_id, sub),
            None => self.rule_id.to_string(),
        });
        let (wcag_reference, section508_reference) = match self.criterion {
            Some(c) => (c.reference(), c.section508_reference(self.ctx.surface)),
            None => (String::new(), String::new()),
        };

        Finding {
            id: Finding::compose_id(self.rule_id, self.sub_type, &self.node.id),
            rule_id: self.rule_id.to_string(),
            severity: self.severity,
            surface: self.ctx.surface,
            app_name: self.ctx.app_name.clone(),
            screen: self.ctx.screen_for(self.node).map(str::to_string),
            control_id: self.node.id.clone(),
            control_type: self.node.control_type.clone(),
            issue_type,
            message: self.message,
            wcag_reference,
            section508_reference,
            rationale: self.rationale,
            suggested_fix: self.suggested_fix,
            wcag_criterion: self.criterion,
        }
    }
}

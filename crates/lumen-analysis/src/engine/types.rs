//! Scan result types.

use std::collections::BTreeMap;

use lumen_core::errors::{EvaluationError, ScanError};
use lumen_core::{Finding, Severity};

/// A rule that failed while evaluating one node. The scan continued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFault {
    pub rule_id: String,
    pub node_id: String,
    pub error: EvaluationError,
}

/// Everything a scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Findings in traversal order, then catalog order.
    pub findings: Vec<Finding>,
    /// Rule faults in the same canonical order.
    pub faults: Vec<RuleFault>,
    pub nodes_visited: usize,
    /// The scan stopped early; findings cover only the nodes visited.
    pub cancelled: bool,
}

impl ScanOutcome {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.faults.is_empty()
    }

    /// Treat a cancelled scan as an error; complete scans pass through.
    pub fn into_result(self) -> Result<Self, ScanError> {
        if self.cancelled {
            Err(ScanError::Cancelled {
                nodes_visited: self.nodes_visited,
            })
        } else {
            Ok(self)
        }
    }

    pub fn count_by_severity(&self) -> BTreeMap<Severity, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.severity).or_insert(0) += 1;
        }
        counts
    }

    /// Sum of severity weights, a rough single-number health signal.
    pub fn weighted_score(&self) -> u32 {
        self.findings.iter().map(|f| f.severity.weight()).sum()
    }

    pub fn findings_for_rule<'a>(&'a self, rule_id: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.rule_id == rule_id)
    }
}

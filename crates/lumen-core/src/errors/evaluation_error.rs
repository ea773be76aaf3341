//! Rule evaluation faults.

use super::error_code::{self, LumenErrorCode};

/// Unexpected failure inside a rule's evaluation logic. Recorded per
/// rule-per-node by the scan engine; never aborts a scan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("rule panicked: {message}")]
    RulePanic { message: String },
}

impl LumenErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_FAULT
    }
}

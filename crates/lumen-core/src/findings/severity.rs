//! Finding severity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a finding, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Weight used when aggregating findings into a score.
    pub fn weight(&self) -> u32 {
        match self {
            Self::High => 10,
            Self::Medium => 3,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

//! Finding model: the immutable diagnostic record rules emit.

pub mod finding;
pub mod severity;
pub mod wcag;

pub use finding::{Finding, FindingBuilder};
pub use severity::Severity;
pub use wcag::{WcagCriterion, WcagLevel, WcagVersion};

//! Lumen core: the UI tree model, finding model, WCAG vocabulary, errors,
//! configuration, events, tracing, and cancellation shared by every Lumen crate.

pub mod config;
pub mod errors;
pub mod events;
pub mod findings;
pub mod model;
pub mod tracing;
pub mod traits;

pub use findings::{Finding, FindingBuilder, Severity, WcagCriterion, WcagLevel, WcagVersion};
pub use model::{EvaluationContext, NodeMeta, PropertyValue, Surface, UiNode};
pub use traits::{Cancellable, CancellationToken};

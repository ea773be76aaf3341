//! Normalized, read-only UI tree produced by ingestion.

pub mod context;
pub mod node;
pub mod property;
pub mod surface;

pub use context::EvaluationContext;
pub use node::{NodeMeta, UiNode};
pub use property::PropertyValue;
pub use surface::Surface;

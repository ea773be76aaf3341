//! Scan engine: walks the UI tree once, runs every applicable rule against
//! each node, and returns findings in canonical order.

pub mod orchestrator;
pub mod traversal;
pub mod types;

pub use orchestrator::ScanEngine;
pub use traversal::pre_order;
pub use types::{RuleFault, ScanOutcome};

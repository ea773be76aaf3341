//! Lumen analysis: the rule contract, rule catalogs, shared matching
//! utilities, the concrete accessibility rules, and the scan engine.

pub mod engine;
pub mod matching;
pub mod rules;

pub use engine::{RuleFault, ScanEngine, ScanOutcome};
pub use rules::{Rule, RuleCatalog};

//! Configuration system for Lumen.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.
//!
//! Configuration only ever produces explicit values the caller passes to the
//! scan engine at construction time; nothing here is global state.

pub mod lumen_config;
pub mod rules_config;
pub mod scan_config;

pub use lumen_config::{CliOverrides, LumenConfig};
pub use rules_config::RulesConfig;
pub use scan_config::ScanConfig;

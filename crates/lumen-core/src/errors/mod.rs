//! Error handling for Lumen.
//! One error enum per subsystem, `thiserror` only.
//!
//! Missing or mistyped node properties are never errors: rules fail open and
//! simply emit no finding.

pub mod config_error;
pub mod error_code;
pub mod evaluation_error;
pub mod model_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::LumenErrorCode;
pub use evaluation_error::EvaluationError;
pub use model_error::ModelError;
pub use scan_error::ScanError;

//! Structured error codes for callers that report errors across a boundary.

/// Every Lumen error enum exposes a stable code string.
pub trait LumenErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_FAULT: &str = "RULE_FAULT";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const CANCELLED: &str = "CANCELLED";

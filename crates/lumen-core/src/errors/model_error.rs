//! UI tree model errors.

use super::error_code::{self, LumenErrorCode};

/// Errors raised while materializing a UI tree from its serialized form.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("UI tree parse error: {message}")]
    Parse { message: String },
}

impl LumenErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}

//! Scan-level errors.

use super::error_code::{self, LumenErrorCode};

/// Errors surfaced by the scan engine itself (never by individual rules).
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan cancelled after {nodes_visited} nodes")]
    Cancelled { nodes_visited: usize },

    #[error("Failed to build scan thread pool: {message}")]
    ThreadPool { message: String },
}

impl LumenErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Cancelled { .. } => error_code::CANCELLED,
            Self::ThreadPool { .. } => error_code::SCAN_ERROR,
        }
    }
}

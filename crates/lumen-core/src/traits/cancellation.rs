//! Cooperative scan cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Something a long-running scan can poll between nodes.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    fn cancel(&self);
}

/// Shared cancellation flag. Clones observe the same flag, so a caller keeps
/// one clone and hands another to the scan engine.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

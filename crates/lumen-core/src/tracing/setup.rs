//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize Lumen logging.
///
/// Reads `LUMEN_LOG` for per-target levels, e.g.
/// `LUMEN_LOG=lumen_analysis::engine=debug,lumen_core=warn`.
/// Falls back to `lumen=info` when unset or invalid. Safe to call repeatedly.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LUMEN_LOG")
            .unwrap_or_else(|_| EnvFilter::new("lumen=info"));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!(target: "lumen_core", "tracing initialized");
    }
}

//! Scan configuration.

use serde::{Deserialize, Serialize};

use crate::model::{EvaluationContext, Surface};

/// Configuration for a single scan.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Surface the UI tree was ingested from. Default: CanvasApp.
    pub surface: Option<Surface>,
    /// Scan-level application identifier. Default: "unnamed-app".
    pub app_name: Option<String>,
    /// Screen used when a node carries no screen metadata.
    pub screen: Option<String>,
    /// Evaluate nodes on a worker pool. Default: false.
    pub parallel: Option<bool>,
    /// Worker threads for parallel scans. Default: rayon's global pool.
    pub threads: Option<usize>,
}

impl ScanConfig {
    pub fn effective_surface(&self) -> Surface {
        self.surface.unwrap_or(Surface::CanvasApp)
    }

    pub fn effective_app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("unnamed-app")
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Build the evaluation context this configuration describes.
    pub fn context(&self) -> EvaluationContext {
        let ctx = EvaluationContext::new(self.effective_surface(), self.effective_app_name());
        match &self.screen {
            Some(screen) => ctx.with_screen(screen.clone()),
            None => ctx,
        }
    }
}

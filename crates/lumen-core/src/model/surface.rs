//! Application surfaces hosting the audited UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The category of application the UI tree was ingested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Surface {
    #[serde(alias = "canvas", alias = "canvas-app")]
    CanvasApp,
    #[serde(alias = "model-driven", alias = "model-driven-app")]
    ModelDrivenApp,
    #[serde(alias = "portal", alias = "portal-page")]
    PortalPage,
}

impl Surface {
    pub fn all() -> &'static [Surface] {
        &[Self::CanvasApp, Self::ModelDrivenApp, Self::PortalPage]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CanvasApp => "CanvasApp",
            Self::ModelDrivenApp => "ModelDrivenApp",
            Self::PortalPage => "PortalPage",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "canvas" | "canvasapp" => Ok(Self::CanvasApp),
            "modeldriven" | "modeldrivenapp" => Ok(Self::ModelDrivenApp),
            "portal" | "portalpage" => Ok(Self::PortalPage),
            _ => Err(format!("unknown surface: {s}")),
        }
    }
}

//! Top-level Lumen configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{RulesConfig, ScanConfig};
use crate::errors::ConfigError;
use crate::model::Surface;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LUMEN_*`)
/// 3. Project config (`lumen.toml` in project root)
/// 4. User config (`~/.lumen/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LumenConfig {
    pub scan: ScanConfig,
    pub rules: RulesConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub surface: Option<Surface>,
    pub app_name: Option<String>,
    pub screen: Option<String>,
    pub parallel: Option<bool>,
    pub threads: Option<usize>,
    pub catalogs: Vec<String>,
    pub disabled_rules: Vec<String>,
}

impl LumenConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a parse failure is fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("lumen.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &LumenConfig) -> Result<(), ConfigError> {
        if config.scan.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(ref app_name) = config.scan.app_name {
            if app_name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.app_name".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        if config.rules.catalogs.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "rules.catalogs".to_string(),
                message: "catalog names must not be blank".to_string(),
            });
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".lumen").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored so older binaries accept newer files.
    fn merge_toml_file(config: &mut LumenConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LumenConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only values `other` actually sets win.
    fn merge(base: &mut LumenConfig, other: &LumenConfig) {
        if other.scan.surface.is_some() {
            base.scan.surface = other.scan.surface;
        }
        if other.scan.app_name.is_some() {
            base.scan.app_name = other.scan.app_name.clone();
        }
        if other.scan.screen.is_some() {
            base.scan.screen = other.scan.screen.clone();
        }
        if other.scan.parallel.is_some() {
            base.scan.parallel = other.scan.parallel;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }

        if !other.rules.catalogs.is_empty() {
            base.rules.catalogs = other.rules.catalogs.clone();
        }
        if !other.rules.disabled_rules.is_empty() {
            base.rules.disabled_rules = other.rules.disabled_rules.clone();
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut LumenConfig) {
        if let Ok(val) = std::env::var("LUMEN_SURFACE") {
            if let Ok(v) = val.parse::<Surface>() {
                config.scan.surface = Some(v);
            }
        }
        if let Ok(val) = std::env::var("LUMEN_APP_NAME") {
            config.scan.app_name = Some(val);
        }
        if let Ok(val) = std::env::var("LUMEN_SCREEN") {
            config.scan.screen = Some(val);
        }
        if let Ok(val) = std::env::var("LUMEN_SCAN_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.scan.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("LUMEN_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("LUMEN_RULES_CATALOGS") {
            config.rules.catalogs = split_list(&val);
        }
        if let Ok(val) = std::env::var("LUMEN_RULES_DISABLED") {
            config.rules.disabled_rules = split_list(&val);
        }
    }

    fn apply_cli_overrides(config: &mut LumenConfig, cli: &CliOverrides) {
        if let Some(v) = cli.surface {
            config.scan.surface = Some(v);
        }
        if let Some(ref v) = cli.app_name {
            config.scan.app_name = Some(v.clone());
        }
        if let Some(ref v) = cli.screen {
            config.scan.screen = Some(v.clone());
        }
        if let Some(v) = cli.parallel {
            config.scan.parallel = Some(v);
        }
        if let Some(v) = cli.threads {
            config.scan.threads = Some(v);
        }
        if !cli.catalogs.is_empty() {
            config.rules.catalogs = cli.catalogs.clone();
        }
        if !cli.disabled_rules.is_empty() {
            config.rules.disabled_rules = cli.disabled_rules.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

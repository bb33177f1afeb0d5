use crate::error::AppError;
use ochre_color::DistanceMetric;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable holding the config path when `--config` is absent
pub const CONFIG_ENV: &str = "OCHRE_CONFIG";

/// Application configuration loaded from ochre.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Default metric for `closest`
    #[serde(default)]
    pub metric: Metric,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Named palettes as lists of color specs
    #[serde(default)]
    pub palettes: HashMap<String, Vec<String>>,
}

/// Distance metric as written in config files and on the command line
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Rgb,
    Hcl,
}

impl From<Metric> for DistanceMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Rgb => DistanceMetric::Rgb,
            Metric::Hcl => DistanceMetric::Hcl,
        }
    }
}

/// Output format for command results
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Pick the config path: the explicit one, else `$OCHRE_CONFIG`
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn try_load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration, falling back to defaults when there is no file
    /// or it cannot be used
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match Self::try_load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    palettes = config.palettes.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::Scale;
use crate::output::OutputFormat;
use crate::scoring::StrengthNormalization;

/// Root configuration structure for tbap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TbapConfig {
    /// Response scale for the linear measures and Tree facets
    #[serde(default)]
    pub scale: Option<Scale>,

    /// Tree vector model settings
    #[serde(default)]
    pub tree: Option<TreeConfig>,

    /// Where saved assessments live
    #[serde(default)]
    pub storage: Option<StorageConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl TbapConfig {
    pub fn scale(&self) -> Scale {
        self.scale.unwrap_or_default()
    }

    pub fn strength_normalization(&self) -> StrengthNormalization {
        self.tree
            .as_ref()
            .map(|tree| tree.strength_normalization)
            .unwrap_or_default()
    }

    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage.as_ref().and_then(|s| s.dir.clone())
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }

    /// Check values serde cannot reject on its own
    pub fn validate(&self) -> Result<(), String> {
        self.scale().validate()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    #[serde(default)]
    pub strength_normalization: StrengthNormalization,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for stored results (default: platform data dir)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

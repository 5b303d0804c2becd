//! Overview window configuration, loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors raised while loading configuration or data files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {source_name}: {message}")]
    Parse { source_name: String, message: String },
}

/// Layout and timing settings for the overview dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    /// Vertical spacing between list rows
    pub list_spacing: f32,
    /// Small gap between the separator and the tab content
    pub gap_tiny: f32,
    /// Horizontal padding added around tab button labels
    pub tab_button_padding: f32,
    /// Initial window width, measured in ten-character strings
    pub width_in_ten_char_strings: u32,
    /// Initial window height as a fraction of the screen height
    pub height_fraction: f32,
    pub tip_interval_secs: u64,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            list_spacing: 24.0,
            gap_tiny: 4.0,
            tab_button_padding: 16.0,
            width_in_ten_char_strings: 11,
            height_fraction: 0.5,
            tip_interval_secs: 10,
        }
    }
}

impl OverviewConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse {
            source_name: "overview config".to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("[OverviewConfig] loaded from {}", path.display());
        Ok(config)
    }

    pub fn tip_interval(&self) -> Duration {
        Duration::from_secs(self.tip_interval_secs)
    }
}

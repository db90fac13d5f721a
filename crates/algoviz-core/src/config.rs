//! Visualizer configuration for algoviz
//!
//! Configuration is read from `config.toml` in `$ALGOVIZ_CONFIG_DIR`, or in
//! the platform config directory (`~/.config/algoviz/` on Linux). A missing
//! file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VizError};

pub use types::{AnimationConfig, BstConfig, SortConfig, TreeLayoutConfig, VizConfig};

const CONFIG_DIR: &str = "algoviz";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ALGOVIZ_CONFIG_DIR";

impl VizConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| VizError::Other("unable to determine config directory".to_string()))?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path, or from the default location when `None`.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            VizError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: VizConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VizError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject inverted ranges and degenerate geometry
    pub fn validate(&self) -> Result<()> {
        if self.bst.min_value > self.bst.max_value {
            return Err(VizError::invalid_value(
                "bst value range",
                format!("{}..={}", self.bst.min_value, self.bst.max_value),
            ));
        }
        if self.sort.min_size == 0 || self.sort.min_size > self.sort.max_size {
            return Err(VizError::invalid_value(
                "sort size range",
                format!("{}..={}", self.sort.min_size, self.sort.max_size),
            ));
        }
        if !(self.sort.min_size..=self.sort.max_size).contains(&self.sort.default_size) {
            return Err(VizError::invalid_value(
                "sort default_size",
                self.sort.default_size,
            ));
        }
        if self.sort.min_value > self.sort.max_value {
            return Err(VizError::invalid_value(
                "sort element range",
                format!("{}..={}", self.sort.min_value, self.sort.max_value),
            ));
        }
        if self.tree.level_height <= 0.0 || self.tree.spread < 0.0 {
            return Err(VizError::invalid_value(
                "tree geometry",
                format!(
                    "spread={} level_height={}",
                    self.tree.spread, self.tree.level_height
                ),
            ));
        }
        Ok(())
    }
}

use std::path::Path;

use bandfx::GradientOptions;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Describes what to render: the size of the grid, starting at (0, 0), and
/// the gradient to fill it with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub gradient: GradientOptions,
}

impl RenderConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_slice(&std::fs::read(path)?)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(data)?)
    }
}

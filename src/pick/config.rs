//! Area picker configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;

/// Tunables for [`AreaPicker`](super::AreaPicker).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickConfig {
    /// Smallest pick rectangle side in pixels; a plain click is grown to this.
    pub min_rect_size: f32,
    /// Test objects flagged invisible.
    pub include_hidden: bool,
    /// Test objects flagged unpickable.
    pub include_unpickable: bool,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            min_rect_size: 1.0,
            include_hidden: false,
            include_unpickable: false,
        }
    }
}

impl PickConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded pick config from {}: {:?}", path.as_ref().display(), config);
        Ok(config)
    }
}

//! Placement configuration.
//!
//! The engine itself takes every knob on the request; this is the
//! per-deployment surface that adapters read, so hosts with different
//! reserved-region policies (or none) can share the same engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PlacementError;

/// Default height of the reserved strip at the bottom of the available
/// area, in layout units.
pub const DEFAULT_RESERVED_BOTTOM_INSET: f32 = 48.0;

/// Placement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Height of a fixed UI strip (e.g. a bookmark bar) at the bottom of
    /// the available area that popups placed below an anchor must not
    /// cover.
    #[serde(default = "default_reserved_bottom_inset")]
    pub reserved_bottom_inset: f32,
}

fn default_reserved_bottom_inset() -> f32 {
    DEFAULT_RESERVED_BOTTOM_INSET
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            reserved_bottom_inset: default_reserved_bottom_inset(),
        }
    }
}

impl PlacementConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlacementError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PlacementError::Io(e.to_string()))?;

        let config: PlacementConfig =
            serde_json::from_str(&contents).map_err(|e| PlacementError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PlacementError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlacementError::Serialize(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| PlacementError::Io(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), PlacementError> {
        if !self.reserved_bottom_inset.is_finite() || self.reserved_bottom_inset < 0.0 {
            return Err(PlacementError::Validation(format!(
                "reserved_bottom_inset must be a non-negative number, got {}",
                self.reserved_bottom_inset
            )));
        }
        Ok(())
    }
}

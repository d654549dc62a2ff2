//! User motion preferences and their JSON encoding.

use crate::core::motion::DEFAULT_STAGGER_DELAY_MS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stagger steps offered by the settings screen.
pub const STAGGER_PRESETS_MS: [u32; 4] = [0, 30, DEFAULT_STAGGER_DELAY_MS, 100];

/// Motion preferences persisted between sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Suppress entrance and background animations.
    pub reduced_motion: bool,
    /// Per-item offset used by stagger containers.
    pub stagger_delay_ms: u32,
    /// Animate glow background layers.
    pub glow_animated: bool,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            stagger_delay_ms: DEFAULT_STAGGER_DELAY_MS,
            glow_animated: true,
        }
    }
}

/// Failures decoding stored settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Stored value was not valid settings JSON.
    #[error("malformed motion settings: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl MotionSettings {
    /// Decode settings, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Malformed`] when the input is not a JSON
    /// object of the expected shape.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Encode settings for storage.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

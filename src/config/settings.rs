use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::traits::MAX_BRIGHTNESS;

/// Hard settings violations. Soft ones (brightness out of range) are
/// clamped instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("player count must be at least 1")]
    NoPlayers,
    #[error("debounce interval must be at least 1 ms")]
    ZeroDebounce,
}

/// Controller configuration (buzzlock.json).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct Settings {
    /// Number of wired player buttons.
    pub players: usize,
    /// Countdown length in ticks. Zero skips straight to the open window.
    pub countdown_secs: u8,
    /// Stability window for every input line, in ms.
    pub debounce_ms: u32,
    /// Display brightness, clamped to `0..=MAX_BRIGHTNESS`.
    pub brightness: u8,
    /// Whether the sounder is driven at all.
    pub audio: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: 4,
            countdown_secs: 3,
            debounce_ms: 25,
            brightness: 4,
            audio: true,
        }
    }
}

impl Settings {
    /// Clamp soft fields and reject configurations the controller cannot
    /// run with.
    pub fn validate(&mut self) -> Result<(), SettingsError> {
        self.brightness = self.brightness.min(MAX_BRIGHTNESS);
        if self.players == 0 {
            return Err(SettingsError::NoPlayers);
        }
        if self.debounce_ms == 0 {
            return Err(SettingsError::ZeroDebounce);
        }
        Ok(())
    }

    /// Read settings from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&data)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

// src/config/mod.rs
//! User settings for waveform rendering and playback, read from TOML.

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use crate::audio::{Volume, VolumeRange};
use crate::error::{Error, Result};
use crate::waveform::{Bucketing, WaveformOptions};

/// Playback preferences.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Gain the engine starts at, in [0, 1].
    pub initial_volume: f32,
    pub volume_range: VolumeRange,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            volume_range: VolumeRange::default(),
        }
    }
}

impl PlaybackConfig {
    pub fn initial_volume(&self) -> Volume {
        Volume::new(self.initial_volume).unwrap_or_default()
    }
}

/// Top-level settings file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    pub waveform: WaveformOptions,
    pub playback: PlaybackConfig,
}

impl PlayerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PlayerConfig = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        info!("loaded settings from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let waveform = &self.waveform;
        if !(waveform.padding.is_finite() && waveform.padding >= 0.0) {
            return Err(Error::Config(format!(
                "padding must be a non-negative number, got {}",
                waveform.padding
            )));
        }
        if waveform.label_interval_secs == 0 {
            return Err(Error::Config("label_interval_secs must be at least 1".into()));
        }
        if waveform.bucketing == Bucketing::Fixed(0) {
            return Err(Error::Config("fixed bucketing needs at least one bucket".into()));
        }
        Ok(())
    }
}

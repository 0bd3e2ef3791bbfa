// src/audio/volume.rs
//! The single gain stage setting.

use serde::Deserialize;

/// Gain in [0, 1]. Defaults to full volume.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume(f32);

impl Volume {
    pub const FULL: Volume = Volume(1.0);
    pub const MUTE: Volume = Volume(0.0);

    /// Clamp `level` into [0, 1]. Returns `None` for NaN or infinities.
    pub fn new(level: f32) -> Option<Self> {
        level.is_finite().then(|| Volume(level.clamp(0.0, 1.0)))
    }

    /// Map a slider in [-1, 1] onto [0, 1].
    pub fn from_signed(level: f32) -> Option<Self> {
        Self::new((level + 1.0) / 2.0)
    }

    pub fn gain(self) -> f32 {
        self.0
    }

    /// Whole percent, for display.
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume::FULL
    }
}

/// How raw volume input from the UI is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeRange {
    /// Input is already in [0, 1].
    #[default]
    Unit,
    /// Input is a slider in [-1, 1].
    Signed,
}

impl VolumeRange {
    pub fn to_volume(self, level: f32) -> Option<Volume> {
        match self {
            VolumeRange::Unit => Volume::new(level),
            VolumeRange::Signed => Volume::from_signed(level),
        }
    }
}

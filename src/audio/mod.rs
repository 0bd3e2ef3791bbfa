// src/audio/mod.rs
//! Audio module - handles decoding, output devices and the playback engine.

pub mod buffer;
pub mod decoder;
pub mod device;
pub mod engine;
pub mod source;
pub mod volume;

// Re-export commonly used types
pub use buffer::DecodedAudio;
pub use decoder::decode;
pub use device::{AudioDevice, ManualDevice, OutputNode, RodioDevice};
pub use engine::{PlaybackEngine, PlaybackState};
pub use volume::{Volume, VolumeRange};

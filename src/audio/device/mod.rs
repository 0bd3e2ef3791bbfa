// src/audio/device/mod.rs
//! The host audio clock and output graph, behind a trait so the engine can
//! run against real hardware or a deterministic test device.

pub mod clock;
pub mod host;
pub mod manual;

use std::sync::Arc;

use super::buffer::DecodedAudio;
use super::volume::Volume;
use crate::error::OutputError;

pub use self::clock::HostClock;
pub use self::host::RodioDevice;
pub use self::manual::{ManualDevice, NodeEvent};

/// An audio context: a suspendable clock plus a factory for output nodes.
pub trait AudioDevice {
    type Node: OutputNode;

    /// Clock time in seconds. Only advances while the device is resumed.
    fn current_time(&self) -> f64;

    /// Let the clock run. Must complete before `current_time` is trusted.
    fn resume(&mut self) -> Result<(), OutputError>;

    /// Freeze the clock and silence output.
    fn suspend(&mut self) -> Result<(), OutputError>;

    /// Create a buffer source feeding a gain stage and start it `offset_secs`
    /// into the track.
    fn start(
        &mut self,
        buffer: Arc<DecodedAudio>,
        offset_secs: f64,
        volume: Volume,
    ) -> Result<Self::Node, OutputError>;
}

/// One live buffer source + gain stage. Stopping releases both.
pub trait OutputNode {
    fn set_volume(&mut self, volume: Volume);

    fn stop(self);
}

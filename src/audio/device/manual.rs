// src/audio/device/manual.rs
//! A deterministic audio device: the clock moves only when told to, and
//! every node lifecycle event is recorded. Used by tests and headless runs.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{AudioDevice, OutputNode};
use crate::audio::buffer::DecodedAudio;
use crate::audio::volume::Volume;
use crate::error::OutputError;

/// Something that happened to an output node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEvent {
    Started { id: u64, offset: f64, volume: Volume },
    VolumeChanged { id: u64, volume: Volume },
    Stopped { id: u64 },
}

#[derive(Debug, Default)]
struct ManualState {
    now: f64,
    running: bool,
    next_id: u64,
    live: Vec<u64>,
    events: Vec<NodeEvent>,
}

/// Cloneable handle; all clones share one clock and event log.
#[derive(Debug, Clone, Default)]
pub struct ManualDevice {
    state: Arc<Mutex<ManualState>>,
}

impl ManualDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move the clock forward, but only while resumed.
    pub fn advance(&self, secs: f64) {
        let mut state = self.lock();
        if state.running {
            state.now += secs;
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    /// Nodes started and not yet stopped.
    pub fn live_nodes(&self) -> usize {
        self.lock().live.len()
    }

    pub fn events(&self) -> Vec<NodeEvent> {
        self.lock().events.clone()
    }
}

impl AudioDevice for ManualDevice {
    type Node = ManualNode;

    fn current_time(&self) -> f64 {
        self.lock().now
    }

    fn resume(&mut self) -> Result<(), OutputError> {
        self.lock().running = true;
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), OutputError> {
        self.lock().running = false;
        Ok(())
    }

    fn start(
        &mut self,
        _buffer: Arc<DecodedAudio>,
        offset_secs: f64,
        volume: Volume,
    ) -> Result<ManualNode, OutputError> {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.live.push(id);
        state.events.push(NodeEvent::Started {
            id,
            offset: offset_secs,
            volume,
        });
        Ok(ManualNode {
            id,
            device: self.clone(),
        })
    }
}

pub struct ManualNode {
    id: u64,
    device: ManualDevice,
}

impl OutputNode for ManualNode {
    fn set_volume(&mut self, volume: Volume) {
        self.device
            .lock()
            .events
            .push(NodeEvent::VolumeChanged { id: self.id, volume });
    }

    fn stop(self) {
        let mut state = self.device.lock();
        state.live.retain(|&id| id != self.id);
        state.events.push(NodeEvent::Stopped { id: self.id });
    }
}

// src/audio/device/host.rs
//! Real audio output through rodio, driven from a dedicated audio thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread;

use log::{debug, warn};
use rodio::{OutputStream, Sink};

use super::{AudioDevice, HostClock, OutputNode};
use crate::audio::buffer::DecodedAudio;
use crate::audio::source::BufferSource;
use crate::audio::volume::Volume;
use crate::error::OutputError;

/// Commands sent to the audio thread.
enum DeviceCommand {
    Start {
        id: u64,
        source: BufferSource,
        volume: f32,
    },
    SetVolume {
        id: u64,
        volume: f32,
    },
    Stop {
        id: u64,
    },
    Suspend,
    Resume,
}

/// Audio context backed by the default output device.
///
/// `OutputStream` is not `Send`, so a dedicated thread owns it together with
/// the single live `Sink`; this handle only talks to it over a channel.
pub struct RodioDevice {
    /// Sender to the audio thread for commands
    cmd_tx: Sender<DeviceCommand>,
    clock: HostClock,
    next_id: u64,
}

impl RodioDevice {
    /// Open the default output device. Fails when the host has none.
    pub fn open() -> Result<Self, OutputError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<DeviceCommand>();
        let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), OutputError>>(1);

        thread::Builder::new()
            .name("wavedeck-audio".into())
            .spawn(move || audio_thread(cmd_rx, ready_tx))
            .map_err(|err| OutputError::Unavailable(err.to_string()))?;

        ready_rx.recv().map_err(|_| OutputError::Disconnected)??;
        Ok(Self {
            cmd_tx,
            clock: HostClock::new(),
            next_id: 0,
        })
    }

    fn send(&self, cmd: DeviceCommand) -> Result<(), OutputError> {
        self.cmd_tx.send(cmd).map_err(|_| OutputError::Disconnected)
    }
}

impl AudioDevice for RodioDevice {
    type Node = RodioNode;

    fn current_time(&self) -> f64 {
        self.clock.now()
    }

    fn resume(&mut self) -> Result<(), OutputError> {
        self.send(DeviceCommand::Resume)?;
        self.clock.resume();
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), OutputError> {
        self.send(DeviceCommand::Suspend)?;
        self.clock.suspend();
        Ok(())
    }

    fn start(
        &mut self,
        buffer: Arc<DecodedAudio>,
        offset_secs: f64,
        volume: Volume,
    ) -> Result<RodioNode, OutputError> {
        self.next_id += 1;
        let id = self.next_id;
        self.send(DeviceCommand::Start {
            id,
            source: BufferSource::new(buffer, offset_secs),
            volume: volume.gain(),
        })?;
        Ok(RodioNode {
            id,
            cmd_tx: self.cmd_tx.clone(),
        })
    }
}

/// Handle to the sink currently playing on the audio thread.
pub struct RodioNode {
    id: u64,
    cmd_tx: Sender<DeviceCommand>,
}

impl OutputNode for RodioNode {
    fn set_volume(&mut self, volume: Volume) {
        let _ = self.cmd_tx.send(DeviceCommand::SetVolume {
            id: self.id,
            volume: volume.gain(),
        });
    }

    fn stop(self) {
        let _ = self.cmd_tx.send(DeviceCommand::Stop { id: self.id });
    }
}

fn audio_thread(cmd_rx: Receiver<DeviceCommand>, ready_tx: SyncSender<Result<(), OutputError>>) {
    let (stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(err) => {
            let _ = ready_tx.send(Err(OutputError::Unavailable(err.to_string())));
            return;
        }
    };
    let _ = ready_tx.send(Ok(()));

    // Current sink (if any), tagged with the node id that owns it
    let mut sink: Option<(u64, Sink)> = None;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            DeviceCommand::Start { id, source, volume } => {
                if let Some((_, old)) = sink.take() {
                    old.stop();
                }
                match Sink::try_new(&handle) {
                    Ok(new_sink) => {
                        new_sink.set_volume(volume);
                        new_sink.append(source);
                        new_sink.play();
                        debug!("node {id} started");
                        sink = Some((id, new_sink));
                    }
                    Err(err) => warn!("could not create sink: {err}"),
                }
            }
            DeviceCommand::SetVolume { id, volume } => {
                if let Some((current, s)) = &sink {
                    if *current == id {
                        s.set_volume(volume);
                    }
                }
            }
            DeviceCommand::Stop { id } => {
                if sink.as_ref().is_some_and(|(current, _)| *current == id) {
                    if let Some((_, s)) = sink.take() {
                        s.stop();
                    }
                    debug!("node {id} released");
                }
            }
            DeviceCommand::Suspend => {
                if let Some((_, s)) = &sink {
                    s.pause();
                }
            }
            DeviceCommand::Resume => {
                if let Some((_, s)) = &sink {
                    s.play();
                }
            }
        }
    }
    // If the command channel closed, make sure to stop the sink.
    if let Some((_, s)) = sink.take() {
        s.stop();
    }
    // Keep stream alive until thread exits
    drop(stream);
}

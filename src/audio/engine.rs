// src/audio/engine.rs
//! Playback engine: owns the decoded track and runs the transport state machine.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use super::buffer::DecodedAudio;
use super::decoder::decode;
use super::device::{AudioDevice, OutputNode};
use super::volume::Volume;
use crate::asset::EncodedAsset;
use crate::error::{Error, PlaybackError};

/// Where the transport is.
///
/// ```text
/// Idle --load--> Ready --play--> Playing --pause--> Paused --play--> Playing
/// Playing | Paused --stop--> Ready
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Ready,
    Playing,
    Paused,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaybackState::Idle => "Idle",
            PlaybackState::Ready => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };
        write!(f, "{}", s)
    }
}

/// Clock bookkeeping. While playing, `clock - started_at` is the track
/// position; otherwise `paused_at` is.
#[derive(Debug, Default, Clone, Copy)]
struct Timeline {
    started_at: f64,
    paused_at: f64,
}

/// Plays one decoded track on an [`AudioDevice`].
///
/// A new engine is needed per track: loading twice is refused.
pub struct PlaybackEngine<D: AudioDevice> {
    device: D,
    buffer: Option<Arc<DecodedAudio>>,
    /// Live buffer source + gain stage, present only while playing
    node: Option<D::Node>,
    state: PlaybackState,
    timeline: Timeline,
    volume: Volume,
}

impl<D: AudioDevice> PlaybackEngine<D> {
    /// Create an idle engine at full volume.
    pub fn new(device: D) -> Self {
        Self::with_volume(device, Volume::FULL)
    }

    pub fn with_volume(device: D, volume: Volume) -> Self {
        Self {
            device,
            buffer: None,
            node: None,
            state: PlaybackState::Idle,
            timeline: Timeline::default(),
            volume,
        }
    }

    /// Decode `asset` and keep the result. Idle -> Ready.
    pub fn load(&mut self, asset: EncodedAsset) -> Result<&DecodedAudio, Error> {
        if self.buffer.is_some() {
            return Err(PlaybackError::AlreadyLoaded.into());
        }
        let audio = decode(asset)?;
        Ok(self.load_decoded(audio)?)
    }

    /// Adopt audio that is already decoded. Idle -> Ready.
    pub fn load_decoded(&mut self, audio: DecodedAudio) -> Result<&DecodedAudio, PlaybackError> {
        if self.buffer.is_some() {
            return Err(PlaybackError::AlreadyLoaded);
        }
        self.state = PlaybackState::Ready;
        self.timeline = Timeline::default();
        debug!("engine ready: {:.2}s loaded", audio.duration_secs());
        Ok(&**self.buffer.insert(Arc::new(audio)))
    }

    /// Start or resume playback from the stored offset. Idempotent while playing.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        let buffer = self.buffer.clone().ok_or(PlaybackError::NotLoaded)?;
        if self.state == PlaybackState::Playing {
            debug!("play ignored: already playing");
            return Ok(());
        }

        let offset = self.timeline.paused_at;
        self.device.resume()?;
        let node = match self.device.start(buffer, offset, self.volume) {
            Ok(node) => node,
            Err(err) => {
                if let Err(suspend_err) = self.device.suspend() {
                    warn!("could not suspend after failed start: {suspend_err}");
                }
                return Err(err.into());
            }
        };

        self.timeline.started_at = self.device.current_time() - offset;
        self.timeline.paused_at = 0.0;
        self.node = Some(node);
        self.state = PlaybackState::Playing;
        debug!("playing from {offset:.3}s");
        Ok(())
    }

    /// Pause, or stop when `reset` is set (the next play starts from 0).
    ///
    /// Output halts immediately in both cases; only the resume offset differs.
    pub fn pause(&mut self, reset: bool) -> Result<(), PlaybackError> {
        match self.state {
            PlaybackState::Playing => {
                self.device.suspend()?;
                let position = self.position_at(self.device.current_time());
                if let Some(node) = self.node.take() {
                    node.stop();
                }
                self.timeline.paused_at = if reset { 0.0 } else { position };
                self.state = if reset {
                    PlaybackState::Ready
                } else {
                    PlaybackState::Paused
                };
                debug!("{} at {position:.3}s", if reset { "stopped" } else { "paused" });
                Ok(())
            }
            PlaybackState::Paused => {
                if reset {
                    self.timeline.paused_at = 0.0;
                    self.state = PlaybackState::Ready;
                    debug!("stopped while paused");
                }
                Ok(())
            }
            PlaybackState::Idle | PlaybackState::Ready => Err(PlaybackError::NotPlaying),
        }
    }

    /// `pause(true)`.
    pub fn stop(&mut self) -> Result<(), PlaybackError> {
        self.pause(true)
    }

    /// Store a new gain in [0, 1] and apply it to the live node, if any.
    ///
    /// Out-of-range input is clamped; NaN and infinities are ignored.
    pub fn change_volume(&mut self, level: f32) {
        match Volume::new(level) {
            Some(volume) => self.set_volume(volume),
            None => warn!("ignoring non-finite volume {level}"),
        }
    }

    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
        if let Some(node) = self.node.as_mut() {
            node.set_volume(volume);
        }
    }

    /// Current track position in seconds, computed from the clock.
    pub fn elapsed(&self) -> f64 {
        match self.state {
            PlaybackState::Playing => self.position_at(self.device.current_time()),
            PlaybackState::Paused => self.timeline.paused_at,
            PlaybackState::Idle | PlaybackState::Ready => 0.0,
        }
    }

    fn position_at(&self, clock: f64) -> f64 {
        let duration = self.buffer.as_ref().map_or(0.0, |b| b.duration_secs());
        (clock - self.timeline.started_at).clamp(0.0, duration)
    }

    pub fn current_buffer(&self) -> Option<&DecodedAudio> {
        self.buffer.as_deref()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

impl<D: AudioDevice> Drop for PlaybackEngine<D> {
    fn drop(&mut self) {
        if let Some(node) = self.node.take() {
            node.stop();
        }
    }
}

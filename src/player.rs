// src/player.rs
//! The facade UI code talks to: load one asset, draw its waveform, drive playback.

use std::thread::{self, JoinHandle};

use log::{error, info, warn};

use crate::asset::EncodedAsset;
use crate::audio::{AudioDevice, DecodedAudio, PlaybackEngine, PlaybackState, Volume, VolumeRange};
use crate::config::PlayerConfig;
use crate::error::{Error, PlaybackError, Result};
use crate::waveform::{TimeAxis, WaveformLayout, WaveformOptions, compute_layout, extract};

/// Where the waveform ends up. Implemented by the UI layer.
pub trait RenderTarget {
    /// Current (width, height) of the drawing area.
    fn dimensions(&self) -> (f64, f64);

    /// Replace whatever was drawn before with `layout`.
    fn render(&mut self, layout: WaveformLayout);
}

/// Log a failure on its way out to the caller.
fn report<T, E: Into<Error>>(action: &str, result: std::result::Result<T, E>) -> Result<T> {
    result.map_err(|err| {
        let err = err.into();
        error!("{action} failed: {err}");
        err
    })
}

/// One loaded track plus the surface its waveform is drawn on.
pub struct Player<D: AudioDevice, T: RenderTarget> {
    engine: PlaybackEngine<D>,
    target: T,
    options: WaveformOptions,
    volume_range: VolumeRange,
}

impl<D: AudioDevice, T: RenderTarget> Player<D, T> {
    /// Check the asset, decode it and draw the waveform onto `target`.
    ///
    /// Transport calls are only possible once this has returned.
    pub fn init(asset: EncodedAsset, target: T, device: D, config: &PlayerConfig) -> Result<Self> {
        report("asset check", asset.ensure_audio())?;
        info!("loading {} ({} bytes)", asset.media_type(), asset.bytes().len());

        let mut engine = PlaybackEngine::with_volume(device, config.playback.initial_volume());
        report("load", engine.load(asset).map(|_| ()))?;

        let mut player = Self {
            engine,
            target,
            options: config.waveform.clone(),
            volume_range: config.playback.volume_range,
        };
        player.draw_chart()?;
        Ok(player)
    }

    /// Recompute the layout for the target's current size and hand it over.
    pub fn draw_chart(&mut self) -> Result<()> {
        let buffer = report(
            "draw",
            self.engine.current_buffer().ok_or(PlaybackError::NotLoaded),
        )?;
        let layout = layout_for(buffer, self.target.dimensions(), &self.options);
        self.target.render(layout);
        Ok(())
    }

    pub fn play(&mut self) -> Result<()> {
        report("play", self.engine.play())
    }

    /// Pause; with `reset` the next play starts from the beginning.
    pub fn pause(&mut self, reset: bool) -> Result<()> {
        report("pause", self.engine.pause(reset))
    }

    pub fn stop(&mut self) -> Result<()> {
        self.pause(true)
    }

    /// Apply raw slider input, interpreted through the configured range.
    pub fn change_volume(&mut self, level: f32) {
        match self.volume_range.to_volume(level) {
            Some(volume) => self.engine.set_volume(volume),
            None => warn!("ignoring non-finite volume {level}"),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.engine.state()
    }

    pub fn elapsed(&self) -> f64 {
        self.engine.elapsed()
    }

    pub fn duration(&self) -> f64 {
        self.engine.current_buffer().map_or(0.0, DecodedAudio::duration_secs)
    }

    pub fn volume(&self) -> Volume {
        self.engine.volume()
    }

    pub fn volume_range(&self) -> VolumeRange {
        self.volume_range
    }

    pub fn engine(&self) -> &PlaybackEngine<D> {
        &self.engine
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

impl<D, T> Player<D, T>
where
    D: AudioDevice + Send + 'static,
    D::Node: Send,
    T: RenderTarget + Send + 'static,
{
    /// Run [`Player::init`] on a worker thread.
    pub fn spawn_init(
        asset: EncodedAsset,
        target: T,
        device: D,
        config: PlayerConfig,
    ) -> PendingLoad<D, T> {
        let handle = thread::spawn(move || Player::init(asset, target, device, &config));
        PendingLoad { handle }
    }
}

/// A load running in the background. [`PendingLoad::wait`] must return
/// before any transport call is made.
pub struct PendingLoad<D: AudioDevice, T: RenderTarget> {
    handle: JoinHandle<Result<Player<D, T>>>,
}

impl<D: AudioDevice, T: RenderTarget> PendingLoad<D, T> {
    pub fn is_ready(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn wait(self) -> Result<Player<D, T>> {
        self.handle.join().map_err(|_| {
            error!("load worker panicked");
            Error::LoadAborted
        })?
    }
}

/// Extract and lay out one buffer. The series is dropped once laid out.
pub fn layout_for(
    buffer: &DecodedAudio,
    container: (f64, f64),
    options: &WaveformOptions,
) -> WaveformLayout {
    let series = extract(buffer, options.bucketing);
    let axis = TimeAxis::from_duration(buffer.duration_secs(), options.label_interval_secs);
    compute_layout(&series, &axis, container, options)
}

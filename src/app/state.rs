// src/app/state.rs
//! Application state management.

use std::path::Path;

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::info;
use ratatui::Frame;

use crate::{
    asset::EncodedAsset,
    audio::{PlaybackState, RodioDevice, VolumeRange},
    config::PlayerConfig,
    player::{PendingLoad, Player},
    ui::{
        keybindings::{TransportAction, key_to_action},
        layout::{chart_inner, compute_layout},
        widgets::{TransportView, WaveformCanvas, render_transport_panel, render_waveform},
    },
};

/// Volume change per key press.
const VOLUME_STEP: f32 = 0.05;

type TerminalPlayer = Player<RodioDevice, WaveformCanvas>;

/// Main application state.
pub struct App {
    /// File name shown in the panel title
    pub title: String,
    /// Loaded player, once the background load has finished
    player: Option<TerminalPlayer>,
    /// Background load still in flight
    pending: Option<PendingLoad<RodioDevice, WaveformCanvas>>,
    /// Last error to show the user
    pub status: Option<String>,
}

impl App {
    /// Read `path`, open the audio output and start loading in the background.
    pub fn new(path: &Path, config: PlayerConfig, chart_cells: (u16, u16)) -> Result<Self> {
        let asset = EncodedAsset::from_path(path)?;
        asset.ensure_audio()?;
        let device = RodioDevice::open()?;

        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!("opening {title}");

        let pending = Player::spawn_init(asset, WaveformCanvas::new(chart_cells), device, config);
        Ok(Self {
            title,
            player: None,
            pending: Some(pending),
            status: None,
        })
    }

    /// Pick up the background load once it has finished.
    pub fn poll_load(&mut self) {
        if !self.pending.as_ref().is_some_and(PendingLoad::is_ready) {
            return;
        }
        if let Some(pending) = self.pending.take() {
            match pending.wait() {
                Ok(player) => self.player = Some(player),
                Err(err) => self.status = Some(format!("Could not load: {err}")),
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        let action = key_to_action(&key);
        if action == TransportAction::Quit {
            if let Some(player) = self.player.as_mut() {
                if player.state() == PlaybackState::Playing {
                    let _ = player.stop();
                }
            }
            return true;
        }

        let Some(player) = self.player.as_mut() else {
            return false;
        };

        let result = match action {
            TransportAction::TogglePlay => {
                if player.state() == PlaybackState::Playing {
                    player.pause(false)
                } else {
                    player.play()
                }
            }
            TransportAction::Stop => player.stop(),
            TransportAction::VolumeUp => {
                nudge_volume(player, VOLUME_STEP);
                Ok(())
            }
            TransportAction::VolumeDown => {
                nudge_volume(player, -VOLUME_STEP);
                Ok(())
            }
            TransportAction::Quit | TransportAction::None => Ok(()),
        };

        self.status = result.err().map(|err| err.to_string());
        false
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());

        if let Some(player) = self.player.as_mut() {
            let cells = chart_inner(layout.chart);
            if player.target().cells() != cells {
                player.target_mut().resize(cells);
                if let Err(err) = player.draw_chart() {
                    self.status = Some(err.to_string());
                }
            }
        }

        let (chart, view) = match self.player.as_ref() {
            Some(player) => {
                let progress = if player.duration() > 0.0 {
                    player.elapsed() / player.duration()
                } else {
                    0.0
                };
                (
                    player.target().layout().map(|l| (l, progress)),
                    TransportView {
                        title: &self.title,
                        state: player.state(),
                        elapsed: player.elapsed(),
                        duration: player.duration(),
                        volume: player.volume(),
                        status: self.status.as_deref(),
                    },
                )
            }
            None => (
                None,
                TransportView {
                    title: &self.title,
                    state: PlaybackState::Idle,
                    elapsed: 0.0,
                    duration: 0.0,
                    volume: Default::default(),
                    status: self.status.as_deref(),
                },
            ),
        };

        render_waveform(
            f,
            layout.chart,
            chart.map(|(l, _)| l),
            chart.map_or(0.0, |(_, p)| p),
        );
        render_transport_panel(f, layout.transport, &view);
    }
}

/// Move the volume by `delta` in [0, 1] terms, whatever range the player expects.
fn nudge_volume(player: &mut TerminalPlayer, delta: f32) {
    let level = (player.volume().gain() + delta).clamp(0.0, 1.0);
    let raw = match player.volume_range() {
        VolumeRange::Unit => level,
        VolumeRange::Signed => level * 2.0 - 1.0,
    };
    player.change_volume(raw);
}

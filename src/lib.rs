// src/lib.rs
//! Wavedeck - decode an audio file, draw its waveform, and play it back.
//!
//! This library provides the playback engine, the waveform pipeline and the
//! facade a UI drives; the terminal front-end lives in `ui` and `app`.

pub mod app;
pub mod asset;
pub mod audio;
pub mod config;
pub mod error;
pub mod player;
pub mod ui;
pub mod waveform;

pub use error::{Error, Result};
pub use player::{PendingLoad, Player, RenderTarget};

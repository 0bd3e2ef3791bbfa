// src/error.rs
//! Error types shared across the player.

use std::io;

use thiserror::Error;

/// Failure to turn encoded bytes into samples. Fatal to the current load.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The container or codec is not one we can decode.
    #[error("unsupported audio format: {0}")]
    Unsupported(String),

    /// The format was recognised but the stream is broken.
    #[error("malformed audio stream: {0}")]
    Malformed(String),

    /// The source bytes could not be read.
    #[error("audio source could not be read: {0}")]
    Unreadable(#[from] io::Error),

    /// Decoding succeeded but produced no frames.
    #[error("audio stream contains no samples")]
    Empty,
}

/// Errors raised by the host audio output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// No output device could be opened.
    #[error("audio output unavailable: {0}")]
    Unavailable(String),

    /// The audio thread went away.
    #[error("audio output thread disconnected")]
    Disconnected,
}

/// Transport precondition failures.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// `play` was called before any audio was loaded.
    #[error("no audio loaded; load a track before calling play")]
    NotLoaded,

    /// `pause` was called while nothing is playing or paused.
    #[error("nothing is playing; call play before pause")]
    NotPlaying,

    /// The engine already holds a track. Use a fresh engine per asset.
    #[error("a track is already loaded into this engine")]
    AlreadyLoaded,

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Top-level error for the player facade.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// The caller handed over something that is not audio.
    #[error("expected an audio asset, got {media_type}")]
    InvalidAssetType { media_type: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The background load worker died before reporting a result.
    #[error("background load was aborted")]
    LoadAborted,
}

impl From<OutputError> for Error {
    fn from(err: OutputError) -> Self {
        Error::Playback(PlaybackError::Output(err))
    }
}

/// Result alias for facade operations.
pub type Result<T> = std::result::Result<T, Error>;

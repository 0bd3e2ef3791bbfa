// src/waveform/mod.rs
//! Static waveform pipeline: extract amplitudes, then lay them out.

pub mod extractor;
pub mod geometry;
pub mod scale;
pub mod time_axis;

pub use extractor::{Bucketing, WaveformSeries, extract};
pub use geometry::{
    Bar, GridLine, Margin, Orientation, TimeTick, WaveformLayout, WaveformOptions, compute_layout,
};
pub use time_axis::{AxisMark, TimeAxis, format_timestamp};

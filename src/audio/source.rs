// src/audio/source.rs
//! A rodio source that streams a shared decoded buffer from a frame offset.

use std::sync::Arc;
use std::time::Duration;

use rodio::Source;

use super::buffer::DecodedAudio;

/// Yields interleaved samples of `buffer`, starting at `start_frame`.
///
/// The buffer is shared, so starting a new source on every resume copies nothing.
pub struct BufferSource {
    buffer: Arc<DecodedAudio>,
    /// Interleaved position: frame * channels + channel
    position: usize,
    end: usize,
}

impl BufferSource {
    /// Start playback `offset_secs` into the buffer. Offsets past the end yield nothing.
    pub fn new(buffer: Arc<DecodedAudio>, offset_secs: f64) -> Self {
        let channels = buffer.channel_count();
        let frames = buffer.frames();
        let start_frame = (offset_secs.max(0.0) * f64::from(buffer.sample_rate())) as usize;
        let start_frame = start_frame.min(frames);
        Self {
            position: start_frame * channels,
            end: frames * channels,
            buffer,
        }
    }

    /// Samples left, counted across all channels.
    pub fn remaining(&self) -> usize {
        self.end - self.position
    }
}

impl Iterator for BufferSource {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.end {
            return None;
        }
        let channels = self.buffer.channel_count();
        let sample = self
            .buffer
            .sample(self.position % channels, self.position / channels);
        self.position += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl Source for BufferSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.remaining())
    }

    fn channels(&self) -> u16 {
        self.buffer.channel_count() as u16
    }

    fn sample_rate(&self) -> u32 {
        self.buffer.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f64(self.buffer.duration_secs()))
    }
}

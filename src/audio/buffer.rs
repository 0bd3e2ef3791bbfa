// src/audio/buffer.rs
//! Decoded PCM held in memory for the lifetime of a loaded track.

use crate::error::DecodeError;

/// Planar decoded audio: one `f32` vector per channel, samples in about [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl DecodedAudio {
    /// Build from planar channel data. Every channel must have the same length.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self, DecodeError> {
        if sample_rate == 0 {
            return Err(DecodeError::Malformed("sample rate of 0 Hz".into()));
        }
        let Some(first) = channels.first() else {
            return Err(DecodeError::Empty);
        };
        let frames = first.len();
        if channels.iter().any(|c| c.len() != frames) {
            return Err(DecodeError::Malformed("channels differ in length".into()));
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Split interleaved samples into planar channels. A trailing partial frame is dropped.
    pub fn from_interleaved(
        sample_rate: u32,
        channel_count: u16,
        interleaved: &[f32],
    ) -> Result<Self, DecodeError> {
        let count = usize::from(channel_count);
        if count == 0 {
            return Err(DecodeError::Malformed("stream declares no channels".into()));
        }
        let frames = interleaved.len() / count;
        let mut channels = vec![Vec::with_capacity(frames); count];
        for frame in interleaved.chunks_exact(count) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }
        Self::new(sample_rate, channels)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Track length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.sample_rate)
    }

    /// Sample at `frame` on `channel`, zero when out of range.
    pub(crate) fn sample(&self, channel: usize, frame: usize) -> f32 {
        self.channels
            .get(channel)
            .and_then(|c| c.get(frame))
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_frames_over_rate() {
        let audio = DecodedAudio::new(4, vec![vec![0.0; 10]]).unwrap();
        assert_eq!(audio.frames(), 10);
        assert_eq!(audio.duration_secs(), 2.5);
    }

    #[test]
    fn deinterleaves_stereo() {
        let audio = DecodedAudio::from_interleaved(8000, 2, &[0.1, -0.1, 0.2, -0.2, 0.3]).unwrap();
        assert_eq!(audio.channel_count(), 2);
        assert_eq!(audio.channel(0).unwrap(), &[0.1, 0.2]);
        assert_eq!(audio.channel(1).unwrap(), &[-0.1, -0.2]);
    }

    #[test]
    fn rejects_inconsistent_shapes() {
        assert!(matches!(
            DecodedAudio::new(0, vec![vec![0.0]]),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            DecodedAudio::new(44100, vec![]),
            Err(DecodeError::Empty)
        ));
        assert!(matches!(
            DecodedAudio::new(44100, vec![vec![0.0; 3], vec![0.0; 2]]),
            Err(DecodeError::Malformed(_))
        ));
    }
}

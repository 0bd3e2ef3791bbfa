// src/waveform/extractor.rs
//! Reduce decoded audio to a short, normalized amplitude series.

use serde::Deserialize;

use crate::audio::DecodedAudio;

/// How the channel is cut into buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucketing {
    /// One bucket per second of audio: `ceil(frames / sample_rate)` buckets.
    #[default]
    PerSecond,
    /// Exactly `n` near-equal contiguous blocks regardless of length.
    Fixed(usize),
}

/// Rectified-mean amplitudes in [0, 1], loudest bucket exactly 1.
///
/// All zeros when the source is silent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaveformSeries(Vec<f64>);

impl WaveformSeries {
    /// Divide every value by the maximum. A zero maximum leaves the series as is.
    pub fn normalized(mut values: Vec<f64>) -> Self {
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        if max > 0.0 {
            for v in &mut values {
                *v /= max;
            }
        }
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(min, max)`, or `None` for an empty series.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let first = *self.0.first()?;
        Some(
            self.0
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

/// Summarise channel 0 of `audio` as a bar-chart series.
pub fn extract(audio: &DecodedAudio, bucketing: Bucketing) -> WaveformSeries {
    let Some(samples) = audio.channel(0) else {
        return WaveformSeries::default();
    };

    let raw: Vec<f64> = match bucketing {
        Bucketing::PerSecond => samples
            .chunks(audio.sample_rate() as usize)
            .map(rectified_mean)
            .collect(),
        Bucketing::Fixed(count) => (0..count)
            .map(|i| {
                let start = i * samples.len() / count;
                let end = (i + 1) * samples.len() / count;
                rectified_mean(&samples[start..end])
            })
            .collect(),
    };

    WaveformSeries::normalized(raw)
}

fn rectified_mean(block: &[f32]) -> f64 {
    if block.is_empty() {
        return 0.0;
    }
    let sum: f64 = block.iter().map(|s| f64::from(s.abs())).sum();
    sum / block.len() as f64
}

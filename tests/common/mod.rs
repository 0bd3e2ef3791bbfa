// tests/common/mod.rs
//! Shared fixtures: in-memory WAV synthesis and a recording render target.

#![allow(dead_code)]

use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};
use wavedeck::RenderTarget;
use wavedeck::asset::EncodedAsset;
use wavedeck::waveform::WaveformLayout;

/// 16-bit PCM WAV bytes; `frame(i)` yields one sample per channel.
pub fn wav_bytes(
    sample_rate: u32,
    channels: u16,
    frames: usize,
    frame: impl Fn(usize) -> Vec<f32>,
) -> Vec<u8> {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..frames {
            for sample in frame(i) {
                writer
                    .write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
                    .unwrap();
            }
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// A mono sine at 440 Hz, sniffed like a real upload.
pub fn sine_asset(sample_rate: u32, secs: f64, amplitude: f32) -> EncodedAsset {
    let frames = (f64::from(sample_rate) * secs) as usize;
    let bytes = wav_bytes(sample_rate, 1, frames, |i| {
        let t = i as f32 / sample_rate as f32;
        vec![amplitude * (t * 440.0 * std::f32::consts::TAU).sin()]
    });
    EncodedAsset::sniff(bytes)
}

/// Keeps every layout it was handed.
#[derive(Debug, Clone)]
pub struct Recorder {
    pub size: (f64, f64),
    pub layouts: Vec<WaveformLayout>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: (width, height),
            layouts: Vec::new(),
        }
    }

    pub fn last(&self) -> &WaveformLayout {
        self.layouts.last().expect("nothing rendered")
    }
}

impl RenderTarget for Recorder {
    fn dimensions(&self) -> (f64, f64) {
        self.size
    }

    fn render(&mut self, layout: WaveformLayout) {
        self.layouts.push(layout);
    }
}

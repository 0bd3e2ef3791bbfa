// src/audio/decoder.rs
//! Decode an encoded asset into planar PCM using rodio's decoder.

use std::io::Cursor;

use log::info;
use rodio::decoder::DecoderError;
use rodio::{Decoder, Source};

use super::buffer::DecodedAudio;
use crate::asset::EncodedAsset;
use crate::error::DecodeError;

/// Decode the whole asset up front. The asset is consumed.
pub fn decode(asset: EncodedAsset) -> Result<DecodedAudio, DecodeError> {
    let media_type = asset.media_type().to_string();
    let source = Decoder::new(Cursor::new(asset.into_bytes())).map_err(|err| match err {
        DecoderError::UnrecognizedFormat => DecodeError::Unsupported(media_type.clone()),
        other => DecodeError::Malformed(other.to_string()),
    })?;

    let sample_rate = source.sample_rate();
    let channels = source.channels();

    // Convert to f32 so samples land in [-1, 1]
    let interleaved: Vec<f32> = source.convert_samples::<f32>().collect();
    if interleaved.len() < usize::from(channels.max(1)) {
        return Err(DecodeError::Empty);
    }

    let audio = DecodedAudio::from_interleaved(sample_rate, channels, &interleaved)?;
    info!(
        "decoded {}: {} Hz, {} channel(s), {:.2}s",
        media_type,
        audio.sample_rate(),
        audio.channel_count(),
        audio.duration_secs()
    );
    Ok(audio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_unsupported() {
        let asset = EncodedAsset::new(vec![0x42; 512], "audio/mpeg");
        let err = decode(asset).unwrap_err();
        assert!(
            matches!(err, DecodeError::Unsupported(_) | DecodeError::Malformed(_)),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn empty_bytes_do_not_decode() {
        let asset = EncodedAsset::new(Vec::new(), "audio/wav");
        assert!(decode(asset).is_err());
    }
}

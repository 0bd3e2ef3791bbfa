// tests/decode.rs
mod common;

use approx::assert_abs_diff_eq;
use wavedeck::asset::EncodedAsset;
use wavedeck::asset::detection::MediaCategory;
use wavedeck::audio::decode;
use wavedeck::error::DecodeError;

use common::wav_bytes;

#[test]
fn stereo_wav_keeps_channels_apart() {
    let bytes = wav_bytes(8000, 2, 8000 * 3, |_| vec![0.5, -0.25]);
    let asset = EncodedAsset::sniff(bytes);
    assert_eq!(asset.category(), MediaCategory::Audio);

    let audio = decode(asset).unwrap();
    assert_eq!(audio.sample_rate(), 8000);
    assert_eq!(audio.channel_count(), 2);
    assert_eq!(audio.frames(), 24_000);
    assert_abs_diff_eq!(audio.duration_secs(), 3.0);

    let left = audio.channel(0).unwrap();
    let right = audio.channel(1).unwrap();
    assert_abs_diff_eq!(left[100], 0.5, epsilon = 1e-3);
    assert_abs_diff_eq!(right[100], -0.25, epsilon = 1e-3);
}

#[test]
fn mislabelled_bytes_fail_to_decode() {
    let asset = EncodedAsset::new(b"ID3 but not really an mp3".to_vec(), "audio/mpeg");
    let err = decode(asset).unwrap_err();
    assert!(
        matches!(err, DecodeError::Unsupported(_) | DecodeError::Malformed(_)),
        "unexpected error: {err:?}"
    );
}

#[test]
fn header_only_wav_is_rejected() {
    let bytes = wav_bytes(8000, 1, 0, |_| vec![0.0]);
    assert!(decode(EncodedAsset::sniff(bytes)).is_err());
}

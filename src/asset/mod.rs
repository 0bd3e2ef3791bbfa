// src/asset/mod.rs
//! Encoded audio assets handed to the player.

pub mod detection;

use std::{fs, path::Path};

use log::debug;

use crate::error::{Error, Result};

pub use detection::{MediaCategory, category_of, detect_media_type};

/// An opaque encoded byte buffer plus its declared media type.
///
/// Immutable once built; consumed by the engine when decoding.
#[derive(Debug, Clone)]
pub struct EncodedAsset {
    bytes: Vec<u8>,
    media_type: String,
}

impl EncodedAsset {
    /// Wrap bytes with a caller-declared media type.
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    /// Wrap bytes and sniff their media type.
    pub fn sniff(bytes: Vec<u8>) -> Self {
        let media_type = detect_media_type(&bytes, None);
        Self { bytes, media_type }
    }

    /// Read a file and declare its media type from content, then extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(crate::error::DecodeError::from)?;
        let media_type = detect_media_type(&bytes, Some(path));
        debug!(
            "read {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            media_type
        );
        Ok(Self { bytes, media_type })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn category(&self) -> MediaCategory {
        category_of(&self.media_type)
    }

    /// Reject anything whose declared type is not audio.
    pub fn ensure_audio(&self) -> Result<()> {
        if self.category() == MediaCategory::Audio {
            Ok(())
        } else {
            Err(Error::InvalidAssetType {
                media_type: self.media_type.clone(),
            })
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn declared_audio_passes_the_gate() {
        let asset = EncodedAsset::new(vec![1, 2, 3], "audio/mpeg");
        assert!(asset.ensure_audio().is_ok());
        assert_eq!(asset.category(), MediaCategory::Audio);
    }

    #[test]
    fn non_audio_is_rejected_with_its_type() {
        let asset = EncodedAsset::new(b"hello".to_vec(), "text/plain");
        match asset.ensure_audio() {
            Err(Error::InvalidAssetType { media_type }) => assert_eq!(media_type, "text/plain"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn from_path_uses_extension_when_content_is_unknown() {
        let mut file = tempfile::Builder::new().suffix(".ogg").tempfile().unwrap();
        file.write_all(b"no magic here").unwrap();
        let asset = EncodedAsset::from_path(file.path()).unwrap();
        assert_eq!(asset.bytes(), b"no magic here");
        assert_eq!(asset.category(), MediaCategory::Audio);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = EncodedAsset::from_path(Path::new("/definitely/not/here.wav")).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(crate::error::DecodeError::Unreadable(_))
        ));
    }
}

// src/asset/detection.rs
//! Media type detection using magic numbers and extension-based fallback.

use std::{fmt, path::Path};

use infer::MatcherType;
use mime_guess::MimeGuess;

/// High-level media categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MediaCategory {
    Image,
    Audio,
    Video,
    Document,
    Binary,
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaCategory::Image => "Image",
            MediaCategory::Audio => "Audio",
            MediaCategory::Video => "Video",
            MediaCategory::Document => "Document",
            MediaCategory::Binary => "Binary",
        };
        write!(f, "{}", s)
    }
}

/// Detect the MIME type of an in-memory asset.
///
/// Magic-number sniffing wins; the file name (if any) is only consulted
/// when the bytes carry no recognisable signature.
pub fn detect_media_type(bytes: &[u8], name: Option<&Path>) -> String {
    // 1. Try magic-number sniffing
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }

    // 2. Fallback to extension-based lookup
    name.map(|path| MimeGuess::from_path(path).first_or_octet_stream().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

/// Map a MIME type to its category by top-level type.
pub fn category_of(media_type: &str) -> MediaCategory {
    match media_type.split('/').next().unwrap_or("application") {
        "image" => MediaCategory::Image,
        "audio" => MediaCategory::Audio,
        "video" => MediaCategory::Video,
        "text" => MediaCategory::Document,
        "application" if media_type != "application/octet-stream" => MediaCategory::Document,
        _ => MediaCategory::Binary,
    }
}

/// Category reported by the sniffer itself, when the bytes are recognised.
pub fn sniffed_category(bytes: &[u8]) -> Option<MediaCategory> {
    infer::get(bytes).map(|kind| match kind.matcher_type() {
        MatcherType::Image => MediaCategory::Image,
        MatcherType::Audio => MediaCategory::Audio,
        MatcherType::Video => MediaCategory::Video,
        MatcherType::Doc | MatcherType::Text => MediaCategory::Document,
        _ => MediaCategory::Binary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];

    #[test]
    fn magic_numbers_beat_the_file_name() {
        let mime = detect_media_type(PNG_MAGIC, Some(Path::new("song.mp3")));
        assert_eq!(mime, "image/png");
        assert_eq!(sniffed_category(PNG_MAGIC), Some(MediaCategory::Image));
    }

    #[test]
    fn falls_back_to_extension() {
        let mime = detect_media_type(b"not a real header", Some(Path::new("track.flac")));
        assert_eq!(category_of(&mime), MediaCategory::Audio);
    }

    #[test]
    fn unknown_bytes_without_name_are_octet_stream() {
        let mime = detect_media_type(b"????", None);
        assert_eq!(mime, "application/octet-stream");
        assert_eq!(category_of(&mime), MediaCategory::Binary);
    }

    #[test]
    fn categories_follow_top_level_type() {
        assert_eq!(category_of("audio/x-wav"), MediaCategory::Audio);
        assert_eq!(category_of("video/mp4"), MediaCategory::Video);
        assert_eq!(category_of("text/plain"), MediaCategory::Document);
        assert_eq!(category_of("application/pdf"), MediaCategory::Document);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::classify::{
    AUDIO_EXTENSIONS, DOCUMENT_EXTENSIONS, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS,
};

/// Derived classification of a record by file extension.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Still images.
    Image,
    /// Video files.
    Video,
    /// Audio files.
    Audio,
    /// Text and office documents.
    Document,
    /// Fallback for anything unrecognized, including records with no extension.
    File,
}

impl Category {
    /// Classify an extension. Total: unrecognized or empty extensions map to
    /// [`Category::File`]. Lookup is case-insensitive even though parsed
    /// records always carry lowercased extensions.
    pub fn from_extension(extension: &str) -> Self {
        let matches = |set: &[&str]| set.iter().any(|e| e.eq_ignore_ascii_case(extension));
        if matches(IMAGE_EXTENSIONS) {
            Category::Image
        } else if matches(VIDEO_EXTENSIONS) {
            Category::Video
        } else if matches(AUDIO_EXTENSIONS) {
            Category::Audio
        } else if matches(DOCUMENT_EXTENSIONS) {
            Category::Document
        } else {
            Category::File
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Image => "image",
            Category::Video => "video",
            Category::Audio => "audio",
            Category::Document => "document",
            Category::File => "file",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_extensions_map_to_their_category() {
        assert_eq!(Category::from_extension("png"), Category::Image);
        assert_eq!(Category::from_extension("mp4"), Category::Video);
        assert_eq!(Category::from_extension("flac"), Category::Audio);
        assert_eq!(Category::from_extension("pdf"), Category::Document);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Category::from_extension("PNG"), Category::Image);
        assert_eq!(Category::from_extension("Mp4"), Category::Video);
    }

    #[test]
    fn unrecognized_and_empty_extensions_fall_back_to_file() {
        assert_eq!(Category::from_extension("xyz"), Category::File);
        assert_eq!(Category::from_extension(""), Category::File);
    }

    #[test]
    fn display_uses_lowercase_labels() {
        assert_eq!(Category::Document.to_string(), "document");
        assert_eq!(Category::File.to_string(), "file");
    }
}

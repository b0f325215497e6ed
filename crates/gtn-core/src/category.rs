//! File category table shared by the read and write paths.
//!
//! The registry contract stores the category as a `uint8` and accepts
//! writes as a lowercase label string; this module owns the mapping in
//! both directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category assigned to a stored file record.
///
/// Wire codes `0..=3` map to the four canonical categories. Any other
/// code decodes to [`FileCategory::Unknown`] rather than failing, so
/// records written by newer contract revisions stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Still images.
    Image,
    /// Video content.
    Video,
    /// Audio content.
    Audio,
    /// Anything outside the three media categories.
    Others,
    /// Fallback for wire codes outside the known table.
    Unknown,
}

impl FileCategory {
    /// Resolve a numeric wire code from a read response.
    pub fn from_wire_code(code: u64) -> Self {
        match code {
            0 => Self::Image,
            1 => Self::Video,
            2 => Self::Audio,
            3 => Self::Others,
            _ => Self::Unknown,
        }
    }

    /// The numeric wire code for this category, if it has one.
    ///
    /// `Unknown` has no code of its own — it stands for every code the
    /// table does not name.
    pub fn wire_code(&self) -> Option<u64> {
        match self {
            Self::Image => Some(0),
            Self::Video => Some(1),
            Self::Audio => Some(2),
            Self::Others => Some(3),
            Self::Unknown => None,
        }
    }

    /// The canonical lowercase label the contract's write method accepts.
    ///
    /// The contract is case-sensitive; labels must be sent exactly in
    /// this form. `Unknown` reduces to `"unknown"`, which the contract
    /// rejects — it exists only as a read-side fallback.
    pub fn wire_label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Others => "others",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Others => "Others",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Error returned when a label string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown file category: \"{0}\"")]
pub struct ParseCategoryError(
    /// The label that named no category.
    pub String,
);

impl FromStr for FileCategory {
    type Err = ParseCategoryError;

    /// Parse a label case-insensitively, so `"Image"`, `"image"` and
    /// `"IMAGE"` all resolve to [`FileCategory::Image`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            "others" => Ok(Self::Others),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

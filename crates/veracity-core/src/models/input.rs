use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{VeracityError, VeracityResult};

/// The kind of content being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Text,
    Image,
    Video,
    Url,
}

impl Modality {
    pub const ALL: [Modality; 4] = [Self::Text, Self::Image, Self::Video, Self::Url];

    /// Wire name, also the persisted `input_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Url => "url",
        }
    }

    /// Rejection message for empty input of this modality.
    pub fn required_message(self) -> &'static str {
        match self {
            Self::Text => "Text input is required",
            Self::Image => "Image URL is required",
            Self::Video => "Video URL is required",
            Self::Url => "URL is required",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "url" => Ok(Self::Url),
            other => Err(format!("unknown modality: {other}")),
        }
    }
}

/// One piece of user-submitted content, tagged with its modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ValidationInput {
    Text(String),
    ImageUrl(String),
    VideoUrl(String),
    GenericUrl(String),
}

impl ValidationInput {
    pub fn modality(&self) -> Modality {
        match self {
            Self::Text(_) => Modality::Text,
            Self::ImageUrl(_) => Modality::Image,
            Self::VideoUrl(_) => Modality::Video,
            Self::GenericUrl(_) => Modality::Url,
        }
    }

    /// The raw submitted string, untrimmed.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::ImageUrl(s) | Self::VideoUrl(s) | Self::GenericUrl(s) => s,
        }
    }

    /// Reject empty or whitespace-only input before any rule runs.
    pub fn validate(&self) -> VeracityResult<()> {
        if self.as_str().trim().is_empty() {
            return Err(VeracityError::empty_input(self.modality()));
        }
        Ok(())
    }

    /// blake3 hash of the full, untruncated input.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.modality().as_str().as_bytes());
        hasher.update(b"\0");
        hasher.update(self.as_str().as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    /// The input cut to at most `max_chars` characters, on a char boundary.
    pub fn truncated(&self, max_chars: usize) -> String {
        self.as_str().chars().take(max_chars).collect()
    }
}

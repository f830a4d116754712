//! Song value type and field validation
//!
//! A `Song` is a plain owned value: cloning one is the deep copy the
//! playlist relies on, since every field owns its storage. The engine
//! never interprets `url` or `cover` — they are opaque locators handed
//! back to the boundary layer.

use serde::{Deserialize, Serialize};

/// A single playlist entry
///
/// `title` doubles as the lookup key for removal and undo/redo replay.
/// Duplicate titles are legal; title-based operations act on the first
/// match walking from the head of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Display title, also the removal/lookup key
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Playable resource locator (opaque to the engine)
    pub url: String,
    /// Optional cover-art locator (opaque to the engine)
    #[serde(default)]
    pub cover: Option<String>,
}

/// Validation failure for a song submitted to the playlist
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SongError {
    /// A required field was empty or whitespace-only
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl Song {
    /// Create a song without cover art
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            url: url.into(),
            cover: None,
        }
    }

    /// Attach a cover-art locator
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Check that all required fields are present
    ///
    /// `title`, `artist` and `url` must be non-blank; `cover` is optional.
    /// Reports the first missing field.
    pub fn validate(&self) -> Result<(), SongError> {
        if self.title.trim().is_empty() {
            return Err(SongError::MissingField("title"));
        }
        if self.artist.trim().is_empty() {
            return Err(SongError::MissingField("artist"));
        }
        if self.url.trim().is_empty() {
            return Err(SongError::MissingField("url"));
        }
        Ok(())
    }
}

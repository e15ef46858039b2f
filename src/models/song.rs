//! Song model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::CatalogError;

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Song {
    /// Store-generated identifier
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
}

impl Song {
    /// Build a song from validated fields and a freshly generated id
    pub fn new(id: String, fields: SongFields) -> Self {
        Self {
            id,
            title: fields.title,
            artist: fields.artist,
            album: fields.album,
            genre: fields.genre,
        }
    }
}

/// The four descriptive fields of a song, all guaranteed non-blank.
///
/// Also used as the projection returned by genre lookups, where the record
/// id is left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SongFields {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
}

/// Request body for create and update.
///
/// Every field is optional at the wire level so that a missing field turns
/// into a 400 with a readable message instead of a serde rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SongInput {
    /// Check that all four fields are present and non-blank.
    ///
    /// Values are returned untouched; whitespace only matters for the blank check.
    pub fn validate(self) -> Result<SongFields, CatalogError> {
        let mut missing = Vec::new();

        let title = required(self.title, "title", &mut missing);
        let artist = required(self.artist, "artist", &mut missing);
        let album = required(self.album, "album", &mut missing);
        let genre = required(self.genre, "genre", &mut missing);

        if !missing.is_empty() {
            return Err(CatalogError::Validation(format!(
                "Song validation failed: {} required",
                missing.join(", ")
            )));
        }

        Ok(SongFields {
            title,
            artist,
            album,
            genre,
        })
    }
}

fn required(value: Option<String>, name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

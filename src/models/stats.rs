//! Statistics models
//!
//! Response shapes for the read-only aggregate endpoints. Field names follow
//! the camelCase JSON the catalog clients already consume.

use serde::Serialize;

/// Totals across the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_songs: usize,
    pub total_artists: usize,
    pub total_albums: usize,
    pub total_genres: usize,
}

/// Song and album counts for one artist.
///
/// An artist with no songs is reported with the short `songs`/`albums` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArtistCounts {
    #[serde(rename_all = "camelCase")]
    Counted {
        total_songs: usize,
        total_albums: usize,
    },
    Empty { songs: usize, albums: usize },
}

impl ArtistCounts {
    pub fn new(total_songs: usize, total_albums: usize) -> Self {
        if total_songs == 0 {
            Self::Empty {
                songs: 0,
                albums: 0,
            }
        } else {
            Self::Counted {
                total_songs,
                total_albums,
            }
        }
    }
}

/// Number of songs in one album
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSongCount {
    pub total_songs: usize,
}

/// The album holding the most songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopAlbum {
    pub album: String,
    pub total_songs: usize,
}

/// Per-album row of the album summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumSummary {
    pub album: String,
    /// Artist of the first song seen for this album
    pub artist: String,
    pub songs: usize,
}

/// Per-artist row of the artist summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSummary {
    pub artist: String,
    pub albums: usize,
    pub songs: usize,
}

/// Per-genre row of the genre summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreSummary {
    pub genre: String,
    pub songs: usize,
    pub number_of_albums: usize,
    pub number_of_artists: usize,
}

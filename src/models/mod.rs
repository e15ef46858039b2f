//! Data models for the song catalog

mod song;
mod stats;

pub use song::{Song, SongFields, SongInput};
pub use stats::{
    AlbumSongCount, AlbumSummary, ArtistCounts, ArtistSummary, GenreSummary, OverallStats,
    TopAlbum,
};

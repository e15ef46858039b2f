//! Catalog statistics
//!
//! Every aggregate is one linear pass over the songs, accumulating into a map
//! keyed by the grouping dimension. Multi-dimensional summaries keep a set of
//! distinct inner values per key and reduce it to a count at the end.
//! Values are compared by exact string equality. Rows come out sorted by
//! their key.

use std::collections::{BTreeMap, HashSet};

use crate::models::{
    AlbumSummary, ArtistCounts, ArtistSummary, GenreSummary, OverallStats, Song, TopAlbum,
};

/// Aggregation functions over a slice of songs
pub struct CatalogStats;

struct AlbumAcc<'a> {
    artist: &'a str,
    songs: usize,
}

#[derive(Default)]
struct GroupAcc<'a> {
    songs: usize,
    albums: HashSet<&'a str>,
    artists: HashSet<&'a str>,
}

impl CatalogStats {
    /// Total songs plus distinct artists, albums and genres
    pub fn overall(songs: &[Song]) -> OverallStats {
        let mut artists = HashSet::new();
        let mut albums = HashSet::new();
        let mut genres = HashSet::new();

        for song in songs {
            artists.insert(song.artist.as_str());
            albums.insert(song.album.as_str());
            genres.insert(song.genre.as_str());
        }

        OverallStats {
            total_songs: songs.len(),
            total_artists: artists.len(),
            total_albums: albums.len(),
            total_genres: genres.len(),
        }
    }

    /// Song and distinct album counts for songs already filtered to one artist
    pub fn artist_counts(songs: &[Song]) -> ArtistCounts {
        let albums: HashSet<&str> = songs.iter().map(|s| s.album.as_str()).collect();
        ArtistCounts::new(songs.len(), albums.len())
    }

    /// The album with the most songs.
    ///
    /// Ties go to the album name that sorts first. `None` for an empty catalog.
    pub fn album_with_most_songs(songs: &[Song]) -> Option<TopAlbum> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for song in songs {
            *counts.entry(song.album.as_str()).or_default() += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for (album, count) in counts {
            // strictly greater keeps the earliest name on a tie
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((album, count));
            }
        }

        best.map(|(album, total_songs)| TopAlbum {
            album: album.to_string(),
            total_songs,
        })
    }

    /// One row per album with its song count and first-seen artist
    pub fn albums_summary(songs: &[Song]) -> Vec<AlbumSummary> {
        let mut albums: BTreeMap<&str, AlbumAcc> = BTreeMap::new();

        for song in songs {
            let acc = albums.entry(song.album.as_str()).or_insert_with(|| AlbumAcc {
                artist: song.artist.as_str(),
                songs: 0,
            });
            acc.songs += 1;
        }

        albums
            .into_iter()
            .map(|(album, acc)| AlbumSummary {
                album: album.to_string(),
                artist: acc.artist.to_string(),
                songs: acc.songs,
            })
            .collect()
    }

    /// One row per artist with distinct album and total song counts
    pub fn artists_summary(songs: &[Song]) -> Vec<ArtistSummary> {
        let mut artists: BTreeMap<&str, GroupAcc> = BTreeMap::new();

        for song in songs {
            let acc = artists.entry(song.artist.as_str()).or_default();
            acc.songs += 1;
            acc.albums.insert(song.album.as_str());
        }

        artists
            .into_iter()
            .map(|(artist, acc)| ArtistSummary {
                artist: artist.to_string(),
                albums: acc.albums.len(),
                songs: acc.songs,
            })
            .collect()
    }

    /// One row per genre with song, distinct album and distinct artist counts
    pub fn genres_summary(songs: &[Song]) -> Vec<GenreSummary> {
        let mut genres: BTreeMap<&str, GroupAcc> = BTreeMap::new();

        for song in songs {
            let acc = genres.entry(song.genre.as_str()).or_default();
            acc.songs += 1;
            acc.albums.insert(song.album.as_str());
            acc.artists.insert(song.artist.as_str());
        }

        genres
            .into_iter()
            .map(|(genre, acc)| GenreSummary {
                genre: genre.to_string(),
                songs: acc.songs,
                number_of_albums: acc.albums.len(),
                number_of_artists: acc.artists.len(),
            })
            .collect()
    }
}

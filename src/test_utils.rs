//! Test fixtures shared by the unit tests

use tempfile::TempDir;

use crate::db::{run_migrations, DbEngine};
use crate::models::{Song, SongFields};

/// Creates a migrated database in a temporary directory.
///
/// Keep the `TempDir` alive for the duration of the test.
pub async fn temp_engine() -> (DbEngine, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_url = format!("sqlite:{}", dir.path().join("test.db").display());

    let engine = DbEngine::connect(&db_url)
        .await
        .expect("Failed to initialize test database");
    run_migrations(&engine)
        .await
        .expect("Failed to migrate test database");

    (engine, dir)
}

/// Validated song fields
pub fn fields(title: &str, artist: &str, album: &str, genre: &str) -> SongFields {
    SongFields {
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        genre: genre.to_string(),
    }
}

/// A stored song with a predictable id
pub fn song(id: &str, title: &str, artist: &str, album: &str, genre: &str) -> Song {
    Song::new(id.to_string(), fields(title, artist, album, genre))
}

/// The three-song catalog used across the statistics tests
pub fn sample_songs() -> Vec<SongFields> {
    vec![
        fields("A", "X", "Alb1", "Rock"),
        fields("B", "X", "Alb1", "Rock"),
        fields("C", "Y", "Alb2", "Pop"),
    ]
}

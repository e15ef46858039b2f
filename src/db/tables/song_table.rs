//! Song table operations

use sqlx::SqlitePool;

use crate::db::DbEngine;
use crate::models::{Song, SongFields};

/// Typed access to the `song` table
#[derive(Debug, Clone)]
pub struct SongTable {
    pool: SqlitePool,
}

impl SongTable {
    pub fn new(engine: &DbEngine) -> Self {
        Self {
            pool: engine.pool().clone(),
        }
    }

    /// Insert a song under a freshly generated id
    pub async fn insert(&self, fields: SongFields) -> sqlx::Result<Song> {
        let song = Song::new(uuid::Uuid::new_v4().to_string(), fields);

        sqlx::query("INSERT INTO song (id, title, artist, album, genre) VALUES (?, ?, ?, ?, ?)")
            .bind(&song.id)
            .bind(&song.title)
            .bind(&song.artist)
            .bind(&song.album)
            .bind(&song.genre)
            .execute(&self.pool)
            .await?;

        Ok(song)
    }

    /// Get song by id
    pub async fn get_by_id(&self, id: &str) -> sqlx::Result<Option<Song>> {
        sqlx::query_as::<_, Song>("SELECT id, title, artist, album, genre FROM song WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Get all songs in insertion order
    pub async fn get_all(&self) -> sqlx::Result<Vec<Song>> {
        sqlx::query_as::<_, Song>("SELECT id, title, artist, album, genre FROM song ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
    }

    /// Replace the four fields of a song. Returns `None` when the id is unknown.
    pub async fn update(&self, id: &str, fields: SongFields) -> sqlx::Result<Option<Song>> {
        let result =
            sqlx::query("UPDATE song SET title = ?, artist = ?, album = ?, genre = ? WHERE id = ?")
                .bind(&fields.title)
                .bind(&fields.artist)
                .bind(&fields.album)
                .bind(&fields.genre)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Song::new(id.to_string(), fields)))
    }

    /// Delete a song. Returns whether a row was removed.
    pub async fn delete(&self, id: &str) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM song WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Songs with exactly this genre, without their ids
    pub async fn get_by_genre(&self, genre: &str) -> sqlx::Result<Vec<SongFields>> {
        sqlx::query_as::<_, SongFields>(
            "SELECT title, artist, album, genre FROM song WHERE genre = ? ORDER BY rowid",
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await
    }

    /// Songs with exactly this artist
    pub async fn get_by_artist(&self, artist: &str) -> sqlx::Result<Vec<Song>> {
        sqlx::query_as::<_, Song>(
            "SELECT id, title, artist, album, genre FROM song WHERE artist = ? ORDER BY rowid",
        )
        .bind(artist)
        .fetch_all(&self.pool)
        .await
    }

    /// Number of songs with exactly this album
    pub async fn count_by_album(&self, album: &str) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM song WHERE album = ?")
            .bind(album)
            .fetch_one(&self.pool)
            .await
    }
}

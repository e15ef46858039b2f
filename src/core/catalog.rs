//! Catalog service: song CRUD and aggregate statistics

use tracing::{debug, info};

use crate::core::stats::CatalogStats;
use crate::db::SongTable;
use crate::error::CatalogError;
use crate::models::{
    AlbumSongCount, AlbumSummary, ArtistCounts, ArtistSummary, GenreSummary, OverallStats, Song,
    SongFields, SongInput, TopAlbum,
};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Request-level operations over the song catalog.
///
/// Holds no state of its own beyond the table handle, so one instance is
/// shared by every worker.
#[derive(Debug, Clone)]
pub struct CatalogService {
    songs: SongTable,
}

impl CatalogService {
    pub fn new(songs: SongTable) -> Self {
        Self { songs }
    }

    // ========== CRUD ==========

    pub async fn create(&self, input: SongInput) -> CatalogResult<Song> {
        let fields = input.validate()?;
        let song = self.songs.insert(fields).await?;
        info!("Created song {} ({} - {})", song.id, song.artist, song.title);
        Ok(song)
    }

    pub async fn get_by_id(&self, id: &str) -> CatalogResult<Song> {
        self.songs
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Song"))
    }

    pub async fn list(&self) -> CatalogResult<Vec<Song>> {
        Ok(self.songs.get_all().await?)
    }

    /// Replace all four fields of an existing song
    pub async fn update(&self, id: &str, input: SongInput) -> CatalogResult<Song> {
        let fields = input.validate()?;
        let song = self
            .songs
            .update(id, fields)
            .await?
            .ok_or(CatalogError::NotFound("Song"))?;
        info!("Updated song {}", song.id);
        Ok(song)
    }

    pub async fn delete(&self, id: &str) -> CatalogResult<()> {
        if !self.songs.delete(id).await? {
            return Err(CatalogError::NotFound("Song"));
        }
        info!("Deleted song {}", id);
        Ok(())
    }

    // ========== Statistics ==========

    pub async fn overall_statistics(&self) -> CatalogResult<OverallStats> {
        let songs = self.songs.get_all().await?;
        Ok(CatalogStats::overall(&songs))
    }

    /// Songs of one genre; an empty match is `NotFound`
    pub async fn songs_by_genre(&self, genre: &str) -> CatalogResult<Vec<SongFields>> {
        let songs = self.songs.get_by_genre(genre).await?;
        if songs.is_empty() {
            return Err(CatalogError::NotFound("Songs"));
        }
        Ok(songs)
    }

    pub async fn song_and_album_count_for_artist(
        &self,
        artist: &str,
    ) -> CatalogResult<ArtistCounts> {
        let songs = self.songs.get_by_artist(artist).await?;
        if songs.is_empty() {
            debug!("No songs for artist {:?}", artist);
        }
        Ok(CatalogStats::artist_counts(&songs))
    }

    /// Zero is a valid answer here, never `NotFound`
    pub async fn song_count_in_album(&self, album: &str) -> CatalogResult<AlbumSongCount> {
        let count = self.songs.count_by_album(album).await?;
        Ok(AlbumSongCount {
            total_songs: usize::try_from(count).unwrap_or_default(),
        })
    }

    pub async fn album_with_most_songs(&self) -> CatalogResult<TopAlbum> {
        let songs = self.songs.get_all().await?;
        CatalogStats::album_with_most_songs(&songs).ok_or(CatalogError::NotFound("Album"))
    }

    pub async fn all_albums_summary(&self) -> CatalogResult<Vec<AlbumSummary>> {
        let songs = self.songs.get_all().await?;
        Ok(CatalogStats::albums_summary(&songs))
    }

    pub async fn all_artists_summary(&self) -> CatalogResult<Vec<ArtistSummary>> {
        let songs = self.songs.get_all().await?;
        Ok(CatalogStats::artists_summary(&songs))
    }

    pub async fn all_genres_summary(&self) -> CatalogResult<Vec<GenreSummary>> {
        let songs = self.songs.get_all().await?;
        Ok(CatalogStats::genres_summary(&songs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_songs, temp_engine};

    fn input(title: &str, artist: &str, album: &str, genre: &str) -> SongInput {
        SongInput {
            title: Some(title.into()),
            artist: Some(artist.into()),
            album: Some(album.into()),
            genre: Some(genre.into()),
        }
    }

    fn to_input(fields: SongFields) -> SongInput {
        SongInput {
            title: Some(fields.title),
            artist: Some(fields.artist),
            album: Some(fields.album),
            genre: Some(fields.genre),
        }
    }

    async fn seeded() -> (CatalogService, tempfile::TempDir) {
        let (engine, dir) = temp_engine().await;
        let service = CatalogService::new(SongTable::new(&engine));
        for fields in sample_songs() {
            service.create(to_input(fields)).await.unwrap();
        }
        (service, dir)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (engine, _dir) = temp_engine().await;
        let service = CatalogService::new(SongTable::new(&engine));

        let created = service.create(input("A", "X", "Alb1", "Rock")).await.unwrap();
        let fetched = service.get_by_id(&created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "A");
        assert_eq!(fetched.artist, "X");
        assert_eq!(fetched.album, "Alb1");
        assert_eq!(fetched.genre, "Rock");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_field() {
        let (engine, _dir) = temp_engine().await;
        let service = CatalogService::new(SongTable::new(&engine));

        let mut bad = input("A", "X", "Alb1", "Rock");
        bad.genre = None;

        let err = service.create(bad).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let (service, _dir) = seeded().await;
        let id = service.list().await.unwrap()[0].id.clone();

        let updated = service
            .update(&id, input("New", "Z", "Alb9", "Jazz"))
            .await
            .unwrap();
        let fetched = service.get_by_id(&id).await.unwrap();

        assert_eq!(updated, fetched);
        assert_eq!(fetched.title, "New");
        assert_eq!(fetched.genre, "Jazz");
    }

    #[tokio::test]
    async fn test_update_keeps_surrounding_whitespace() {
        let (service, _dir) = seeded().await;
        let id = service.list().await.unwrap()[0].id.clone();

        let updated = service
            .update(&id, input(" Intro ", "X ", "Alb1", "Rock"))
            .await
            .unwrap();
        let fetched = service.get_by_id(&id).await.unwrap();

        assert_eq!(fetched, updated);
        assert_eq!(fetched.title, " Intro ");
        assert_eq!(fetched.artist, "X ");
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_fields() {
        let (service, _dir) = seeded().await;
        let original = service.list().await.unwrap()[0].clone();

        let mut missing = input("New", "Z", "Alb9", "Jazz");
        missing.genre = None;
        let err = service.update(&original.id, missing).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let blank = input("New", "  ", "Alb9", "Jazz");
        let err = service.update(&original.id, blank).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        assert_eq!(service.get_by_id(&original.id).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (service, _dir) = seeded().await;
        let err = service
            .update("nope", input("New", "Z", "Alb9", "Jazz"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound("Song")));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let (service, _dir) = seeded().await;
        let id = service.list().await.unwrap()[1].id.clone();

        service.delete(&id).await.unwrap();

        assert!(matches!(
            service.get_by_id(&id).await.unwrap_err(),
            CatalogError::NotFound("Song")
        ));
        assert!(matches!(
            service.delete(&id).await.unwrap_err(),
            CatalogError::NotFound("Song")
        ));
    }

    #[tokio::test]
    async fn test_statistics_scenario() {
        let (service, _dir) = seeded().await;

        let overall = service.overall_statistics().await.unwrap();
        assert_eq!(
            overall,
            OverallStats {
                total_songs: 3,
                total_artists: 2,
                total_albums: 2,
                total_genres: 2,
            }
        );
        assert_eq!(overall.total_songs, service.list().await.unwrap().len());

        assert_eq!(
            service.song_count_in_album("Alb1").await.unwrap(),
            AlbumSongCount { total_songs: 2 }
        );
        assert_eq!(
            service.song_count_in_album("Missing").await.unwrap(),
            AlbumSongCount { total_songs: 0 }
        );

        let top = service.album_with_most_songs().await.unwrap();
        assert_eq!(top.album, "Alb1");
        assert_eq!(top.total_songs, 2);

        assert_eq!(
            service.song_and_album_count_for_artist("Z").await.unwrap(),
            ArtistCounts::Empty {
                songs: 0,
                albums: 0
            }
        );
        assert_eq!(
            service.song_and_album_count_for_artist("X").await.unwrap(),
            ArtistCounts::Counted {
                total_songs: 2,
                total_albums: 1
            }
        );
    }

    #[tokio::test]
    async fn test_songs_by_genre() {
        let (service, _dir) = seeded().await;

        let rock = service.songs_by_genre("Rock").await.unwrap();
        assert_eq!(rock.len(), 2);
        assert!(rock.iter().all(|s| s.genre == "Rock"));

        assert!(matches!(
            service.songs_by_genre("rock").await.unwrap_err(),
            CatalogError::NotFound("Songs")
        ));
    }

    #[tokio::test]
    async fn test_summaries() {
        let (service, _dir) = seeded().await;

        let genres = service.all_genres_summary().await.unwrap();
        let total: usize = genres.iter().map(|g| g.songs).sum();
        assert_eq!(total, service.overall_statistics().await.unwrap().total_songs);

        let albums = service.all_albums_summary().await.unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].album, "Alb1");
        assert_eq!(albums[0].artist, "X");

        let artists = service.all_artists_summary().await.unwrap();
        assert_eq!(artists.len(), 2);
        assert_eq!(artists[0].songs, 2);
    }

    #[tokio::test]
    async fn test_album_with_most_songs_empty_catalog() {
        let (engine, _dir) = temp_engine().await;
        let service = CatalogService::new(SongTable::new(&engine));

        assert!(matches!(
            service.album_with_most_songs().await.unwrap_err(),
            CatalogError::NotFound("Album")
        ));
    }
}

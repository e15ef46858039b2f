//! Song routes: CRUD plus read-only statistics

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::catalog::CatalogService;
use crate::error::CatalogError;
use crate::models::SongInput;

type HandlerResult = Result<HttpResponse, CatalogError>;

/// Create a song
#[post("")]
pub async fn create_song(
    catalog: web::Data<CatalogService>,
    body: web::Json<SongInput>,
) -> HandlerResult {
    let song = catalog.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(song))
}

/// List all songs
#[get("")]
pub async fn list_songs(catalog: web::Data<CatalogService>) -> HandlerResult {
    Ok(HttpResponse::Ok().json(catalog.list().await?))
}

/// Get song by id
#[get("/{id}")]
pub async fn get_song(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> HandlerResult {
    let song = catalog.get_by_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(song))
}

/// Replace a song's fields
#[put("/{id}")]
pub async fn update_song(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
    body: web::Json<SongInput>,
) -> HandlerResult {
    let song = catalog.update(&path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(song))
}

/// Delete a song
#[delete("/{id}")]
pub async fn delete_song(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> HandlerResult {
    catalog.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Song Deleted Successfully"
    })))
}

/// Totals for songs, artists, albums and genres
#[get("/statistics")]
pub async fn overall_statistics(catalog: web::Data<CatalogService>) -> HandlerResult {
    Ok(HttpResponse::Ok().json(catalog.overall_statistics().await?))
}

/// Songs of one genre
#[get("/songsbygenre/{genre}")]
pub async fn songs_by_genre(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> HandlerResult {
    let songs = catalog.songs_by_genre(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "songs": songs })))
}

/// Song and album counts for one artist
#[get("/songandalbuminartist/{artist}")]
pub async fn song_and_album_in_artist(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> HandlerResult {
    let counts = catalog
        .song_and_album_count_for_artist(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(counts))
}

/// Song count for one album
#[get("/songinalbum/{album}")]
pub async fn song_in_album(
    catalog: web::Data<CatalogService>,
    path: web::Path<String>,
) -> HandlerResult {
    let count = catalog.song_count_in_album(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(count))
}

/// The album with the most songs
#[get("/albummostsongs")]
pub async fn album_most_songs(catalog: web::Data<CatalogService>) -> HandlerResult {
    Ok(HttpResponse::Ok().json(catalog.album_with_most_songs().await?))
}

#[get("/allalbum")]
pub async fn all_albums(catalog: web::Data<CatalogService>) -> HandlerResult {
    Ok(HttpResponse::Ok().json(catalog.all_albums_summary().await?))
}

#[get("/allartist")]
pub async fn all_artists(catalog: web::Data<CatalogService>) -> HandlerResult {
    Ok(HttpResponse::Ok().json(catalog.all_artists_summary().await?))
}

#[get("/allgenre")]
pub async fn all_genres(catalog: web::Data<CatalogService>) -> HandlerResult {
    Ok(HttpResponse::Ok().json(catalog.all_genres_summary().await?))
}

/// Configure song routes.
///
/// Fixed statistics paths go first so `/{id}` does not swallow them.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(overall_statistics)
        .service(songs_by_genre)
        .service(song_and_album_in_artist)
        .service(song_in_album)
        .service(album_most_songs)
        .service(all_albums)
        .service(all_artists)
        .service(all_genres)
        .service(create_song)
        .service(list_songs)
        .service(get_song)
        .service(update_song)
        .service(delete_song);
}

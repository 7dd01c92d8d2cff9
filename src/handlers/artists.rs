use actix_web::{HttpResponse, Result, http::StatusCode, web};
use chrono::Utc;
use serde::Serialize;

use crate::database::models::{Artist, ArtistInput, ShowDetails};
use crate::database::repositories::{ArtistRepository, ShowRepository};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, GENRE_CHOICES, SearchResults, submission_response};
use crate::handlers::venues::SearchForm;
use crate::services::BookingService;

/// Artist detail page payload, mirroring the venue page.
#[derive(Debug, Serialize)]
pub struct ArtistPage {
    pub artist: Artist,
    pub upcoming_shows: Vec<ShowDetails>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ShowDetails>,
    pub past_shows_count: usize,
}

/// Flat artist listing; artists are not grouped by location.
pub async fn get_artists(repo: web::Data<ArtistRepository>) -> Result<HttpResponse> {
    let artists = repo.find_all().await.map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(artists)))
}

pub async fn search_artists(
    form: web::Form<SearchForm>,
    repo: web::Data<ArtistRepository>,
) -> Result<HttpResponse> {
    let artists = repo.search(&form.search_term).await.map_err(|e| {
        log::error!("Artist search '{}' failed: {}", form.search_term, e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SearchResults::new(artists))))
}

pub async fn show_artist(
    path: web::Path<i64>,
    artist_repo: web::Data<ArtistRepository>,
    show_repo: web::Data<ShowRepository>,
) -> Result<HttpResponse> {
    let artist_id = path.into_inner();

    let artist = artist_repo
        .find_by_id(artist_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", artist_id)))?;

    let shows = show_repo
        .find_by_artist(artist_id, Utc::now().naive_utc())
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(ArtistPage {
        artist,
        upcoming_shows_count: shows.upcoming.len(),
        upcoming_shows: shows.upcoming,
        past_shows_count: shows.past.len(),
        past_shows: shows.past,
    })))
}

pub async fn create_artist_form() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(GENRE_CHOICES)))
}

pub async fn create_artist_submission(
    input: web::Json<ArtistInput>,
    service: web::Data<BookingService>,
) -> Result<HttpResponse> {
    let outcome = service.create_artist_submission(input.into_inner()).await;
    Ok(submission_response(StatusCode::CREATED, outcome))
}

pub async fn edit_artist_form(
    path: web::Path<i64>,
    repo: web::Data<ArtistRepository>,
) -> Result<HttpResponse> {
    let artist_id = path.into_inner();
    let artist = repo
        .find_by_id(artist_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", artist_id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(artist)))
}

pub async fn edit_artist_submission(
    path: web::Path<i64>,
    input: web::Json<ArtistInput>,
    service: web::Data<BookingService>,
) -> Result<HttpResponse> {
    let outcome = service
        .edit_artist_submission(path.into_inner(), input.into_inner())
        .await;
    Ok(submission_response(StatusCode::OK, outcome))
}

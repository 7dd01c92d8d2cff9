use actix_web::{HttpResponse, Result, http::StatusCode, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::database::models::{ShowDetails, Venue, VenueInput};
use crate::database::repositories::{ShowRepository, VenueRepository};
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, GENRE_CHOICES, SearchResults, submission_response};
use crate::services::BookingService;

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Venue detail page payload: the row plus its shows split around now.
#[derive(Debug, Serialize)]
pub struct VenuePage {
    pub venue: Venue,
    pub upcoming_shows: Vec<ShowDetails>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ShowDetails>,
    pub past_shows_count: usize,
}

/// Venues grouped by (city, state) for the listing page.
pub async fn get_venues(service: web::Data<BookingService>) -> Result<HttpResponse> {
    let groups = service.venues_by_location().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(groups)))
}

pub async fn search_venues(
    form: web::Form<SearchForm>,
    repo: web::Data<VenueRepository>,
) -> Result<HttpResponse> {
    let venues = repo.search(&form.search_term).await.map_err(|e| {
        log::error!("Venue search '{}' failed: {}", form.search_term, e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SearchResults::new(venues))))
}

pub async fn show_venue(
    path: web::Path<i64>,
    venue_repo: web::Data<VenueRepository>,
    show_repo: web::Data<ShowRepository>,
) -> Result<HttpResponse> {
    let venue_id = path.into_inner();

    let venue = venue_repo
        .find_by_id(venue_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", venue_id)))?;

    let shows = show_repo
        .find_by_venue(venue_id, Utc::now().naive_utc())
        .await
        .map_err(AppError::from)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(VenuePage {
        venue,
        upcoming_shows_count: shows.upcoming.len(),
        upcoming_shows: shows.upcoming,
        past_shows_count: shows.past.len(),
        past_shows: shows.past,
    })))
}

/// Form bootstrap: the rendering collaborator only needs the genre choices.
pub async fn create_venue_form() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(GENRE_CHOICES)))
}

pub async fn create_venue_submission(
    input: web::Json<VenueInput>,
    service: web::Data<BookingService>,
) -> Result<HttpResponse> {
    let outcome = service.create_venue_submission(input.into_inner()).await;
    Ok(submission_response(StatusCode::CREATED, outcome))
}

/// Current row for edit-form prefill.
pub async fn edit_venue_form(
    path: web::Path<i64>,
    repo: web::Data<VenueRepository>,
) -> Result<HttpResponse> {
    let venue_id = path.into_inner();
    let venue = repo
        .find_by_id(venue_id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", venue_id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(venue)))
}

pub async fn edit_venue_submission(
    path: web::Path<i64>,
    input: web::Json<VenueInput>,
    service: web::Data<BookingService>,
) -> Result<HttpResponse> {
    let outcome = service
        .edit_venue_submission(path.into_inner(), input.into_inner())
        .await;
    Ok(submission_response(StatusCode::OK, outcome))
}

pub async fn delete_venue(
    path: web::Path<i64>,
    service: web::Data<BookingService>,
) -> Result<HttpResponse> {
    let venue_id = path.into_inner();
    if service.delete_venue(venue_id).await? {
        Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_with_message(None, "Venue deleted")))
    } else {
        Ok(HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(&format!("Venue {} not found", venue_id))))
    }
}

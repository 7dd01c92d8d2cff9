use actix_web::{HttpResponse, Result, http::StatusCode, web};

use crate::database::models::ShowInput;
use crate::database::repositories::ShowRepository;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, submission_response};
use crate::services::BookingService;

/// Every scheduled show with its artist and venue details.
pub async fn get_shows(repo: web::Data<ShowRepository>) -> Result<HttpResponse> {
    let shows = repo.find_all().await.map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(shows)))
}

pub async fn create_show_form() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
        None,
        "Provide artist_id, venue_id and start_time",
    )))
}

pub async fn create_show_submission(
    input: web::Json<ShowInput>,
    service: web::Data<BookingService>,
) -> Result<HttpResponse> {
    let outcome = service.create_show_submission(input.into_inner()).await;
    Ok(submission_response(StatusCode::CREATED, outcome))
}

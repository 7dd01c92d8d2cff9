use actix_web::{HttpResponse, Result, web};

use crate::handlers::shared::ApiResponse;
use crate::services::BookingService;

/// Landing page data: recent artists and venues.
pub async fn index(service: web::Data<BookingService>) -> Result<HttpResponse> {
    let data = service.home_page().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(data)))
}

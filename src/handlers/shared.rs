use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::services::SubmissionOutcome;

/// Genre choices offered by the venue and artist forms.
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    // Success with data and no message
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    // Success with message
    pub fn success_with_message(data: Option<T>, message: &str) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.to_string()),
        }
    }
}

impl ApiResponse<()> {
    // Error response (no data)
    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}

/// Search endpoint payload: matched rows plus their count.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Map a submission outcome onto the wire: `success_status` is used for the
/// accepted case (201 for creates, 200 for edits).
pub fn submission_response<T: Serialize>(
    success_status: StatusCode,
    outcome: SubmissionOutcome<T>,
) -> HttpResponse {
    match outcome {
        SubmissionOutcome::Accepted { entity, message } => {
            HttpResponse::build(success_status)
                .json(ApiResponse::success_with_message(Some(entity), &message))
        }
        SubmissionOutcome::Rejected { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message))
        }
        SubmissionOutcome::NotFound { message } => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(&message))
        }
    }
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error("Not found"))
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Show {
    pub id: i64,
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show joined with the artist and venue attributes the listing pages need.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShowDetails {
    pub id: i64,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub venue_id: i64,
    pub venue_name: String,
    pub start_time: NaiveDateTime,
}

impl ShowDetails {
    /// A show is upcoming strictly after the evaluation instant; a show
    /// starting exactly at it counts as past.
    pub fn is_upcoming(&self, at: NaiveDateTime) -> bool {
        self.start_time > at
    }
}

/// Shows for one venue or artist, split relative to an evaluation time.
/// The split is derived at query time, never stored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShowPartition {
    pub upcoming: Vec<ShowDetails>,
    pub past: Vec<ShowDetails>,
}

use anyhow::Result;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::database::models::{Show, ShowDetails, ShowInput, ShowPartition};

#[derive(Clone)]
pub struct ShowRepository {
    pool: SqlitePool,
}

impl ShowRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a show. Both foreign keys are NOT NULL and enforced, so a
    /// dangling artist or venue id fails here without persisting anything.
    pub async fn create(&self, input: &ShowInput) -> Result<Show> {
        let show = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (artist_id, venue_id, start_time)
            VALUES (?1, ?2, ?3)
            RETURNING id, artist_id, venue_id, start_time
            "#,
        )
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.start_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(show)
    }

    pub async fn find_all(&self) -> Result<Vec<ShowDetails>> {
        let shows = sqlx::query_as::<_, ShowDetails>(
            r#"
            SELECT s.id, s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.venue_id, v.name AS venue_name, s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            ORDER BY s.start_time
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(shows)
    }

    /// Shows for one venue, split into upcoming (strictly after `at`) and
    /// past relative to the passed evaluation time.
    pub async fn find_by_venue(&self, venue_id: i64, at: NaiveDateTime) -> Result<ShowPartition> {
        let upcoming = sqlx::query_as::<_, ShowDetails>(
            r#"
            SELECT s.id, s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.venue_id, v.name AS venue_name, s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            WHERE s.venue_id = ?1 AND s.start_time > ?2
            ORDER BY s.start_time
            "#,
        )
        .bind(venue_id)
        .bind(at)
        .fetch_all(&self.pool)
        .await?;

        let past = sqlx::query_as::<_, ShowDetails>(
            r#"
            SELECT s.id, s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.venue_id, v.name AS venue_name, s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            WHERE s.venue_id = ?1 AND s.start_time <= ?2
            ORDER BY s.start_time
            "#,
        )
        .bind(venue_id)
        .bind(at)
        .fetch_all(&self.pool)
        .await?;

        Ok(ShowPartition { upcoming, past })
    }

    /// Shows for one artist, split the same way.
    pub async fn find_by_artist(&self, artist_id: i64, at: NaiveDateTime) -> Result<ShowPartition> {
        let upcoming = sqlx::query_as::<_, ShowDetails>(
            r#"
            SELECT s.id, s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.venue_id, v.name AS venue_name, s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = ?1 AND s.start_time > ?2
            ORDER BY s.start_time
            "#,
        )
        .bind(artist_id)
        .bind(at)
        .fetch_all(&self.pool)
        .await?;

        let past = sqlx::query_as::<_, ShowDetails>(
            r#"
            SELECT s.id, s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.venue_id, v.name AS venue_name, s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = ?1 AND s.start_time <= ?2
            ORDER BY s.start_time
            "#,
        )
        .bind(artist_id)
        .bind(at)
        .fetch_all(&self.pool)
        .await?;

        Ok(ShowPartition { upcoming, past })
    }
}

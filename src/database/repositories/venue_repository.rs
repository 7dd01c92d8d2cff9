use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Venue, VenueInput};

#[derive(Clone)]
pub struct VenueRepository {
    pool: SqlitePool,
}

impl VenueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &VenueInput) -> Result<Venue> {
        let now = Utc::now().naive_utc();
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            INSERT INTO venues (name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description, date_created)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            RETURNING id, name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description, date_created
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(venue)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(
            "SELECT id, name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description, date_created FROM venues WHERE id = ?1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venue)
    }

    pub async fn find_all(&self) -> Result<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT id, name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description, date_created FROM venues ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }

    /// Home-page listing contract: ascending creation time, first `limit`
    /// rows. Ties broken by id so iteration order is stable.
    pub async fn find_recent(&self, limit: i64) -> Result<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT id, name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description, date_created FROM venues ORDER BY date_created ASC, id ASC LIMIT ?1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }

    /// Case-insensitive substring match on name, city, or state. An empty
    /// term becomes LIKE '%%' and matches every row.
    pub async fn search(&self, term: &str) -> Result<Vec<Venue>> {
        let pattern = format!("%{}%", term);
        let venues = sqlx::query_as::<_, Venue>(
            "SELECT id, name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description, date_created FROM venues WHERE name LIKE ?1 OR city LIKE ?1 OR state LIKE ?1 ORDER BY name"
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }

    /// Full overwrite of the editable fields. `date_created` is immutable
    /// once set and is deliberately absent from the SET list.
    pub async fn update(&self, id: i64, input: &VenueInput) -> Result<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            UPDATE venues
            SET name = ?1, city = ?2, state = ?3, address = ?4, phone = ?5, genres = ?6, image_link = ?7, facebook_link = ?8, website_link = ?9, seeking_talent = ?10, seeking_description = ?11
            WHERE id = ?12
            RETURNING id, name, city, state, address, phone, genres, image_link, facebook_link, website_link, seeking_talent, seeking_description, date_created
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.address)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venue)
    }

    /// Returns whether a row was removed. Foreign-key violations (the venue
    /// still has shows) propagate as errors instead of being swallowed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM venues WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

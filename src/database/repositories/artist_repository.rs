use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Artist, ArtistInput};

#[derive(Clone)]
pub struct ArtistRepository {
    pool: SqlitePool,
}

impl ArtistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &ArtistInput) -> Result<Artist> {
        let now = Utc::now().naive_utc();
        let artist = sqlx::query_as::<_, Artist>(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description, date_created)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            RETURNING id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description, date_created
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(artist)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(
            "SELECT id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description, date_created FROM artists WHERE id = ?1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(artist)
    }

    pub async fn find_all(&self) -> Result<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(
            "SELECT id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description, date_created FROM artists ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(artists)
    }

    /// Same listing contract as venues: ascending creation time, id tiebreak.
    pub async fn find_recent(&self, limit: i64) -> Result<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(
            "SELECT id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description, date_created FROM artists ORDER BY date_created ASC, id ASC LIMIT ?1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(artists)
    }

    /// Case-insensitive substring match on name, city, or state; empty term
    /// matches every row.
    pub async fn search(&self, term: &str) -> Result<Vec<Artist>> {
        let pattern = format!("%{}%", term);
        let artists = sqlx::query_as::<_, Artist>(
            "SELECT id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description, date_created FROM artists WHERE name LIKE ?1 OR city LIKE ?1 OR state LIKE ?1 ORDER BY name"
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(artists)
    }

    /// Full overwrite of the editable fields; `date_created` stays untouched.
    pub async fn update(&self, id: i64, input: &ArtistInput) -> Result<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(
            r#"
            UPDATE artists
            SET name = ?1, city = ?2, state = ?3, phone = ?4, genres = ?5, image_link = ?6, facebook_link = ?7, website_link = ?8, seeking_venue = ?9, seeking_description = ?10
            WHERE id = ?11
            RETURNING id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description, date_created
            "#,
        )
        .bind(&input.name)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.genres)
        .bind(&input.image_link)
        .bind(&input.facebook_link)
        .bind(&input.website_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(artist)
    }
}

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use anyhow::Result;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tempfile::TempDir;

use gigbook::BookingService;
use gigbook::database::init_database;
use gigbook::database::models::{ArtistInput, GenreList, ShowInput, VenueInput};
use gigbook::database::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use gigbook::handlers::{artists, home, shared, shows, venues};
use gigbook::middleware::RequestIdMiddleware;

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }

    pub fn venues(&self) -> VenueRepository {
        VenueRepository::new(self.pool.clone())
    }

    pub fn artists(&self) -> ArtistRepository {
        ArtistRepository::new(self.pool.clone())
    }

    pub fn shows(&self) -> ShowRepository {
        ShowRepository::new(self.pool.clone())
    }

    pub fn service(&self) -> BookingService {
        BookingService::new(self.venues(), self.artists(), self.shows())
    }
}

/// The application wired exactly like `main`, minus CORS and logging.
pub fn build_app(
    pool: SqlitePool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let venue_repository = VenueRepository::new(pool.clone());
    let artist_repository = ArtistRepository::new(pool.clone());
    let show_repository = ShowRepository::new(pool.clone());
    let booking_service = BookingService::new(
        venue_repository.clone(),
        artist_repository.clone(),
        show_repository.clone(),
    );

    App::new()
        .wrap(RequestIdMiddleware)
        .app_data(web::Data::new(venue_repository))
        .app_data(web::Data::new(artist_repository))
        .app_data(web::Data::new(show_repository))
        .app_data(web::Data::new(booking_service))
        .route("/", web::get().to(home::index))
        .service(
            web::scope("/venues")
                .route("", web::get().to(venues::get_venues))
                .route("/search", web::post().to(venues::search_venues))
                .route("/create", web::get().to(venues::create_venue_form))
                .route("/create", web::post().to(venues::create_venue_submission))
                .route("/{id}", web::get().to(venues::show_venue))
                .route("/{id}", web::delete().to(venues::delete_venue))
                .route("/{id}/edit", web::get().to(venues::edit_venue_form))
                .route("/{id}/edit", web::post().to(venues::edit_venue_submission)),
        )
        .service(
            web::scope("/artists")
                .route("", web::get().to(artists::get_artists))
                .route("/search", web::post().to(artists::search_artists))
                .route("/create", web::get().to(artists::create_artist_form))
                .route("/create", web::post().to(artists::create_artist_submission))
                .route("/{id}", web::get().to(artists::show_artist))
                .route("/{id}/edit", web::get().to(artists::edit_artist_form))
                .route("/{id}/edit", web::post().to(artists::edit_artist_submission)),
        )
        .service(
            web::scope("/shows")
                .route("", web::get().to(shows::get_shows))
                .route("/create", web::get().to(shows::create_show_form))
                .route("/create", web::post().to(shows::create_show_submission)),
        )
        .default_service(web::route().to(shared::not_found))
}

pub fn venue_input(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: Some("123-123-1234".to_string()),
        genres: GenreList::from(vec!["Jazz", "Reggae"]),
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        seeking_description: None,
    }
}

pub fn artist_input(name: &str, city: &str, state: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: GenreList::from(vec!["Rock n Roll"]),
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

pub fn show_input(artist_id: i64, venue_id: i64, start_time: NaiveDateTime) -> ShowInput {
    ShowInput {
        artist_id,
        venue_id,
        start_time,
    }
}

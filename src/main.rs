use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use gigbook::database::{
    init_database,
    repositories::{ArtistRepository, ShowRepository, VenueRepository},
};
use gigbook::handlers::{artists, home, shared, shows, venues};
use gigbook::middleware::RequestIdMiddleware;
use gigbook::{BookingService, Config};

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting Gigbook API server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    println!("✅ Database initialized");

    // Initialize repositories and services
    let venue_repository = VenueRepository::new(pool.clone());
    let artist_repository = ArtistRepository::new(pool.clone());
    let show_repository = ShowRepository::new(pool.clone());
    let booking_service = BookingService::new(
        venue_repository.clone(),
        artist_repository.clone(),
        show_repository.clone(),
    );

    let venue_repo_data = web::Data::new(venue_repository);
    let artist_repo_data = web::Data::new(artist_repository);
    let show_repo_data = web::Data::new(show_repository);
    let booking_service_data = web::Data::new(booking_service);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(venue_repo_data.clone())
            .app_data(artist_repo_data.clone())
            .app_data(show_repo_data.clone())
            .app_data(booking_service_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin("http://localhost:3000")
                    .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Content-Type",
                        "Accept",
                        "X-Requested-With",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(health)
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
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

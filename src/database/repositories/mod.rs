pub mod artist_repository;
pub mod show_repository;
pub mod venue_repository;

// Re-export all repositories for easy importing
pub use artist_repository::ArtistRepository;
pub use show_repository::ShowRepository;
pub use venue_repository::VenueRepository;

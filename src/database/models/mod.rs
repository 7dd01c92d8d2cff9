pub mod artist;
pub mod genres;
pub mod show;
pub mod venue;

// Re-export all models for easy importing
pub use artist::*;
pub use genres::*;
pub use show::*;
pub use venue::*;

pub mod artists;
pub mod home;
pub mod shared;
pub mod shows;
pub mod venues;

pub mod booking;

pub use booking::{
    BookingService, HomePageData, LocationGroup, SubmissionOutcome, VenueSummary,
};

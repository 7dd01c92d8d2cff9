use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use crate::database::models::{Artist, ArtistInput, Show, ShowInput, Venue, VenueInput};
use crate::database::repositories::{ArtistRepository, ShowRepository, VenueRepository};
use crate::error::AppError;

/// How many artists and venues the landing page lists.
const HOME_PAGE_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct HomePageData {
    pub recent_artists: Vec<Artist>,
    pub recent_venues: Vec<Venue>,
}

#[derive(Debug, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Serialize)]
pub struct LocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Result of a create/edit submission. Validation problems and store
/// failures both land in `Rejected`; the raw error goes to the logs and the
/// message is safe to show to the submitter.
#[derive(Debug)]
pub enum SubmissionOutcome<T> {
    Accepted { entity: T, message: String },
    Rejected { message: String },
    NotFound { message: String },
}

#[derive(Clone)]
pub struct BookingService {
    venues: VenueRepository,
    artists: ArtistRepository,
    shows: ShowRepository,
}

impl BookingService {
    pub fn new(
        venues: VenueRepository,
        artists: ArtistRepository,
        shows: ShowRepository,
    ) -> Self {
        Self {
            venues,
            artists,
            shows,
        }
    }

    /// Landing page data: the listing orders by creation time ascending and
    /// takes the first ten, which returns the ten oldest rows once the table
    /// grows past the limit. Kept as-is; the listing pages depend on it.
    pub async fn home_page(&self) -> Result<HomePageData, AppError> {
        let recent_artists = self.artists.find_recent(HOME_PAGE_LIMIT).await?;
        let recent_venues = self.venues.find_recent(HOME_PAGE_LIMIT).await?;

        Ok(HomePageData {
            recent_artists,
            recent_venues,
        })
    }

    /// All venues grouped by distinct (city, state), each entry carrying the
    /// venue's upcoming-show count. The count comes from the show partition
    /// at call time; nothing is stored.
    pub async fn venues_by_location(&self) -> Result<Vec<LocationGroup>, AppError> {
        let venues = self.venues.find_all().await?;
        let now = Utc::now().naive_utc();

        let mut with_counts = Vec::with_capacity(venues.len());
        for venue in venues {
            let shows = self.shows.find_by_venue(venue.id, now).await?;
            with_counts.push((venue, shows.upcoming.len()));
        }

        Ok(group_by_location(with_counts))
    }

    pub async fn create_venue_submission(&self, input: VenueInput) -> SubmissionOutcome<Venue> {
        if let Err(err) = validate_venue(&input) {
            return SubmissionOutcome::Rejected {
                message: reject_message(err),
            };
        }

        match self.venues.create(&input).await {
            Ok(venue) => SubmissionOutcome::Accepted {
                message: format!("{} was successfully listed!", venue.name),
                entity: venue,
            },
            Err(err) => {
                log::error!("Failed to create venue '{}': {}", input.name, err);
                SubmissionOutcome::Rejected {
                    message: format!(
                        "An error occurred. Venue {} could not be listed!",
                        input.name
                    ),
                }
            }
        }
    }

    pub async fn create_artist_submission(&self, input: ArtistInput) -> SubmissionOutcome<Artist> {
        if let Err(err) = validate_artist(&input) {
            return SubmissionOutcome::Rejected {
                message: reject_message(err),
            };
        }

        match self.artists.create(&input).await {
            Ok(artist) => SubmissionOutcome::Accepted {
                message: format!("{} was successfully listed!", artist.name),
                entity: artist,
            },
            Err(err) => {
                log::error!("Failed to create artist '{}': {}", input.name, err);
                SubmissionOutcome::Rejected {
                    message: format!(
                        "An error occurred. Artist {} could not be listed!",
                        input.name
                    ),
                }
            }
        }
    }

    /// A dangling artist or venue id fails on the foreign key and persists
    /// nothing; the insert is a single row, so there is no partial state to
    /// roll back.
    pub async fn create_show_submission(&self, input: ShowInput) -> SubmissionOutcome<Show> {
        if let Err(err) = validate_show(&input) {
            return SubmissionOutcome::Rejected {
                message: reject_message(err),
            };
        }

        match self.shows.create(&input).await {
            Ok(show) => SubmissionOutcome::Accepted {
                message: "Show was successfully listed!".to_string(),
                entity: show,
            },
            Err(err) => {
                log::error!(
                    "Failed to create show (artist {}, venue {}): {}",
                    input.artist_id,
                    input.venue_id,
                    err
                );
                SubmissionOutcome::Rejected {
                    message: "An error occurred. Show could not be listed!".to_string(),
                }
            }
        }
    }

    /// Full overwrite of a venue's editable fields; reads and writes the
    /// venues table only.
    pub async fn edit_venue_submission(
        &self,
        id: i64,
        input: VenueInput,
    ) -> SubmissionOutcome<Venue> {
        if let Err(err) = validate_venue(&input) {
            return SubmissionOutcome::Rejected {
                message: reject_message(err),
            };
        }

        match self.venues.update(id, &input).await {
            Ok(Some(venue)) => SubmissionOutcome::Accepted {
                message: format!("{} was successfully updated!", venue.name),
                entity: venue,
            },
            Ok(None) => SubmissionOutcome::NotFound {
                message: format!("Venue {} does not exist", id),
            },
            Err(err) => {
                log::error!("Failed to update venue {}: {}", id, err);
                SubmissionOutcome::Rejected {
                    message: format!("Venue {} could not be updated!", input.name),
                }
            }
        }
    }

    pub async fn edit_artist_submission(
        &self,
        id: i64,
        input: ArtistInput,
    ) -> SubmissionOutcome<Artist> {
        if let Err(err) = validate_artist(&input) {
            return SubmissionOutcome::Rejected {
                message: reject_message(err),
            };
        }

        match self.artists.update(id, &input).await {
            Ok(Some(artist)) => SubmissionOutcome::Accepted {
                message: format!("{} was successfully updated!", artist.name),
                entity: artist,
            },
            Ok(None) => SubmissionOutcome::NotFound {
                message: format!("Artist {} does not exist", id),
            },
            Err(err) => {
                log::error!("Failed to update artist {}: {}", id, err);
                SubmissionOutcome::Rejected {
                    message: format!("Artist {} could not be updated!", input.name),
                }
            }
        }
    }

    /// Typed delete: Ok(false) means no such venue. A venue that still has
    /// shows fails the foreign-key check and surfaces as an integrity error
    /// rather than being silently dropped.
    pub async fn delete_venue(&self, id: i64) -> Result<bool, AppError> {
        let deleted = self.venues.delete(id).await?;
        if deleted {
            log::info!("Deleted venue {}", id);
        }
        Ok(deleted)
    }
}

fn group_by_location(venues: Vec<(Venue, usize)>) -> Vec<LocationGroup> {
    let mut groups: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for (venue, num_upcoming_shows) in venues {
        groups
            .entry((venue.city.clone(), venue.state.clone()))
            .or_default()
            .push(VenueSummary {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows,
            });
    }

    groups
        .into_iter()
        .map(|((city, state), venues)| LocationGroup {
            city,
            state,
            venues,
        })
        .collect()
}

/// Strip the taxonomy prefix off validation errors so the submitter sees the
/// plain form message; anything else is already a safe summary.
fn reject_message(err: AppError) -> String {
    match err {
        AppError::Validation(message) => message,
        other => other.to_string(),
    }
}

fn validate_venue(input: &VenueInput) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if input.name.trim().is_empty() {
        missing.push("name");
    }
    if input.city.trim().is_empty() {
        missing.push("city");
    }
    if input.state.trim().is_empty() {
        missing.push("state");
    }
    if input.address.as_deref().is_none_or(|a| a.trim().is_empty()) {
        missing.push("address");
    }
    require(missing)
}

fn validate_artist(input: &ArtistInput) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if input.name.trim().is_empty() {
        missing.push("name");
    }
    if input.city.trim().is_empty() {
        missing.push("city");
    }
    if input.state.trim().is_empty() {
        missing.push("state");
    }
    require(missing)
}

fn validate_show(input: &ShowInput) -> Result<(), AppError> {
    let mut missing = Vec::new();
    if input.artist_id <= 0 {
        missing.push("artist_id");
    }
    if input.venue_id <= 0 {
        missing.push("venue_id");
    }
    require(missing)
}

fn require(missing: Vec<&str>) -> Result<(), AppError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Please check the form and try again ({} required)",
            missing.join(", ")
        )))
    }
}

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::address::en::CityName;
use gigbook::AppError;
use gigbook::services::SubmissionOutcome;
use pretty_assertions::assert_eq;

mod common;

#[tokio::test]
async fn home_page_lists_the_first_ten_rows_by_creation_time() {
    let db = common::TestDb::new().await.unwrap();
    let artists = db.artists();
    let service = db.service();

    let mut created_names = Vec::new();
    for i in 0..12 {
        let city: String = CityName().fake();
        let name = format!("Band {:02}", i);
        artists
            .create(&common::artist_input(&name, &city, "CA"))
            .await
            .unwrap();
        created_names.push(name);
    }

    let data = service.home_page().await.unwrap();

    // Ascending creation order, capped at ten: the listing shows the ten
    // oldest rows, not the ten newest.
    assert_eq!(data.recent_artists.len(), 10);
    let listed: Vec<String> = data
        .recent_artists
        .iter()
        .map(|a| a.name.clone())
        .collect();
    assert_eq!(listed, created_names[..10].to_vec());
    assert!(data.recent_venues.is_empty());
}

#[tokio::test]
async fn venues_by_location_groups_shared_city_state_pairs() {
    let db = common::TestDb::new().await.unwrap();
    let venues = db.venues();
    let artists = db.artists();
    let shows = db.shows();
    let service = db.service();

    let stubbs = venues
        .create(&common::venue_input("Stubb's", "Austin", "TX"))
        .await
        .unwrap();
    venues
        .create(&common::venue_input("Mohawk", "Austin", "TX"))
        .await
        .unwrap();
    venues
        .create(&common::venue_input("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();

    let spoon = artists
        .create(&common::artist_input("Spoon", "Austin", "TX"))
        .await
        .unwrap();
    shows
        .create(&common::show_input(
            spoon.id,
            stubbs.id,
            Utc::now().naive_utc() + Duration::days(14),
        ))
        .await
        .unwrap();

    let groups = service.venues_by_location().await.unwrap();
    assert_eq!(groups.len(), 2);

    let austin = groups
        .iter()
        .find(|g| g.city == "Austin" && g.state == "TX")
        .unwrap();
    assert_eq!(austin.venues.len(), 2);

    let stubbs_entry = austin.venues.iter().find(|v| v.name == "Stubb's").unwrap();
    assert_eq!(stubbs_entry.num_upcoming_shows, 1);
    let mohawk_entry = austin.venues.iter().find(|v| v.name == "Mohawk").unwrap();
    assert_eq!(mohawk_entry.num_upcoming_shows, 0);
}

#[tokio::test]
async fn venue_submission_round_trip_reports_success_message() {
    let db = common::TestDb::new().await.unwrap();
    let service = db.service();

    let outcome = service
        .create_venue_submission(common::venue_input("The Fillmore", "San Francisco", "CA"))
        .await;

    match outcome {
        SubmissionOutcome::Accepted { entity, message } => {
            assert_eq!(message, "The Fillmore was successfully listed!");
            assert!(entity.id > 0);
        }
        other => panic!("expected accepted submission, got {:?}", other),
    }

    // the Fillmore scenario: substring search on the city finds it
    let hits = db.venues().search("francisco").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "The Fillmore");
}

#[tokio::test]
async fn invalid_venue_submission_is_rejected_without_persisting() {
    let db = common::TestDb::new().await.unwrap();
    let service = db.service();

    let mut input = common::venue_input("", "San Francisco", "CA");
    input.address = None;

    let outcome = service.create_venue_submission(input).await;
    match outcome {
        SubmissionOutcome::Rejected { message } => {
            assert!(message.contains("name"));
            assert!(message.contains("address"));
        }
        other => panic!("expected rejected submission, got {:?}", other),
    }

    assert!(db.venues().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn show_submission_with_dangling_references_is_rejected() {
    let db = common::TestDb::new().await.unwrap();
    let service = db.service();

    let outcome = service
        .create_show_submission(common::show_input(
            12,
            34,
            Utc::now().naive_utc() + Duration::days(1),
        ))
        .await;

    match outcome {
        SubmissionOutcome::Rejected { message } => {
            assert_eq!(message, "An error occurred. Show could not be listed!");
        }
        other => panic!("expected rejected submission, got {:?}", other),
    }

    assert!(db.shows().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn edit_venue_submission_overwrites_fields_and_keeps_creation_time() {
    let db = common::TestDb::new().await.unwrap();
    let service = db.service();

    let venue = db
        .venues()
        .create(&common::venue_input("The Fillmore", "San Francisco", "CA"))
        .await
        .unwrap();

    let outcome = service
        .edit_venue_submission(
            venue.id,
            common::venue_input("The Fillmore West", "San Francisco", "CA"),
        )
        .await;

    match outcome {
        SubmissionOutcome::Accepted { entity, message } => {
            assert_eq!(message, "The Fillmore West was successfully updated!");
            assert_eq!(entity.date_created, venue.date_created);
        }
        other => panic!("expected accepted submission, got {:?}", other),
    }
}

#[tokio::test]
async fn edit_submission_for_missing_row_reports_not_found() {
    let db = common::TestDb::new().await.unwrap();
    let service = db.service();

    let venue_outcome = service
        .edit_venue_submission(9000, common::venue_input("Ghost", "Nowhere", "XX"))
        .await;
    assert!(matches!(venue_outcome, SubmissionOutcome::NotFound { .. }));

    let artist_outcome = service
        .edit_artist_submission(9000, common::artist_input("Ghost", "Nowhere", "XX"))
        .await;
    assert!(matches!(artist_outcome, SubmissionOutcome::NotFound { .. }));
}

#[tokio::test]
async fn delete_venue_is_typed_and_surfaces_integrity_failures() {
    let db = common::TestDb::new().await.unwrap();
    let service = db.service();

    let empty_venue = db
        .venues()
        .create(&common::venue_input("Mohawk", "Austin", "TX"))
        .await
        .unwrap();
    assert!(service.delete_venue(empty_venue.id).await.unwrap());
    assert!(!service.delete_venue(empty_venue.id).await.unwrap());

    // a venue with shows cannot be deleted silently
    let venue = db
        .venues()
        .create(&common::venue_input("Stubb's", "Austin", "TX"))
        .await
        .unwrap();
    let artist = db
        .artists()
        .create(&common::artist_input("Spoon", "Austin", "TX"))
        .await
        .unwrap();
    db.shows()
        .create(&common::show_input(
            artist.id,
            venue.id,
            Utc::now().naive_utc() + Duration::days(2),
        ))
        .await
        .unwrap();

    let err = service.delete_venue(venue.id).await.unwrap_err();
    assert!(matches!(err, AppError::Integrity(_)));
    assert!(db.venues().find_by_id(venue.id).await.unwrap().is_some());
}

//! Integration tests for trip CRUD against a real database:
//! - Create/read/update/delete scoped to the owning principal
//! - Cascade delete of itinerary items
//! - Tolerant decoding of corrupted preference payloads

use chrono::NaiveDate;
use sqlx::PgPool;
use tripforge_core::itinerary::{normalize_item, CreateItineraryItem};
use tripforge_core::preferences::TripPreferences;
use tripforge_db::models::trip::{CreateTrip, TripView, UpdateTrip};
use tripforge_db::repositories::{ItineraryItemRepo, TripRepo};

const USER: &str = "default-user";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn new_trip(title: &str) -> CreateTrip {
    CreateTrip {
        title: title.to_string(),
        destination: "Paris".to_string(),
        start_date: date("2024-06-01"),
        end_date: date("2024-06-03"),
        budget_min: Some(500),
        budget_max: Some(1500),
        preferences: TripPreferences {
            interests: vec!["culture".to_string()],
            ..TripPreferences::default()
        },
    }
}

fn new_item(title: &str, day: i32) -> tripforge_core::itinerary::NewItineraryItem {
    normalize_item(&CreateItineraryItem {
        day_number: day,
        start_time: None,
        end_time: None,
        activity_type: "attraction".to_string(),
        title: title.to_string(),
        description: None,
        location: None,
        cost: None,
        booking_url: None,
        weather_dependent: None,
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_draft_trip(pool: PgPool) {
    let trip = TripRepo::create(&pool, USER, &new_trip("Paris Trip"))
        .await
        .unwrap();

    assert_eq!(trip.user_id, USER);
    assert_eq!(trip.title, "Paris Trip");
    assert_eq!(trip.destination, "Paris");
    assert_eq!(trip.status, "draft");
    assert_eq!(trip.budget_min, Some(500));

    let view = TripView::from(trip);
    assert_eq!(view.preferences.interests, vec!["culture"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_is_scoped_to_owner(pool: PgPool) {
    let trip = TripRepo::create(&pool, USER, &new_trip("Mine")).await.unwrap();

    assert!(TripRepo::find_by_id(&pool, USER, trip.id)
        .await
        .unwrap()
        .is_some());
    assert!(TripRepo::find_by_id(&pool, "someone-else", trip.id)
        .await
        .unwrap()
        .is_none());
    assert!(!TripRepo::exists(&pool, "someone-else", trip.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_newest_first(pool: PgPool) {
    let first = TripRepo::create(&pool, USER, &new_trip("First")).await.unwrap();
    let second = TripRepo::create(&pool, USER, &new_trip("Second")).await.unwrap();

    let trips = TripRepo::list(&pool, USER).await.unwrap();
    assert_eq!(trips.len(), 2);
    // Equal timestamps can tie; ids break the tie in insertion order.
    assert!(trips.iter().any(|t| t.id == first.id));
    assert_eq!(
        trips.iter().map(|t| t.id).max().unwrap(),
        second.id
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_merges_fields_and_bumps_updated_at(pool: PgPool) {
    let trip = TripRepo::create(&pool, USER, &new_trip("Before")).await.unwrap();

    let updated = TripRepo::update(
        &pool,
        USER,
        trip.id,
        &UpdateTrip {
            title: Some("After".to_string()),
            destination: None,
            start_date: None,
            end_date: None,
            budget_min: None,
            budget_max: None,
            preferences: None,
            status: Some("planned".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.destination, "Paris");
    assert_eq!(updated.status, "planned");
    assert!(updated.updated_at >= trip.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_trip_returns_none(pool: PgPool) {
    let result = TripRepo::update(
        &pool,
        USER,
        999_999,
        &UpdateTrip {
            title: Some("After".to_string()),
            destination: None,
            start_date: None,
            end_date: None,
            budget_min: None,
            budget_max: None,
            preferences: None,
            status: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_cascades_to_itinerary_items(pool: PgPool) {
    let trip = TripRepo::create(&pool, USER, &new_trip("Doomed")).await.unwrap();
    ItineraryItemRepo::insert(&pool, trip.id, &new_item("Louvre", 1))
        .await
        .unwrap();

    assert!(TripRepo::delete(&pool, USER, trip.id).await.unwrap());
    // Second delete finds nothing.
    assert!(!TripRepo::delete(&pool, USER, trip.id).await.unwrap());

    let remaining: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM itinerary_items WHERE trip_id = $1")
            .bind(trip.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn corrupted_preferences_decode_to_defaults(pool: PgPool) {
    let trip = TripRepo::create(&pool, USER, &new_trip("Odd prefs")).await.unwrap();

    sqlx::query("UPDATE trips SET preferences = '\"garbage\"'::jsonb WHERE id = $1")
        .bind(trip.id)
        .execute(&pool)
        .await
        .unwrap();

    // The read itself still succeeds.
    let reread = TripRepo::find_by_id(&pool, USER, trip.id)
        .await
        .unwrap()
        .unwrap();
    let view = TripView::from(reread);
    assert_eq!(view.preferences, TripPreferences::default());
}

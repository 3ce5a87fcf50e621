//! End-to-end tests driving the real router over a test database:
//! request in, JSON out, including the error taxonomy the handlers and
//! the storage-error translator together guarantee.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use tripforge_api::config::ServerConfig;
use tripforge_api::routes;
use tripforge_api::state::AppState;
use tripforge_genai::ItineraryGenerator;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app(pool: PgPool) -> Router {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
        gemini_api_key: None,
        gemini_base_url: "http://localhost".to_string(),
        gemini_model: "gemini-pro".to_string(),
    };
    let state = AppState {
        pool,
        config: Arc::new(config),
        // No model key: generation exercises the rule-based fallback.
        generator: Arc::new(ItineraryGenerator::new(None)),
    };
    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .with_state(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_as(app, method, uri, body, None).await
}

async fn send_as(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    user_id: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn paris_trip_body() -> Value {
    json!({
        "title": "Paris Trip",
        "destination": "Paris",
        "startDate": "2024-06-01",
        "endDate": "2024-06-03",
        "preferences": {
            "interests": ["culture"],
            "travelStyle": "mid-range",
            "accommodation": "hotel",
            "pace": "moderate",
            "groupSize": 2
        }
    })
}

async fn create_paris_trip(app: &Router) -> i64 {
    let (status, body) = send(app, "POST", "/trips", Some(paris_trip_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Trips
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_trip_starts_as_draft(pool: PgPool) {
    let app = app(pool);
    let (status, body) = send(&app, "POST", "/trips", Some(paris_trip_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "draft");
    assert_eq!(body["title"], "Paris Trip");
    assert_eq!(body["startDate"], "2024-06-01");
    assert_eq!(body["preferences"]["travelStyle"], "mid-range");
    assert!(body["id"].as_i64().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_title_is_rejected(pool: PgPool) {
    let app = app(pool);
    let mut body = paris_trip_body();
    body["title"] = json!("   ");
    let (status, reply) = send(&app, "POST", "/trips", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["error"], "title is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn trips_are_scoped_by_principal(pool: PgPool) {
    let app = app(pool);
    create_paris_trip(&app).await;

    let (_, mine) = send(&app, "GET", "/trips", None).await;
    assert_eq!(mine["trips"].as_array().unwrap().len(), 1);

    let (_, theirs) = send_as(&app, "GET", "/trips", None, Some("someone-else")).await;
    assert_eq!(theirs["trips"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_update_is_rejected(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, body) = send(&app, "PUT", &format!("/trips/{trip_id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "no updates provided");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_status_is_rejected(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/trips/{trip_id}"),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("draft, planned, booked, completed"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_merges_into_stored_trip(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/trips/{trip_id}"),
        Some(json!({ "status": "planned", "budgetMax": 2000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "planned");
    assert_eq!(body["budgetMax"], 2000);
    // Untouched fields survive.
    assert_eq!(body["title"], "Paris Trip");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_trip_is_gone(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, _) = send(&app, "DELETE", &format!("/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Itinerary items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn louvre_item_round_trips(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, item) = send(
        &app,
        "POST",
        &format!("/trips/{trip_id}/itinerary"),
        Some(json!({
            "dayNumber": 1,
            "activityType": "attraction",
            "title": "Louvre",
            "cost": 20
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["tripId"].as_i64().unwrap(), trip_id);
    assert_eq!(item["cost"], 20);
    assert_eq!(item["weatherDependent"], false);
    assert_eq!(item["startTime"], Value::Null);
    assert!(item["createdAt"].as_str().is_some());

    // A subsequent read of the trip includes the item.
    let (_, trip) = send(&app, "GET", &format!("/trips/{trip_id}"), None).await;
    let itinerary = trip["itinerary"].as_array().unwrap();
    assert_eq!(itinerary.len(), 1);
    assert_eq!(itinerary[0]["title"], "Louvre");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fractional_cost_is_floored(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, item) = send(
        &app,
        "POST",
        &format!("/trips/{trip_id}/itinerary"),
        Some(json!({
            "dayNumber": 1,
            "activityType": "restaurant",
            "title": "Bistro lunch",
            "cost": 19.7
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["cost"], 19);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_canonical_time_is_rejected(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/trips/{trip_id}/itinerary"),
        Some(json!({
            "dayNumber": 1,
            "activityType": "attraction",
            "title": "Louvre",
            "startTime": "9:5"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("startTime"));

    // Nothing was persisted.
    let (_, trip) = send(&app, "GET", &format!("/trips/{trip_id}"), None).await;
    assert_eq!(trip["itinerary"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_activity_type_names_the_valid_set(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/trips/{trip_id}/itinerary"),
        Some(json!({
            "dayNumber": 1,
            "activityType": "safari",
            "title": "Big Five"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("flight, accommodation, activity, restaurant, transport, attraction"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn day_number_zero_is_rejected(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/trips/{trip_id}/itinerary"),
        Some(json!({
            "dayNumber": 0,
            "activityType": "attraction",
            "title": "Louvre"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "dayNumber must be a positive integer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_trip_wins_over_invalid_item(pool: PgPool) {
    let app = app(pool);

    // The item is invalid too, but the existence check runs first.
    let (status, body) = send(
        &app,
        "POST",
        "/trips/999999/itinerary",
        Some(json!({
            "dayNumber": 0,
            "activityType": "safari",
            "title": ""
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn items_read_back_in_day_and_time_order(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    for (day, time, title) in [
        (2, "19:00", "Dinner"),
        (1, "14:00", "Louvre"),
        (1, "08:30", "Breakfast"),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/trips/{trip_id}/itinerary"),
            Some(json!({
                "dayNumber": day,
                "startTime": time,
                "activityType": "activity",
                "title": title
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, trip) = send(&app, "GET", &format!("/trips/{trip_id}"), None).await;
    let titles: Vec<&str> = trip["itinerary"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Breakfast", "Louvre", "Dinner"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn identical_requests_create_distinct_items(pool: PgPool) {
    let app = app(pool);
    let trip_id = create_paris_trip(&app).await;

    let body = json!({ "dayNumber": 1, "activityType": "attraction", "title": "Louvre" });
    let (_, first) = send(&app, "POST", &format!("/trips/{trip_id}/itinerary"), Some(body.clone())).await;
    let (_, second) = send(&app, "POST", &format!("/trips/{trip_id}/itinerary"), Some(body)).await;

    assert_ne!(first["id"], second["id"]);
}

// ---------------------------------------------------------------------------
// Destinations & generation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn destinations_list_is_seeded_and_sorted(pool: PgPool) {
    let app = app(pool);
    let (status, body) = send(&app, "GET", "/destinations", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["destinations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Paris"));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generation_without_a_model_uses_the_fallback(pool: PgPool) {
    let app = app(pool);
    let (status, body) = send(
        &app,
        "POST",
        "/generate-itinerary",
        Some(json!({
            "destination": "Paris",
            "startDate": "2024-06-01",
            "endDate": "2024-06-03",
            "preferences": {
                "interests": ["culture"],
                "travelStyle": "mid-range",
                "accommodation": "hotel",
                "pace": "moderate",
                "groupSize": 2
            }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let itinerary = body["itinerary"].as_array().unwrap();
    assert!(!itinerary.is_empty());
    assert_eq!(itinerary[0]["dayNumber"], 1);
    // Proposals are not yet stored items: no ids.
    assert!(itinerary[0].get("id").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generation_with_inverted_dates_is_rejected(pool: PgPool) {
    let app = app(pool);
    let (status, body) = send(
        &app,
        "POST",
        "/generate-itinerary",
        Some(json!({
            "destination": "Paris",
            "startDate": "2024-06-03",
            "endDate": "2024-06-01",
            "preferences": {
                "interests": [],
                "travelStyle": "mid-range",
                "accommodation": "hotel",
                "pace": "moderate",
                "groupSize": 2
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("endDate"));
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database_state(pool: PgPool) {
    let app = app(pool);
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}

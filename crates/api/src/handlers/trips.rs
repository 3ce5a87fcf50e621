//! Handlers for trip CRUD.
//!
//! Every storage call is scoped by the requesting principal's user id,
//! so one user's trips are invisible to another even though today there
//! is only one real user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tripforge_core::error::CoreError;
use tripforge_core::trip::{validate_budget, validate_required_text, validate_status};
use tripforge_core::types::DbId;
use tripforge_db::models::trip::{CreateTrip, TripView, TripWithItinerary, UpdateTrip};
use tripforge_db::repositories::{ItineraryItemRepo, TripRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::principal::Principal;
use crate::state::AppState;

/// Response payload for trip listing.
#[derive(Debug, serde::Serialize)]
pub struct ListTripsResponse {
    pub trips: Vec<TripView>,
}

/// POST /trips
///
/// Create a new trip. New trips always start in `draft` status.
pub async fn create_trip(
    principal: Principal,
    State(state): State<AppState>,
    Json(mut input): Json<CreateTrip>,
) -> AppResult<impl IntoResponse> {
    input.title = validate_required_text("title", &input.title).map_err(AppError::BadRequest)?;
    input.destination =
        validate_required_text("destination", &input.destination).map_err(AppError::BadRequest)?;
    validate_budget("budgetMin", input.budget_min).map_err(AppError::BadRequest)?;
    validate_budget("budgetMax", input.budget_max).map_err(AppError::BadRequest)?;

    let trip = TripRepo::create(&state.pool, &principal.user_id, &input).await?;

    tracing::info!(
        user_id = %principal.user_id,
        trip_id = trip.id,
        destination = %trip.destination,
        "Trip created"
    );

    Ok((StatusCode::CREATED, Json(TripView::from(trip))))
}

/// GET /trips
///
/// List the principal's trips, newest first.
pub async fn list_trips(
    principal: Principal,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let trips = TripRepo::list(&state.pool, &principal.user_id)
        .await?
        .into_iter()
        .map(TripView::from)
        .collect();

    Ok(Json(ListTripsResponse { trips }))
}

/// GET /trips/{id}
///
/// Get one trip with its complete itinerary, sorted by day then start
/// time.
pub async fn get_trip(
    principal: Principal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let trip = TripRepo::find_by_id(&state.pool, &principal.user_id, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Trip", id })?;

    let itinerary = ItineraryItemRepo::list_by_trip(&state.pool, id).await?;

    Ok(Json(TripWithItinerary {
        trip: TripView::from(trip),
        itinerary,
    }))
}

/// PUT /trips/{id}
///
/// Partially update a trip. Absent fields keep their stored values; an
/// update carrying no fields at all is rejected.
pub async fn update_trip(
    principal: Principal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateTrip>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest("no updates provided".to_string()));
    }
    if let Some(title) = input.title.take() {
        input.title = Some(validate_required_text("title", &title).map_err(AppError::BadRequest)?);
    }
    if let Some(destination) = input.destination.take() {
        input.destination = Some(
            validate_required_text("destination", &destination).map_err(AppError::BadRequest)?,
        );
    }
    validate_budget("budgetMin", input.budget_min).map_err(AppError::BadRequest)?;
    validate_budget("budgetMax", input.budget_max).map_err(AppError::BadRequest)?;
    if let Some(ref status) = input.status {
        validate_status(status).map_err(AppError::BadRequest)?;
    }

    let trip = TripRepo::update(&state.pool, &principal.user_id, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Trip", id })?;

    tracing::info!(
        user_id = %principal.user_id,
        trip_id = id,
        "Trip updated"
    );

    Ok(Json(TripView::from(trip)))
}

/// DELETE /trips/{id}
///
/// Delete a trip. Its itinerary items go with it via the FK cascade.
pub async fn delete_trip(
    principal: Principal,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TripRepo::delete(&state.pool, &principal.user_id, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Trip", id }));
    }

    tracing::info!(
        user_id = %principal.user_id,
        trip_id = id,
        "Trip deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

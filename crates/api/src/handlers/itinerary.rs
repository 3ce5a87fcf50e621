//! Handler for the itinerary item creation pipeline.
//!
//! Order is part of the contract: the trip-existence pre-check runs
//! before any field validation, so an invalid item on a missing trip
//! still reports not-found. Validation happens once at this boundary;
//! the storage schema re-checks the same constraints and the central
//! error translator maps any violation back into the same taxonomy.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tripforge_core::error::CoreError;
use tripforge_core::itinerary::{normalize_item, CreateItineraryItem};
use tripforge_core::types::DbId;
use tripforge_db::repositories::{ItineraryItemRepo, TripRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::principal::Principal;
use crate::state::AppState;

/// POST /trips/{trip_id}/itinerary
///
/// Add one item to a trip's itinerary. Creation is not idempotent:
/// identical requests produce distinct items.
pub async fn add_itinerary_item(
    principal: Principal,
    State(state): State<AppState>,
    Path(trip_id): Path<DbId>,
    Json(input): Json<CreateItineraryItem>,
) -> AppResult<impl IntoResponse> {
    // Existence check precedes content validation.
    if !TripRepo::exists(&state.pool, &principal.user_id, trip_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Trip",
            id: trip_id,
        }));
    }

    let item = normalize_item(&input).map_err(AppError::BadRequest)?;

    let stored = ItineraryItemRepo::insert(&state.pool, trip_id, &item).await?;

    tracing::info!(
        user_id = %principal.user_id,
        trip_id,
        item_id = stored.id,
        day_number = stored.day_number,
        activity_type = %stored.activity_type,
        "Itinerary item created"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

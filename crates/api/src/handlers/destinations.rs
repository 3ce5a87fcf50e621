//! Handler for destination reference data.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use tripforge_db::models::destination::Destination;
use tripforge_db::repositories::DestinationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Response payload for destination listing.
#[derive(Debug, serde::Serialize)]
pub struct ListDestinationsResponse {
    pub destinations: Vec<Destination>,
}

/// GET /destinations
///
/// List all destinations available for trip planning, alphabetically.
pub async fn list_destinations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let destinations = DestinationRepo::list(&state.pool).await?;
    Ok(Json(ListDestinationsResponse { destinations }))
}

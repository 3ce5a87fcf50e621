//! Handler for AI-assisted itinerary generation.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use tripforge_core::itinerary::NewItineraryItem;
use tripforge_genai::GenerateItinerary;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload: proposed items, not yet attached to any trip.
#[derive(Debug, serde::Serialize)]
pub struct GenerateItineraryResponse {
    pub itinerary: Vec<NewItineraryItem>,
}

/// POST /generate-itinerary
///
/// Propose a day-by-day itinerary for a destination and date range.
/// Model trouble degrades to the rule-based generator; only an invalid
/// request is an error.
pub async fn generate_itinerary(
    State(state): State<AppState>,
    Json(input): Json<GenerateItinerary>,
) -> AppResult<impl IntoResponse> {
    let itinerary = state
        .generator
        .generate(&input)
        .await
        .map_err(AppError::BadRequest)?;

    tracing::info!(
        destination = %input.destination,
        items = itinerary.len(),
        "Itinerary generated"
    );

    Ok(Json(GenerateItineraryResponse { itinerary }))
}

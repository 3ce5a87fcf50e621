//! Route definition for itinerary generation.

use axum::routing::post;
use axum::Router;

use crate::handlers::generate;
use crate::state::AppState;

/// ```text
/// POST /generate-itinerary -> generate_itinerary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-itinerary", post(generate::generate_itinerary))
}

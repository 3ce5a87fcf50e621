//! Route definitions for destination reference data.

use axum::routing::get;
use axum::Router;

use crate::handlers::destinations;
use crate::state::AppState;

/// ```text
/// GET /destinations -> list_destinations
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/destinations", get(destinations::list_destinations))
}

//! Route definitions for trips and their itineraries.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{itinerary, trips};
use crate::state::AppState;

/// Trip routes.
///
/// ```text
/// GET    /trips                      -> list_trips
/// POST   /trips                      -> create_trip
/// GET    /trips/{id}                 -> get_trip
/// PUT    /trips/{id}                 -> update_trip
/// DELETE /trips/{id}                 -> delete_trip
/// POST   /trips/{trip_id}/itinerary  -> add_itinerary_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", get(trips::list_trips).post(trips::create_trip))
        .route(
            "/trips/{id}",
            get(trips::get_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route(
            "/trips/{trip_id}/itinerary",
            post(itinerary::add_itinerary_item),
        )
}

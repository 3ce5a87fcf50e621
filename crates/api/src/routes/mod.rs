pub mod destinations;
pub mod generate;
pub mod health;
pub mod trips;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health excluded; mount that at
/// root separately).
///
/// Route hierarchy:
///
/// ```text
/// /trips                           list, create
/// /trips/{id}                      get (with itinerary), update, delete
/// /trips/{trip_id}/itinerary       add item (POST)
///
/// /destinations                    list reference destinations
///
/// /generate-itinerary              propose items for a date range (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(trips::router())
        .merge(destinations::router())
        .merge(generate::router())
}

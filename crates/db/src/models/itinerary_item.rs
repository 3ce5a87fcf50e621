//! Itinerary item entity model.
//!
//! The creation DTO lives in `tripforge_core::itinerary` because the
//! generative service shares the same request shape and validation.

use serde::Serialize;
use sqlx::FromRow;
use tripforge_core::types::{DbId, Timestamp};

/// An itinerary item row from the `itinerary_items` table.
///
/// Items are insert-only: there is no update or delete path, and rows
/// disappear only when their owning trip is deleted (FK cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: DbId,
    pub trip_id: DbId,
    pub day_number: i32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity_type: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub cost: Option<i64>,
    pub booking_url: Option<String>,
    pub weather_dependent: bool,
    pub created_at: Timestamp,
}

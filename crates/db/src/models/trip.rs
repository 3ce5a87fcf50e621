//! Trip entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripforge_core::preferences::TripPreferences;
use tripforge_core::types::{CalendarDate, DbId, Timestamp};

use crate::models::itinerary_item::ItineraryItem;

/// A trip row from the `trips` table.
///
/// `preferences` is the raw JSONB value; decode it with
/// [`TripView::from`] before handing the trip to a client.
#[derive(Debug, Clone, FromRow)]
pub struct Trip {
    pub id: DbId,
    pub user_id: String,
    pub title: String,
    pub destination: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub preferences: serde_json::Value,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Trip shape returned by the API: preferences decoded tolerantly, so a
/// corrupted stored value yields the defaults rather than a failed read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripView {
    pub id: DbId,
    pub user_id: String,
    pub title: String,
    pub destination: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub preferences: TripPreferences,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Trip> for TripView {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            user_id: trip.user_id,
            title: trip.title,
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            budget_min: trip.budget_min,
            budget_max: trip.budget_max,
            preferences: TripPreferences::from_value_lossy(trip.preferences),
            status: trip.status,
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

/// A trip together with its itinerary, sorted by (day, start time).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripWithItinerary {
    #[serde(flatten)]
    pub trip: TripView,
    pub itinerary: Vec<ItineraryItem>,
}

/// DTO for creating a new trip. New trips always start as `draft`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrip {
    pub title: String,
    pub destination: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub preferences: TripPreferences,
}

/// DTO for updating an existing trip. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrip {
    pub title: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub preferences: Option<TripPreferences>,
    pub status: Option<String>,
}

impl UpdateTrip {
    /// True when the request carries no field to change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.destination.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.budget_min.is_none()
            && self.budget_max.is_none()
            && self.preferences.is_none()
            && self.status.is_none()
    }
}

//! Repository for the `itinerary_items` table.

use sqlx::PgPool;
use tripforge_core::itinerary::NewItineraryItem;
use tripforge_core::types::DbId;

use crate::models::itinerary_item::ItineraryItem;

/// Column list for itinerary_items queries.
const COLUMNS: &str = "id, trip_id, day_number, start_time, end_time, activity_type, \
    title, description, location, cost, booking_url, weather_dependent, created_at";

/// Provides insert and read operations for itinerary items.
pub struct ItineraryItemRepo;

impl ItineraryItemRepo {
    /// Insert one normalized item, returning the stored row.
    ///
    /// Expects input from `normalize_item`; the schema re-checks day
    /// number, activity type, title, and cost, and those violations
    /// surface as `sqlx::Error::Database` for the caller to classify.
    pub async fn insert(
        pool: &PgPool,
        trip_id: DbId,
        item: &NewItineraryItem,
    ) -> Result<ItineraryItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO itinerary_items
                (trip_id, day_number, start_time, end_time, activity_type,
                 title, description, location, cost, booking_url, weather_dependent)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItineraryItem>(&query)
            .bind(trip_id)
            .bind(item.day_number)
            .bind(&item.start_time)
            .bind(&item.end_time)
            .bind(&item.activity_type)
            .bind(&item.title)
            .bind(&item.description)
            .bind(&item.location)
            .bind(item.cost)
            .bind(&item.booking_url)
            .bind(item.weather_dependent)
            .fetch_one(pool)
            .await
    }

    /// List a trip's items in itinerary order: day, then start time.
    pub async fn list_by_trip(
        pool: &PgPool,
        trip_id: DbId,
    ) -> Result<Vec<ItineraryItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM itinerary_items
             WHERE trip_id = $1
             ORDER BY day_number, start_time"
        );
        sqlx::query_as::<_, ItineraryItem>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }
}

//! Repository for the `trips` table.

use sqlx::PgPool;
use tripforge_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip, UpdateTrip};

/// Column list for trips queries.
const COLUMNS: &str = "id, user_id, title, destination, start_date, end_date, \
    budget_min, budget_max, preferences, status, created_at, updated_at";

/// Provides CRUD operations for trips.
pub struct TripRepo;

impl TripRepo {
    /// Create a new trip for the given principal, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateTrip,
    ) -> Result<Trip, sqlx::Error> {
        let preferences = serde_json::to_value(&input.preferences)
            .unwrap_or(serde_json::Value::Null);
        let query = format!(
            "INSERT INTO trips
                (user_id, title, destination, start_date, end_date, budget_min, budget_max, preferences)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.destination)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget_min)
            .bind(input.budget_max)
            .bind(preferences)
            .fetch_one(pool)
            .await
    }

    /// Find a trip by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: &str,
        id: DbId,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trips WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a trip exists and is owned by the principal.
    ///
    /// The itinerary insert path runs this before validating item fields,
    /// so a missing trip reports not-found regardless of body contents.
    pub async fn exists(pool: &PgPool, user_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM trips WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.is_some())
    }

    /// List the principal's trips, newest first.
    pub async fn list(pool: &PgPool, user_id: &str) -> Result<Vec<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a trip by ID, returning the updated row.
    ///
    /// Absent fields keep their stored value; `updated_at` always bumps.
    pub async fn update(
        pool: &PgPool,
        user_id: &str,
        id: DbId,
        input: &UpdateTrip,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let preferences = input
            .preferences
            .as_ref()
            .map(|p| serde_json::to_value(p).unwrap_or(serde_json::Value::Null));
        let query = format!(
            "UPDATE trips SET
                title = COALESCE($3, title),
                destination = COALESCE($4, destination),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                budget_min = COALESCE($7, budget_min),
                budget_max = COALESCE($8, budget_max),
                preferences = COALESCE($9, preferences),
                status = COALESCE($10, status),
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.destination)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.budget_min)
            .bind(input.budget_max)
            .bind(preferences)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a trip by ID. Returns `true` if a row was deleted.
    ///
    /// Itinerary items go with it via the FK cascade; no application code
    /// deletes items.
    pub async fn delete(pool: &PgPool, user_id: &str, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `destinations` table (read-only reference data).

use sqlx::PgPool;

use crate::models::destination::Destination;

/// Column list for destinations queries.
const COLUMNS: &str = "id, name, country, description, image_url, \
    average_cost_per_day, best_months, tags, coordinates, created_at";

/// Provides read operations for destinations.
pub struct DestinationRepo;

impl DestinationRepo {
    /// List all destinations, alphabetically by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Destination>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM destinations ORDER BY name");
        sqlx::query_as::<_, Destination>(&query).fetch_all(pool).await
    }
}

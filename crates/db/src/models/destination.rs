//! Destination entity model.
//!
//! Read-only reference data seeded by migration; the application never
//! writes this table.

use serde::Serialize;
use sqlx::FromRow;
use tripforge_core::types::{DbId, Timestamp};

/// A destination row from the `destinations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub average_cost_per_day: Option<i64>,
    pub best_months: Vec<String>,
    pub tags: Vec<String>,
    /// `{ "lat": .., "lng": .. }` when present.
    pub coordinates: Option<serde_json::Value>,
    pub created_at: Timestamp,
}

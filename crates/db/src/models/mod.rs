//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs for the write paths
//!
//! Everything serializes camelCase, which is this API's wire convention.

pub mod destination;
pub mod itinerary_item;
pub mod trip;

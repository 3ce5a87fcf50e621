//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every trip-scoped query
//! also takes the requesting principal's user id, so ownership is part
//! of the statement rather than application-side filtering.

pub mod destination_repo;
pub mod itinerary_item_repo;
pub mod trip_repo;

pub use destination_repo::DestinationRepo;
pub use itinerary_item_repo::ItineraryItemRepo;
pub use trip_repo::TripRepo;

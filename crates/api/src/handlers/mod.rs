pub mod destinations;
pub mod generate;
pub mod itinerary;
pub mod trips;

use std::sync::Arc;

use tripforge_genai::ItineraryGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tripforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Itinerary generator (model-backed with rule-based fallback).
    pub generator: Arc<ItineraryGenerator>,
}

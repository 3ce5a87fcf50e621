//! Itinerary generation: a generative-language model when configured,
//! a deterministic rule-based generator otherwise.
//!
//! The model path fails closed: any transport, API, or decode failure
//! logs a warning and falls through to the rule-based generator, so the
//! endpoint degrades instead of erroring. Model output is re-validated
//! element by element with the same pipeline the insert path uses;
//! nothing malformed survives the decode.

use serde::Deserialize;
use tripforge_core::itinerary::NewItineraryItem;
use tripforge_core::preferences::TripPreferences;
use tripforge_core::trip::trip_day_count;
use tripforge_core::types::CalendarDate;

pub mod client;
pub mod decode;
pub mod fallback;
pub mod prompt;

pub use client::{GeminiClient, GenAiError};

/// A request to propose an itinerary for a destination and date range.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateItinerary {
    pub destination: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub budget: Option<i64>,
    pub preferences: TripPreferences,
}

/// Produces itinerary proposals; shared via `Arc` in the app state.
pub struct ItineraryGenerator {
    client: Option<GeminiClient>,
}

impl ItineraryGenerator {
    /// With `Some(client)` the model is tried first; with `None` every
    /// request uses the rule-based generator directly.
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    /// Generate proposed items for the request.
    ///
    /// Errors only when the request itself is invalid (empty
    /// destination, inverted date range); model trouble is not an error
    /// here, it is a fallback.
    pub async fn generate(&self, req: &GenerateItinerary) -> Result<Vec<NewItineraryItem>, String> {
        if req.destination.trim().is_empty() {
            return Err("destination is required".to_string());
        }
        let days = trip_day_count(req.start_date, req.end_date)?;

        if let Some(client) = &self.client {
            match Self::try_model(client, req, days).await {
                Ok(items) => return Ok(items),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        destination = %req.destination,
                        "Generative model unavailable, using rule-based fallback"
                    );
                }
            }
        }

        Ok(fallback::generate(req, days))
    }

    async fn try_model(
        client: &GeminiClient,
        req: &GenerateItinerary,
        days: i64,
    ) -> Result<Vec<NewItineraryItem>, GenAiError> {
        let prompt = prompt::build_prompt(req, days);
        let text = client.generate_content(&prompt).await?;
        decode::decode_items(&text).map_err(GenAiError::Decode)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn request() -> GenerateItinerary {
        GenerateItinerary {
            destination: "Paris".to_string(),
            start_date: NaiveDate::parse_from_str("2024-06-01", "%Y-%m-%d").unwrap(),
            end_date: NaiveDate::parse_from_str("2024-06-03", "%Y-%m-%d").unwrap(),
            budget: Some(1200),
            preferences: TripPreferences::default(),
        }
    }

    #[tokio::test]
    async fn unconfigured_generator_uses_fallback() {
        let generator = ItineraryGenerator::new(None);
        let items = generator.generate(&request()).await.unwrap();
        assert!(!items.is_empty());
    }

    #[tokio::test]
    async fn blank_destination_is_invalid() {
        let generator = ItineraryGenerator::new(None);
        let mut req = request();
        req.destination = "  ".to_string();
        assert_matches!(
            generator.generate(&req).await,
            Err(msg) if msg.contains("destination")
        );
    }

    #[tokio::test]
    async fn inverted_date_range_is_invalid() {
        let generator = ItineraryGenerator::new(None);
        let mut req = request();
        req.end_date = NaiveDate::parse_from_str("2024-05-01", "%Y-%m-%d").unwrap();
        assert!(generator.generate(&req).await.is_err());
    }

    #[tokio::test]
    async fn generation_is_deterministic_without_a_model() {
        let generator = ItineraryGenerator::new(None);
        let a = generator.generate(&request()).await.unwrap();
        let b = generator.generate(&request()).await.unwrap();
        assert_eq!(a, b);
    }
}

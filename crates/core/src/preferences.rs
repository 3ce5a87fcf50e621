//! Trip preference payloads.
//!
//! Preferences are stored as JSONB and round-tripped to the frontend as
//! camelCase JSON. Stored values are decoded tolerantly: a row whose
//! preferences column no longer parses yields the defaults instead of
//! failing the whole read.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Travel style / accommodation / pace vocabularies
// ---------------------------------------------------------------------------

pub const STYLE_BUDGET: &str = "budget";
pub const STYLE_MID_RANGE: &str = "mid-range";
pub const STYLE_LUXURY: &str = "luxury";

/// All known travel styles.
pub const TRAVEL_STYLES: &[&str] = &[STYLE_BUDGET, STYLE_MID_RANGE, STYLE_LUXURY];

pub const PACE_RELAXED: &str = "relaxed";
pub const PACE_MODERATE: &str = "moderate";
pub const PACE_PACKED: &str = "packed";

/// All known travel paces.
pub const PACES: &[&str] = &[PACE_RELAXED, PACE_MODERATE, PACE_PACKED];

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// User preferences attached to a trip and fed to itinerary generation.
///
/// Values outside the known vocabularies are carried through untouched;
/// consumers that key off them (the fallback generator) treat unknown
/// values as the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPreferences {
    pub interests: Vec<String>,
    pub travel_style: String,
    pub accommodation: String,
    pub pace: String,
    pub group_size: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Vec<String>>,
}

impl Default for TripPreferences {
    fn default() -> Self {
        Self {
            interests: Vec::new(),
            travel_style: STYLE_MID_RANGE.to_string(),
            accommodation: "hotel".to_string(),
            pace: PACE_MODERATE.to_string(),
            group_size: 2,
            accessibility: None,
        }
    }
}

impl TripPreferences {
    /// Decode a stored preferences value, substituting the defaults if the
    /// value does not match the expected shape.
    pub fn from_value_lossy(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

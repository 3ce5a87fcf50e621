//! Itinerary item vocabulary and the creation validation pipeline.
//!
//! [`normalize_item`] takes a raw creation request and produces a
//! storage-ready [`NewItineraryItem`] or a rejection message. The same
//! pipeline screens items proposed by the generative service before they
//! are shown to the client, so nothing malformed reaches storage by
//! either path.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Activity types
// ---------------------------------------------------------------------------

pub const ACTIVITY_FLIGHT: &str = "flight";
pub const ACTIVITY_ACCOMMODATION: &str = "accommodation";
pub const ACTIVITY_ACTIVITY: &str = "activity";
pub const ACTIVITY_RESTAURANT: &str = "restaurant";
pub const ACTIVITY_TRANSPORT: &str = "transport";
pub const ACTIVITY_ATTRACTION: &str = "attraction";

/// All valid activity types, also enforced by the storage schema.
pub const VALID_ACTIVITY_TYPES: &[&str] = &[
    ACTIVITY_FLIGHT,
    ACTIVITY_ACCOMMODATION,
    ACTIVITY_ACTIVITY,
    ACTIVITY_RESTAURANT,
    ACTIVITY_TRANSPORT,
    ACTIVITY_ATTRACTION,
];

/// Canonical time-of-day form: zero-padded `HH:MM`, 24-hour clock.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

// ---------------------------------------------------------------------------
// Request and normalized record
// ---------------------------------------------------------------------------

/// Raw creation request for an itinerary item, as received on the wire.
///
/// Also the shape the generative service is asked to produce, which is
/// why it lives here rather than in the storage layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItineraryItem {
    pub day_number: i32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity_type: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub cost: Option<f64>,
    pub booking_url: Option<String>,
    #[serde(default)]
    pub weather_dependent: Option<bool>,
}

/// A fully normalized itinerary item, ready for insertion: strings
/// trimmed, absent optionals `None`, cost floored to a whole amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItineraryItem {
    pub day_number: i32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity_type: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub cost: Option<i64>,
    pub booking_url: Option<String>,
    pub weather_dependent: bool,
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate that the day number is a positive (1-based) index.
pub fn validate_day_number(day_number: i32) -> Result<(), String> {
    if day_number >= 1 {
        Ok(())
    } else {
        Err("dayNumber must be a positive integer".to_string())
    }
}

/// Validate that the activity type is one of the allowed values.
pub fn validate_activity_type(activity_type: &str) -> Result<(), String> {
    if VALID_ACTIVITY_TYPES.contains(&activity_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid activityType '{activity_type}'. Must be one of: {}",
            VALID_ACTIVITY_TYPES.join(", ")
        ))
    }
}

/// Validate an optional `HH:MM` time-of-day field.
///
/// Malformed values are rejected rather than silently dropped, so the
/// stored form is always canonical.
pub fn validate_time(field: &str, value: &str) -> Result<(), String> {
    if TIME_RE.is_match(value) {
        Ok(())
    } else {
        Err(format!("{field} must be a valid HH:MM time (24-hour)"))
    }
}

/// Validate an optional cost and floor it to a whole amount.
pub fn normalize_cost(cost: f64) -> Result<i64, String> {
    if !cost.is_finite() || cost < 0.0 {
        return Err("cost must be a non-negative number".to_string());
    }
    Ok(cost.floor() as i64)
}

/// Trim an optional text field, treating empty-after-trim as absent.
pub fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Normalize a raw creation request into a storage-ready record.
///
/// Pure function: the trip-existence pre-check happens before this runs,
/// so a missing trip is reported as not-found even for an otherwise
/// invalid item.
pub fn normalize_item(req: &CreateItineraryItem) -> Result<NewItineraryItem, String> {
    validate_day_number(req.day_number)?;

    let activity_type = req.activity_type.trim();
    if activity_type.is_empty() {
        return Err("activityType is required".to_string());
    }
    validate_activity_type(activity_type)?;

    let title = req.title.trim();
    if title.is_empty() {
        return Err("title is required".to_string());
    }

    let start_time = normalize_optional_text(req.start_time.as_deref());
    if let Some(ref t) = start_time {
        validate_time("startTime", t)?;
    }
    let end_time = normalize_optional_text(req.end_time.as_deref());
    if let Some(ref t) = end_time {
        validate_time("endTime", t)?;
    }

    let cost = req.cost.map(normalize_cost).transpose()?;

    Ok(NewItineraryItem {
        day_number: req.day_number,
        start_time,
        end_time,
        activity_type: activity_type.to_string(),
        title: title.to_string(),
        description: normalize_optional_text(req.description.as_deref()),
        location: normalize_optional_text(req.location.as_deref()),
        cost,
        booking_url: normalize_optional_text(req.booking_url.as_deref()),
        weather_dependent: req.weather_dependent.unwrap_or(false),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

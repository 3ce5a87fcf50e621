//! Trip status vocabulary and trip-level validation.

use crate::types::CalendarDate;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PLANNED: &str = "planned";
pub const STATUS_BOOKED: &str = "booked";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid trip statuses. New trips start as `draft`.
pub const VALID_TRIP_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_PLANNED,
    STATUS_BOOKED,
    STATUS_COMPLETED,
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that the status is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_TRIP_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_TRIP_STATUSES.join(", ")
        ))
    }
}

/// Validate a required free-text field: non-empty after trimming.
///
/// Returns the trimmed value so callers store the canonical form.
pub fn validate_required_text(field: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} is required"));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional budget bound: must be non-negative when present.
///
/// `budget_min <= budget_max` is deliberately not checked, and neither is
/// `end_date >= start_date` on trips; both were always accepted.
pub fn validate_budget(field: &str, value: Option<i64>) -> Result<(), String> {
    match value {
        Some(v) if v < 0 => Err(format!("{field} must be non-negative")),
        _ => Ok(()),
    }
}

/// Number of calendar days a trip spans, counting both endpoints.
///
/// A same-day trip is 1 day. Returns an error when the range is inverted,
/// which generation requests reject up front.
pub fn trip_day_count(start: CalendarDate, end: CalendarDate) -> Result<i64, String> {
    let days = (end - start).num_days() + 1;
    if days < 1 {
        return Err("endDate must not be before startDate".to_string());
    }
    Ok(days)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

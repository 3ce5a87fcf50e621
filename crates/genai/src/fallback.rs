//! Deterministic rule-based itinerary generation.
//!
//! Used whenever the generative model is unconfigured or fails. Output
//! is a function of the request alone: activity templates keyed off the
//! interest tags, slot counts keyed off the pace, costs scaled by the
//! travel style. Every produced item satisfies the same validation the
//! insert path applies.

use tripforge_core::itinerary::{
    NewItineraryItem, ACTIVITY_ACTIVITY, ACTIVITY_ATTRACTION, ACTIVITY_RESTAURANT,
    ACTIVITY_TRANSPORT,
};
use tripforge_core::preferences::{
    PACE_PACKED, PACE_RELAXED, STYLE_BUDGET, STYLE_LUXURY,
};

use crate::GenerateItinerary;

// ---------------------------------------------------------------------------
// Tuning constants
// ---------------------------------------------------------------------------

const RELAXED_ACTIVITIES_PER_DAY: usize = 2;
const MODERATE_ACTIVITIES_PER_DAY: usize = 3;
const PACKED_ACTIVITIES_PER_DAY: usize = 4;

const BUDGET_COST_MULTIPLIER: f64 = 0.6;
const LUXURY_COST_MULTIPLIER: f64 = 2.5;

/// Daily slot windows, morning to evening. Slot count per day follows
/// the pace; unused evening slots are simply skipped.
const SLOTS: &[(&str, &str)] = &[
    ("09:00", "11:30"),
    ("12:00", "13:30"),
    ("14:30", "17:00"),
    ("19:00", "21:00"),
];

/// An activity template: title, type, description, weather flag, and a
/// mid-range base cost in USD (`None` = free).
type Template = (&'static str, &'static str, &'static str, bool, Option<i64>);

/// Templates for each known interest tag, in a fixed order.
const INTEREST_TEMPLATES: &[(&str, Template)] = &[
    ("culture", ("Old town walking tour", ACTIVITY_ATTRACTION, "Guided walk through the historic center and its main squares.", true, Some(15))),
    ("nature", ("Parks and gardens morning", ACTIVITY_ACTIVITY, "Unhurried time in the city's best green spaces.", true, Some(5))),
    ("food", ("Local food tasting", ACTIVITY_RESTAURANT, "Sample regional specialties at a well-loved local spot.", false, Some(35))),
    ("nightlife", ("Evening out on the town", ACTIVITY_ACTIVITY, "Bars and live music in the liveliest district.", false, Some(40))),
    ("adventure", ("Guided outdoor excursion", ACTIVITY_ACTIVITY, "A half-day excursion for something more strenuous.", true, Some(60))),
    ("relaxation", ("Spa and wellness afternoon", ACTIVITY_ACTIVITY, "Slow afternoon at a spa or thermal bath.", false, Some(50))),
    ("shopping", ("Markets and boutiques", ACTIVITY_ACTIVITY, "Browse local markets and independent shops.", false, None)),
    ("history", ("Historic landmarks tour", ACTIVITY_ATTRACTION, "The sites that shaped the city's story.", false, Some(20))),
    ("art", ("Art museum visit", ACTIVITY_ATTRACTION, "A focused visit to the standout collection in town.", false, Some(18))),
    ("architecture", ("Architecture highlights walk", ACTIVITY_ATTRACTION, "Landmark buildings old and new, seen from street level.", true, None)),
];

/// Used when no interest matches anything known.
const DEFAULT_TEMPLATES: &[Template] = &[
    ("City highlights tour", ACTIVITY_ATTRACTION, "An orientation tour of the must-see sights.", true, Some(25)),
    ("Local lunch stop", ACTIVITY_RESTAURANT, "A relaxed lunch where locals actually eat.", false, Some(20)),
    ("Neighborhood wandering", ACTIVITY_ACTIVITY, "Unstructured time to explore on foot.", true, None),
];

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

fn activities_per_day(pace: &str) -> usize {
    match pace {
        PACE_RELAXED => RELAXED_ACTIVITIES_PER_DAY,
        PACE_PACKED => PACKED_ACTIVITIES_PER_DAY,
        _ => MODERATE_ACTIVITIES_PER_DAY,
    }
}

fn cost_multiplier(travel_style: &str) -> f64 {
    match travel_style {
        STYLE_BUDGET => BUDGET_COST_MULTIPLIER,
        STYLE_LUXURY => LUXURY_COST_MULTIPLIER,
        _ => 1.0,
    }
}

fn scaled_cost(base: Option<i64>, multiplier: f64) -> Option<i64> {
    base.map(|c| (c as f64 * multiplier).floor() as i64)
}

/// Templates selected by the request's interests, falling back to the
/// generic set when nothing matches.
fn select_templates(interests: &[String]) -> Vec<Template> {
    let selected: Vec<Template> = INTEREST_TEMPLATES
        .iter()
        .filter(|(tag, _)| interests.iter().any(|i| i == tag))
        .map(|(_, t)| *t)
        .collect();
    if selected.is_empty() {
        DEFAULT_TEMPLATES.to_vec()
    } else {
        selected
    }
}

/// Generate a day-by-day itinerary.
///
/// Day 1 starts with arrival transport and the last day ends with
/// departure transport; the remaining slots cycle through the selected
/// templates so consecutive days differ when more than one template is
/// available.
pub fn generate(req: &GenerateItinerary, days: i64) -> Vec<NewItineraryItem> {
    let templates = select_templates(&req.preferences.interests);
    let per_day = activities_per_day(&req.preferences.pace);
    let multiplier = cost_multiplier(&req.preferences.travel_style);

    let mut items = Vec::new();
    let mut cursor = 0usize;

    for day in 1..=days as i32 {
        for slot in 0..per_day {
            let (start, end) = SLOTS[slot.min(SLOTS.len() - 1)];

            if day == 1 && slot == 0 {
                items.push(NewItineraryItem {
                    day_number: day,
                    start_time: Some(start.to_string()),
                    end_time: Some(end.to_string()),
                    activity_type: ACTIVITY_TRANSPORT.to_string(),
                    title: format!("Arrive in {}", req.destination),
                    description: Some("Travel to the destination and check in.".to_string()),
                    location: Some(req.destination.clone()),
                    cost: None,
                    booking_url: None,
                    weather_dependent: false,
                });
                continue;
            }
            if days > 1 && day == days as i32 && slot == per_day - 1 {
                items.push(NewItineraryItem {
                    day_number: day,
                    start_time: Some(start.to_string()),
                    end_time: Some(end.to_string()),
                    activity_type: ACTIVITY_TRANSPORT.to_string(),
                    title: format!("Depart {}", req.destination),
                    description: Some("Check out and head onward.".to_string()),
                    location: Some(req.destination.clone()),
                    cost: None,
                    booking_url: None,
                    weather_dependent: false,
                });
                continue;
            }

            let (title, activity_type, description, weather_dependent, base_cost) =
                templates[cursor % templates.len()];
            cursor += 1;

            items.push(NewItineraryItem {
                day_number: day,
                start_time: Some(start.to_string()),
                end_time: Some(end.to_string()),
                activity_type: activity_type.to_string(),
                title: title.to_string(),
                description: Some(description.to_string()),
                location: Some(req.destination.clone()),
                cost: scaled_cost(base_cost, multiplier),
                booking_url: None,
                weather_dependent,
            });
        }
    }

    items
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

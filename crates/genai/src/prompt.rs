//! Prompt construction for the generative itinerary request.

use crate::GenerateItinerary;

/// Build the day-by-day planning prompt.
///
/// The reply contract matters more than the prose: the model is told to
/// answer with a bare JSON array of item objects in exactly the shape
/// [`crate::decode::decode_items`] expects, with the activity type
/// restricted to the stored vocabulary.
pub fn build_prompt(req: &GenerateItinerary, days: i64) -> String {
    let budget_info = match req.budget {
        Some(budget) => format!("Around ${budget} total for the trip"),
        None => "Not specified".to_string(),
    };
    let interests = req.preferences.interests.join(", ");

    format!(
        r#"You are an expert travel planner. Create a personalized, day-by-day travel itinerary based on the following details.

**Trip Details:**
- Destination: {destination}
- Trip Duration: {days} days
- Dates: {start_date} to {end_date}
- Budget: {budget_info}
- Travel Style: {travel_style}
- Accommodation Preference: {accommodation}
- Travel Pace: {pace}
- Group Size: {group_size} people
- Interests: {interests}

**Instructions:**
1. Generate a detailed itinerary for each day of the trip.
2. Return the response as a single, valid JSON array of objects. Do not include any text, explanations, or markdown formatting like ```json ... ``` outside of the JSON array itself.
3. Each object in the array represents a single itinerary item and must have the following fields:
   - "dayNumber": (number) The day of the trip (e.g., 1, 2, 3).
   - "startTime": (string) The start time in "HH:MM" 24-hour format.
   - "endTime": (string) The end time in "HH:MM" 24-hour format.
   - "activityType": (string) The type of activity. Must be one of the following: "flight", "accommodation", "activity", "restaurant", "transport", "attraction".
   - "title": (string) A concise title for the activity.
   - "description": (string) A brief, engaging description of the activity.
   - "location": (string, optional) The specific location or address for the activity.
   - "cost": (number, optional) An estimated cost per person in USD.
   - "weatherDependent": (boolean) Set to true if the activity is weather-dependent.

**Example of a single item object:**
{{
  "dayNumber": 1,
  "startTime": "09:00",
  "endTime": "11:30",
  "activityType": "attraction",
  "title": "Visit the Louvre Museum",
  "description": "Explore one of the world's largest art museums and a historic monument in Paris.",
  "location": "Louvre Museum, 75001 Paris, France",
  "cost": 20,
  "weatherDependent": false
}}

Now, generate the complete JSON array for the trip described above."#,
        destination = req.destination,
        start_date = req.start_date,
        end_date = req.end_date,
        travel_style = req.preferences.travel_style,
        accommodation = req.preferences.accommodation,
        pace = req.preferences.pace,
        group_size = req.preferences.group_size,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

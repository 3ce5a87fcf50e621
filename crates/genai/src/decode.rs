//! Strict decoding of model replies.
//!
//! Models are told to answer with a bare JSON array, but replies often
//! arrive wrapped in markdown code fences anyway. The fences are
//! stripped, the array is parsed, and every element is pushed through
//! the same normalization pipeline as the item insert path. One bad
//! element fails the whole decode; the caller falls back rather than
//! forwarding a partially-valid proposal.

use tripforge_core::itinerary::{normalize_item, CreateItineraryItem, NewItineraryItem};

/// Remove markdown code-fence markers and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Decode a model reply into normalized itinerary items, failing closed.
pub fn decode_items(text: &str) -> Result<Vec<NewItineraryItem>, String> {
    let cleaned = strip_code_fences(text);

    let raw: Vec<CreateItineraryItem> = serde_json::from_str(&cleaned)
        .map_err(|e| format!("reply is not a JSON array of itinerary items: {e}"))?;

    raw.iter()
        .enumerate()
        .map(|(idx, item)| normalize_item(item).map_err(|e| format!("item {}: {e}", idx + 1)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

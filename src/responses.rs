//! Decoding of the top-level envelopes returned by the MealDB endpoints.
//!
//! Both the lookup and the filter endpoint wrap their records in a
//! `{"meals": [...]}` object. A lookup for an unknown id answers with
//! `{"meals": null}`.

use crate::error::DecodeError;
use crate::model::{MealDetail, MealSummary};
use crate::normalizer::{required, required_url, RecordNormalizer};
use crate::raw::{self, RawFieldMap};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<RawFieldMap>>,
}

/// Decode a lookup response with the default policy.
///
/// Returns `Ok(None)` when the API found no meal for the requested id.
pub fn decode_lookup(json: &str) -> Result<Option<MealDetail>, DecodeError> {
    decode_lookup_with(&RecordNormalizer::default(), json)
}

pub fn decode_lookup_with(
    normalizer: &RecordNormalizer,
    json: &str,
) -> Result<Option<MealDetail>, DecodeError> {
    let envelope: MealsEnvelope = serde_json::from_str(json)?;

    match envelope.meals.unwrap_or_default().first() {
        Some(raw) => normalizer.normalize(raw).map(Some),
        None => {
            debug!("Lookup response contained no meal");
            Ok(None)
        }
    }
}

/// Decode a filter (list) response, keeping the order the API returned.
pub fn decode_meal_list(json: &str) -> Result<Vec<MealSummary>, DecodeError> {
    let envelope: MealsEnvelope = serde_json::from_str(json)?;
    let meals = envelope.meals.unwrap_or_default();
    debug!("Decoding {} meal summaries", meals.len());

    meals.iter().map(summarize).collect()
}

/// Decode one entry of a filter response
pub fn summarize(raw: &RawFieldMap) -> Result<MealSummary, DecodeError> {
    let id = required(raw, raw::ID)?;
    if id.trim().is_empty() {
        return Err(DecodeError::EmptyField(raw::ID));
    }

    Ok(MealSummary {
        id: id.to_string(),
        name: required(raw, raw::NAME)?.to_string(),
        thumbnail_url: required_url(raw, raw::THUMBNAIL)?,
    })
}

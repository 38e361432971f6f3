pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod normalizer;
pub mod raw;
pub mod responses;

pub use config::{DecoderConfig, TagPolicy, UrlPolicy};
pub use error::DecodeError;
pub use ingredients::{IngredientCollector, MAX_INGREDIENT_SLOTS};
pub use model::{IngredientId, IngredientPair, MealDetail, MealSummary};
pub use normalizer::{normalize, RecordNormalizer};
pub use raw::RawFieldMap;
pub use responses::{decode_lookup, decode_lookup_with, decode_meal_list, summarize};

/// Decode a single meal object (not wrapped in a response envelope)
pub fn decode_meal(json: &str) -> Result<MealDetail, DecodeError> {
    let raw = RawFieldMap::from_json_str(json)?;
    normalize(&raw)
}

use crate::error::DecodeError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const ID: &str = "idMeal";
pub const NAME: &str = "strMeal";
pub const IMAGE_SOURCE: &str = "strImageSource";
pub const CATEGORY: &str = "strCategory";
pub const CUISINE: &str = "strArea";
pub const INSTRUCTIONS: &str = "strInstructions";
pub const TAGS: &str = "strTags";
pub const YOUTUBE: &str = "strYoutube";
pub const THUMBNAIL: &str = "strMealThumb";
pub const SOURCE: &str = "strSource";

/// Key of the ingredient name in numbered slot `slot`
pub fn ingredient_key(slot: usize) -> String {
    format!("strIngredient{slot}")
}

/// Key of the measurement in numbered slot `slot`
pub fn measure_key(slot: usize) -> String {
    format!("strMeasure{slot}")
}

/// One parsed-but-undecoded meal object: field name to string-or-null.
///
/// A key that is missing and a key that maps to `null` read the same way.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawFieldMap {
    fields: HashMap<String, Option<String>>,
}

impl RawFieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Self::from_json_object(map),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    pub fn from_json_object(map: Map<String, Value>) -> Result<Self, DecodeError> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        self.fields.insert(key.into(), value.map(Into::into));
    }

    /// Value for `key`, `None` when the key is missing or null
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|value| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for RawFieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut raw = RawFieldMap::new();
        for (key, value) in iter {
            raw.insert(key, value);
        }
        raw
    }
}

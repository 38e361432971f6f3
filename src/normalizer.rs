use crate::config::{DecoderConfig, TagPolicy, UrlPolicy};
use crate::error::DecodeError;
use crate::ingredients::IngredientCollector;
use crate::model::MealDetail;
use crate::raw::{self, RawFieldMap};
use log::debug;
use url::Url;

/// Turns a [`RawFieldMap`] into a [`MealDetail`].
///
/// The normalizer holds only policy, so one value can be shared freely
/// between threads and reused for any number of records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer {
    config: DecoderConfig,
    ingredients: IngredientCollector,
}

impl RecordNormalizer {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            ingredients: IngredientCollector,
        }
    }

    pub fn config(&self) -> DecoderConfig {
        self.config
    }

    pub fn normalize(&self, raw: &RawFieldMap) -> Result<MealDetail, DecodeError> {
        let id = required(raw, raw::ID)?;
        if id.trim().is_empty() {
            return Err(DecodeError::EmptyField(raw::ID));
        }
        let name = required(raw, raw::NAME)?;
        let thumbnail_url = required_url(raw, raw::THUMBNAIL)?;
        let source_url = self.optional_url(raw, raw::SOURCE)?;
        let image_source = raw.get(raw::IMAGE_SOURCE).map(String::from);
        let category = required(raw, raw::CATEGORY)?;
        let cuisine = required(raw, raw::CUISINE)?;
        let instructions = required(raw, raw::INSTRUCTIONS)?;
        let tags = self.tags(raw);
        let youtube_url = self.optional_url(raw, raw::YOUTUBE)?;
        let ingredients = self.ingredients.collect(raw);

        debug!(
            "Decoded meal {id} with {} ingredients and {} tags",
            ingredients.len(),
            tags.len()
        );

        Ok(MealDetail {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail_url,
            source_url,
            image_source,
            category: category.to_string(),
            cuisine: cuisine.to_string(),
            instructions: instructions.to_string(),
            tags,
            youtube_url,
            ingredients,
        })
    }

    /// A URL field that may be null, empty or whitespace, all meaning "none"
    fn optional_url(
        &self,
        raw: &RawFieldMap,
        key: &'static str,
    ) -> Result<Option<Url>, DecodeError> {
        let value = match raw.get(key).map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => return Ok(None),
        };

        match Url::parse(value) {
            Ok(url) => Ok(Some(url)),
            Err(source) => match self.config.optional_urls {
                UrlPolicy::Strict => Err(DecodeError::InvalidUrl { key, source }),
                UrlPolicy::Lenient => {
                    debug!("Ignoring unparsable {key} value {value:?}: {source}");
                    Ok(None)
                }
            },
        }
    }

    fn tags(&self, raw: &RawFieldMap) -> Vec<String> {
        let Some(tags) = raw.get(raw::TAGS) else {
            return Vec::new();
        };

        tags.split(',')
            .map(|tag| match self.config.tags {
                TagPolicy::Verbatim => tag,
                TagPolicy::Trimmed => tag.trim(),
            })
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Normalize with the default policy
pub fn normalize(raw: &RawFieldMap) -> Result<MealDetail, DecodeError> {
    RecordNormalizer::default().normalize(raw)
}

pub(crate) fn required<'a>(
    raw: &'a RawFieldMap,
    key: &'static str,
) -> Result<&'a str, DecodeError> {
    raw.get(key).ok_or(DecodeError::MissingField(key))
}

pub(crate) fn required_url(raw: &RawFieldMap, key: &'static str) -> Result<Url, DecodeError> {
    let value = required(raw, key)?;
    Url::parse(value.trim()).map_err(|source| DecodeError::InvalidUrl { key, source })
}

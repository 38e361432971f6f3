use thiserror::Error;

/// Errors that can occur while decoding a MealDB record
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A required key was absent or null
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A required identifier was present but blank
    #[error("Field is empty: {0}")]
    EmptyField(&'static str),

    /// A URL field could not be parsed
    #[error("Invalid URL in field {key}: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// The input was not valid JSON, or a value had an unexpected JSON type
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON value given as a record was not an object
    #[error("Expected a JSON object for the meal record")]
    NotAnObject,
}

impl DecodeError {
    /// The wire key this error refers to, if any
    pub fn key(&self) -> Option<&'static str> {
        match self {
            DecodeError::MissingField(key) | DecodeError::EmptyField(key) => Some(*key),
            DecodeError::InvalidUrl { key, .. } => Some(*key),
            DecodeError::Json(_) | DecodeError::NotAnObject => None,
        }
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Decoder policy configuration
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// What to do with a non-empty optional URL that does not parse
    #[serde(default)]
    pub optional_urls: UrlPolicy,
    /// How the pieces of the comma-separated tag list are treated
    #[serde(default)]
    pub tags: TagPolicy,
}

/// Handling of unparsable values in `strSource` and `strYoutube`
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UrlPolicy {
    /// Treat the field as absent
    #[default]
    Lenient,
    /// Fail the decode with `DecodeError::InvalidUrl`
    Strict,
}

/// Handling of the pieces produced by splitting `strTags` on commas
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Keep each piece exactly as received
    #[default]
    Verbatim,
    /// Trim each piece, dropping pieces that end up empty
    Trimmed,
}

impl DecoderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALDB__ prefix
    /// 2. mealdb.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALDB__OPTIONAL_URLS=strict
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`DecoderConfig::load`].
pub fn load_config() -> Result<DecoderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealdb").required(false))
        .add_source(
            Environment::with_prefix("MEALDB")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

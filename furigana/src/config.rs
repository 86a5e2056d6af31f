//! Japanese-specific configuration extending the base core config.

use serde::{Deserialize, Serialize};

/// Configuration for Japanese furigana annotation.
///
/// Flattens the generic engine config and adds the options that only make
/// sense for this language layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FuriganaConfig {
    /// Base configuration fields (normalization, cache sizing).
    #[serde(flatten)]
    pub base: libfurigana_core::Config,

    /// Consult the user's recorded corrections before the lexicon. When off,
    /// overrides are still used as a fallback for runs the lexicon does not
    /// know.
    pub prefer_user_readings: bool,

    /// Emit readings in katakana instead of the lexicon's hiragana.
    pub katakana_readings: bool,
}

impl Default for FuriganaConfig {
    fn default() -> Self {
        Self {
            base: libfurigana_core::Config::default(),
            prefer_user_readings: true,
            katakana_readings: false,
        }
    }
}

impl FuriganaConfig {
    /// Convert into the base config for `Engine::with_config`.
    pub fn into_base(self) -> libfurigana_core::Config {
        self.base
    }

    pub fn base(&self) -> &libfurigana_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut libfurigana_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

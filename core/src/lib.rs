//! libfurigana-core
//!
//! Core furigana annotation engine shared by language-level crates: run
//! segmentation over the `Unified_Ideograph` property, the delimited huri
//! encoding with total (never-failing) decoding, reading lookup through a
//! pluggable provider, and user-driven reading correction.
//!
//! Public API:
//! - `Engine` - conversion/parse/render/correct facade over a provider
//! - `HuriUnit` / `HuriSequence` - annotated token model
//! - `parse` / `render` - the huri codec
//! - `correct` - local reading replacement
//! - `segment` / `Run` - ideograph run segmentation
//! - `ReadingProvider` - the reading lookup contract
//! - `Lexicon` - fst/bincode-backed reading dictionary
//! - `UserDict` - persistent user reading overrides
//! - `Config` - engine configuration and TOML helpers

use serde::{Deserialize, Serialize};

pub mod codec;
pub use codec::{parse, render, READING_END, READING_START, UNIT_SEPARATOR};

pub mod editor;
pub use editor::correct;

pub mod engine;
pub use engine::Engine;

pub mod lexicon;
pub use lexicon::{Lexicon, ReadingEntry};

pub mod provider;
pub use provider::{ReadingProvider, StaticReadings};

pub mod segment;
pub use segment::{is_unified_ideograph, segment, Run, RunKind};

pub mod unit;
pub use unit::{HuriSequence, HuriUnit, UnitState};

pub mod userdict;
pub use userdict::{InMemoryOverrides, UserDict};

/// Generic engine configuration.
///
/// Language-level options (reading script, override precedence) belong in the
/// language crate's config, which flattens this one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Apply NFC normalization to convert input before segmentation.
    ///
    /// Off by default: normalizing rewrites decomposed kana, which would
    /// break the byte-exact passthrough of ideograph-free text.
    pub normalize_input: bool,

    /// Capacity of the run → reading memoization kept by caching providers.
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalize_input: false,
            // plenty for interactive conversion; imports bump this
            max_cache_size: 1024,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
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

/// Utility helpers.
pub mod utils {
    /// Canonical (NFC) normalization.
    pub fn nfc(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_round_trip() {
        let mut config = Config::default();
        config.normalize_input = true;
        config.max_cache_size = 64;

        let text = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert!(back.normalize_input);
        assert_eq!(back.max_cache_size, 64);
    }

    #[test]
    fn nfc_composes_decomposed_kana() {
        assert_eq!(utils::nfc("か\u{3099}"), "が");
        assert_eq!(utils::nfc("漢字"), "漢字");
    }
}

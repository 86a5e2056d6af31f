//! libfurigana crate root
//!
//! Japanese furigana annotation: composes the core engine with a reading
//! provider that layers user corrections over a lexicon, and adds the
//! kana-level utilities the core deliberately knows nothing about.
//!
//! Public API exported here:
//! - `JapaneseReadings` and `demo_lexicon` from `readings`
//! - `FuriganaConfig` from `config`
//! - kana helpers from `kana`
//! - `FuriganaEngine`, `demo_engine`, `ruby_text` convenience items
//! - the core types re-exported for callers that only depend on this crate

pub mod config;
pub mod kana;
pub mod readings;

// Re-export the core surface so hosts need a single dependency.
pub use libfurigana_core::{
    correct, is_unified_ideograph, parse, render, segment, Config, Engine, HuriSequence, HuriUnit,
    Lexicon, ReadingEntry, ReadingProvider, Run, RunKind, StaticReadings, UnitState, UserDict,
    READING_END, READING_START, UNIT_SEPARATOR,
};

pub use config::FuriganaConfig;
pub use readings::{demo_lexicon, JapaneseReadings};

/// The engine composition used by Japanese hosts.
pub type FuriganaEngine = Engine<JapaneseReadings>;

/// Engine over the built-in demo lexicon with in-memory overrides.
pub fn demo_engine() -> FuriganaEngine {
    let config = FuriganaConfig::default();
    let provider = JapaneseReadings::new(demo_lexicon(), UserDict::new_in_memory(), &config);
    Engine::with_config(provider, config.into_base())
}

/// Human-readable rendering of a sequence: annotated runs as 漢字（よみ）,
/// passthrough runs verbatim, unresolved runs as the bare kanji.
pub fn ruby_text(sequence: &HuriSequence) -> String {
    let mut out = String::new();
    for unit in sequence {
        if unit.is_plain() {
            out.push_str(unit.reading());
        } else if unit.is_unresolved() {
            out.push_str(unit.kanji());
        } else {
            out.push_str(unit.kanji());
            out.push('（');
            out.push_str(unit.reading());
            out.push('）');
        }
    }
    out
}

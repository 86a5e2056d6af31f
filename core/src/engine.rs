//! Annotation engine tying segmentation, reading lookup and the codec
//! together.
//!
//! The engine is generic over its [`ReadingProvider`] the same way the rest
//! of the crate stays agnostic about where readings come from: a compiled
//! lexicon, a user override store, a morphological analyzer behind FFI. It
//! holds no mutable state — every operation is a pure function over its
//! inputs plus the provider call, so a shared engine is safe to use from any
//! number of threads.

use crate::codec;
use crate::editor;
use crate::provider::ReadingProvider;
use crate::segment::{self, RunKind};
use crate::unit::HuriSequence;
use crate::Config;

/// Facade over the conversion pipeline: raw text → huri string → sequence →
/// correction → huri string.
pub struct Engine<P: ReadingProvider> {
    provider: P,
    config: Config,
}

impl<P: ReadingProvider> Engine<P> {
    /// Engine with default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, Config::default())
    }

    pub fn with_config(provider: P, config: Config) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert raw text into its canonical huri string.
    ///
    /// Plain runs pass through verbatim; each kanji run is annotated with the
    /// provider's reading for the run as a whole, or with an explicit empty
    /// reading when the provider has none. Empty input yields the empty
    /// string.
    pub fn convert(&self, raw: &str) -> String {
        let normalized;
        let text = if self.config.normalize_input {
            normalized = crate::utils::nfc(raw);
            normalized.as_str()
        } else {
            raw
        };

        let runs = segment::segment(text);
        tracing::debug!(runs = runs.len(), "converting text");

        let mut out = String::with_capacity(text.len());
        for (i, run) in runs.iter().enumerate() {
            if i > 0 {
                out.push(codec::UNIT_SEPARATOR);
            }
            match run.kind {
                RunKind::Plain => out.push_str(run.text),
                RunKind::Kanji => {
                    let reading = self.provider.reading(run.text);
                    if reading.is_none() {
                        tracing::debug!(run = run.text, "no reading for run");
                    }
                    out.push_str(&codec::encode_annotated(
                        run.text,
                        reading.as_deref().unwrap_or(""),
                    ));
                }
            }
        }
        out
    }

    /// Decode a huri string into a sequence of units.
    pub fn parse(&self, encoded: &str) -> HuriSequence {
        codec::parse(encoded)
    }

    /// Serialize a sequence back to its huri string.
    pub fn render(&self, sequence: &HuriSequence) -> String {
        codec::render(sequence)
    }

    /// Replace one unit's reading; see [`editor::correct`].
    pub fn correct(
        &self,
        sequence: &HuriSequence,
        unit_id: u32,
        new_reading: &str,
    ) -> HuriSequence {
        editor::correct(sequence, unit_id, new_reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticReadings;

    fn engine() -> Engine<StaticReadings> {
        let provider: StaticReadings = [("食", "た"), ("明日", "あした"), ("水", "みず")]
            .into_iter()
            .collect();
        Engine::new(provider)
    }

    #[test]
    fn ideograph_free_text_converts_to_itself() {
        let e = engine();
        for s in ["", "ひらがな", "hello, world", "カタカナ123。"] {
            assert_eq!(e.convert(s), s);
        }
    }

    #[test]
    fn kana_verb_produces_two_units() {
        let e = engine();
        let seq = e.parse(&e.convert("食べる"));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.units()[0].kanji(), "食");
        assert_eq!(seq.units()[0].reading(), "た");
        assert_eq!(seq.units()[1].kanji(), "");
        assert_eq!(seq.units()[1].reading(), "べる");
    }

    #[test]
    fn compound_run_gets_one_combined_reading() {
        let e = engine();
        let seq = e.parse(&e.convert("明日"));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.units()[0].kanji(), "明日");
        assert_eq!(seq.units()[0].reading(), "あした");
    }

    #[test]
    fn unknown_run_is_encoded_unresolved() {
        let e = engine();
        let seq = e.parse(&e.convert("峠"));
        assert_eq!(seq.len(), 1);
        assert!(seq.units()[0].is_unresolved());
        assert_eq!(seq.units()[0].kanji(), "峠");
        assert!(seq.has_unresolved());
    }

    #[test]
    fn render_after_parse_is_identity() {
        let e = engine();
        for raw in ["食べる", "明日は水", "峠", "", "かな only"] {
            let encoded = e.convert(raw);
            assert_eq!(e.render(&e.parse(&encoded)), encoded);
        }
    }

    #[test]
    fn correction_through_the_engine() {
        let e = engine();
        let seq = e.parse(&e.convert("食べる"));
        let fixed = e.correct(&seq, 0, "しょく");
        assert_eq!(fixed.units()[0].reading(), "しょく");
        assert_eq!(fixed.units()[1], seq.units()[1]);

        let unchanged = e.correct(&seq, 0, "");
        assert_eq!(unchanged, seq);
    }

    #[test]
    fn normalization_is_opt_in() {
        // decomposed か + combining dakuten normalizes to composed が
        let decomposed = "か\u{3099}";
        let e = engine();
        assert_eq!(e.convert(decomposed), decomposed);

        let mut config = Config::default();
        config.normalize_input = true;
        let e = Engine::with_config(StaticReadings::new(), config);
        assert_eq!(e.convert(decomposed), "が");
    }
}

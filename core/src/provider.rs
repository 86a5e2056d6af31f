//! Reading lookup contract.
//!
//! The engine never guesses pronunciations itself; it asks a
//! `ReadingProvider` once per kanji run. Providers must be deterministic for
//! fixed input and data, and must answer for the run as a whole so that
//! compounds get one combined reading instead of per-character concatenation.

/// A source of phonetic readings for kanji runs.
pub trait ReadingProvider {
    /// Best-effort kana reading for the whole run.
    ///
    /// `None` means the reading is unresolved; the engine encodes that state
    /// explicitly and never substitutes placeholder text.
    fn reading(&self, run: &str) -> Option<String>;
}

impl<P: ReadingProvider + ?Sized> ReadingProvider for &P {
    fn reading(&self, run: &str) -> Option<String> {
        (**self).reading(run)
    }
}

/// Fixed table of readings.
///
/// Useful for tests and for small hosts that ship a handful of known words
/// without a compiled lexicon.
#[derive(Debug, Clone, Default)]
pub struct StaticReadings {
    map: std::collections::HashMap<String, String>,
}

impl StaticReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the reading for a run.
    pub fn insert(&mut self, run: impl Into<String>, reading: impl Into<String>) {
        self.map.insert(run.into(), reading.into());
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<R: Into<String>, K: Into<String>> FromIterator<(R, K)> for StaticReadings {
    fn from_iter<T: IntoIterator<Item = (R, K)>>(iter: T) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(run, reading)| (run.into(), reading.into()))
                .collect(),
        }
    }
}

impl ReadingProvider for StaticReadings {
    fn reading(&self, run: &str) -> Option<String> {
        self.map.get(run).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_readings_answer_whole_runs() {
        let provider: StaticReadings = [("明日", "あした"), ("食", "た")].into_iter().collect();
        assert_eq!(provider.reading("明日"), Some("あした".to_string()));
        assert_eq!(provider.reading("明"), None);
    }

    #[test]
    fn missing_run_is_unresolved() {
        let provider = StaticReadings::new();
        assert!(provider.reading("峠").is_none());
    }
}

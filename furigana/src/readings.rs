//! Reading resolution for Japanese text.
//!
//! `JapaneseReadings` is the provider a host plugs into the core engine. It
//! layers the user's recorded corrections over a shared lexicon, memoizes
//! run lookups in an LRU cache (both stores can sit on disk), and optionally
//! converts resolved readings to katakana for display.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use libfurigana_core::{Lexicon, ReadingProvider, UserDict};
use lru::LruCache;

use crate::config::FuriganaConfig;
use crate::kana;

/// User overrides layered over a lexicon, with cached lookups.
pub struct JapaneseReadings {
    lexicon: Arc<Lexicon>,
    overrides: UserDict,
    cache: Mutex<LruCache<String, Option<String>>>,
    prefer_user: bool,
    katakana: bool,
}

impl JapaneseReadings {
    pub fn new(lexicon: Lexicon, overrides: UserDict, config: &FuriganaConfig) -> Self {
        Self::with_shared_lexicon(Arc::new(lexicon), overrides, config)
    }

    /// Share one loaded lexicon between several providers.
    pub fn with_shared_lexicon(
        lexicon: Arc<Lexicon>,
        overrides: UserDict,
        config: &FuriganaConfig,
    ) -> Self {
        let capacity = NonZeroUsize::new(config.base().max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(1024).expect("nonzero literal"));
        Self {
            lexicon,
            overrides,
            cache: Mutex::new(LruCache::new(capacity)),
            prefer_user: config.prefer_user_readings,
            katakana: config.katakana_readings,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn overrides(&self) -> &UserDict {
        &self.overrides
    }

    /// Record a correction so later conversions of the same run use it.
    ///
    /// Empty readings are ignored, mirroring the editor's rejection of empty
    /// corrections. The memoized entry for the run is dropped so the next
    /// lookup sees the override.
    pub fn learn_correction(&self, run: &str, reading: &str) {
        if reading.is_empty() {
            tracing::debug!(run, "ignoring empty correction");
            return;
        }
        self.overrides.set(run, reading);
        if let Ok(mut cache) = self.cache.lock() {
            cache.pop(run);
        }
    }

    fn resolve(&self, run: &str) -> Option<String> {
        if self.prefer_user {
            self.overrides.get(run).or_else(|| self.lexicon.best(run))
        } else {
            self.lexicon.best(run).or_else(|| self.overrides.get(run))
        }
    }
}

impl ReadingProvider for JapaneseReadings {
    fn reading(&self, run: &str) -> Option<String> {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(hit) = cache.get(run) {
                tracing::trace!(run, "reading cache hit");
                return hit.clone();
            }
        }

        let resolved = self.resolve(run).map(|reading| {
            if self.katakana {
                kana::to_katakana(&reading)
            } else {
                reading
            }
        });

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(run.to_string(), resolved.clone());
        }
        resolved
    }
}

/// A small lexicon of common words for smoke tests and the CLI fallback.
pub fn demo_lexicon() -> Lexicon {
    let mut lx = Lexicon::new();
    lx.insert("明日", "あした", 8);
    lx.insert("明日", "あす", 3);
    lx.insert("今日", "きょう", 9);
    lx.insert("日本", "にほん", 10);
    lx.insert("日本語", "にほんご", 6);
    lx.insert("漢字", "かんじ", 5);
    lx.insert("勉強", "べんきょう", 5);
    lx.insert("天気", "てんき", 4);
    lx.insert("水", "みず", 7);
    lx.insert("食", "しょく", 4);
    lx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(config: FuriganaConfig) -> JapaneseReadings {
        JapaneseReadings::new(demo_lexicon(), UserDict::new_in_memory(), &config)
    }

    #[test]
    fn lexicon_readings_resolve() {
        let p = provider(FuriganaConfig::default());
        assert_eq!(p.reading("明日"), Some("あした".to_string()));
        assert_eq!(p.reading("峠"), None);
    }

    #[test]
    fn corrections_take_precedence() {
        let p = provider(FuriganaConfig::default());
        assert_eq!(p.reading("食"), Some("しょく".to_string()));

        p.learn_correction("食", "た");
        assert_eq!(p.reading("食"), Some("た".to_string()));
    }

    #[test]
    fn lexicon_wins_when_user_readings_are_not_preferred() {
        let mut config = FuriganaConfig::default();
        config.prefer_user_readings = false;
        let p = provider(config);

        p.learn_correction("食", "た");
        assert_eq!(p.reading("食"), Some("しょく".to_string()));
        // but overrides still fill lexicon gaps
        p.learn_correction("峠", "とうげ");
        assert_eq!(p.reading("峠"), Some("とうげ".to_string()));
    }

    #[test]
    fn empty_corrections_are_ignored() {
        let p = provider(FuriganaConfig::default());
        p.learn_correction("食", "");
        assert_eq!(p.reading("食"), Some("しょく".to_string()));
    }

    #[test]
    fn katakana_output_converts_resolved_readings() {
        let mut config = FuriganaConfig::default();
        config.katakana_readings = true;
        let p = provider(config);
        assert_eq!(p.reading("明日"), Some("アシタ".to_string()));
    }

    #[test]
    fn cached_misses_are_invalidated_by_corrections() {
        let p = provider(FuriganaConfig::default());
        // cache the miss first
        assert_eq!(p.reading("峠"), None);
        p.learn_correction("峠", "とうげ");
        assert_eq!(p.reading("峠"), Some("とうげ".to_string()));
    }
}

//! Kanji-run reading lexicon.
//!
//! Maps a kanji run (single character or compound, e.g. "明日") to its known
//! readings with frequencies. Two storage tiers back the same lookup API:
//!
//! - an in-memory map for dynamic entries (tests, small hosts, imports in
//!   progress), consulted first;
//! - compiled artifacts for bundled dictionaries: an `fst::Map` from run keys
//!   to payload indices plus a bincode-serialized payload vector.
//!
//! The artifact writer lives here too so the offline converter tool and the
//! tests share one format definition.

use ahash::AHashMap;
use anyhow::{Context, Result};
use fst::Map;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::provider::ReadingProvider;

/// A single reading with a relative frequency. Higher is more common.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEntry {
    pub kana: String,
    pub freq: u32,
}

impl ReadingEntry {
    pub fn new(kana: impl Into<String>, freq: u32) -> Self {
        Self {
            kana: kana.into(),
            freq,
        }
    }
}

/// Reading lookup over in-memory entries and optional compiled artifacts.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    map: AHashMap<String, Vec<ReadingEntry>>,
    fst_map: Option<Map<Vec<u8>>>,
    payloads: Option<Vec<Vec<ReadingEntry>>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading for a run.
    ///
    /// If the run already has this reading its frequency is incremented by
    /// `freq`, otherwise the reading is appended.
    pub fn insert(&mut self, run: impl Into<String>, kana: impl Into<String>, freq: u32) {
        let run = run.into();
        let kana = kana.into();
        let bucket = self.map.entry(run).or_default();
        if let Some(entry) = bucket.iter_mut().find(|e| e.kana == kana) {
            entry.freq = entry.freq.saturating_add(freq);
        } else {
            bucket.push(ReadingEntry::new(kana, freq));
        }
    }

    /// All known readings for a run, most frequent first.
    pub fn lookup(&self, run: &str) -> Vec<ReadingEntry> {
        let mut entries = if let Some(bucket) = self.map.get(run) {
            bucket.clone()
        } else if let (Some(map), Some(payloads)) = (&self.fst_map, &self.payloads) {
            match map.get(run) {
                Some(idx) => payloads.get(idx as usize).cloned().unwrap_or_default(),
                None => Vec::new(),
            }
        } else {
            Vec::new()
        };
        entries.sort_by(|a, b| b.freq.cmp(&a.freq));
        entries
    }

    /// Reading texts for a run, most frequent first.
    pub fn readings(&self, run: &str) -> Vec<String> {
        self.lookup(run).into_iter().map(|e| e.kana).collect()
    }

    /// The most frequent reading for a run, if any is known.
    pub fn best(&self, run: &str) -> Option<String> {
        self.lookup(run).into_iter().next().map(|e| e.kana)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty() && self.payloads.as_ref().map_or(true, |p| p.is_empty())
    }

    /// Load a lexicon from compiled artifacts.
    ///
    /// - `fst_path`: fst map from run keys to payload indices
    /// - `bincode_path`: bincode `Vec<Vec<ReadingEntry>>` payload vector
    pub fn load_from_fst_bincode<P: AsRef<Path>>(fst_path: P, bincode_path: P) -> Result<Self> {
        let fst_path = fst_path.as_ref();
        let bincode_path = bincode_path.as_ref();

        let mut buf = Vec::new();
        File::open(fst_path)
            .with_context(|| format!("open fst {}", fst_path.display()))?
            .read_to_end(&mut buf)
            .context("read fst")?;
        let fst_map = Map::new(buf).context("parse fst map")?;

        let mut buf = Vec::new();
        File::open(bincode_path)
            .with_context(|| format!("open payloads {}", bincode_path.display()))?
            .read_to_end(&mut buf)
            .context("read payloads")?;
        let payloads: Vec<Vec<ReadingEntry>> =
            bincode::deserialize(&buf).context("deserialize payloads")?;

        tracing::info!(keys = payloads.len(), "loaded lexicon artifacts");
        Ok(Self {
            map: AHashMap::new(),
            fst_map: Some(fst_map),
            payloads: Some(payloads),
        })
    }

    /// Compile the in-memory entries into the fst + bincode artifact pair.
    ///
    /// Keys are sorted before insertion as the fst builder requires.
    pub fn save_artifacts<P: AsRef<Path>>(&self, fst_path: P, bincode_path: P) -> Result<()> {
        let mut keys: Vec<&String> = self.map.keys().collect();
        keys.sort();

        let mut builder = fst::MapBuilder::new(Vec::new()).context("create fst builder")?;
        let mut payloads: Vec<Vec<ReadingEntry>> = Vec::with_capacity(keys.len());
        for (index, key) in keys.iter().enumerate() {
            builder
                .insert(key, index as u64)
                .with_context(|| format!("insert key {key}"))?;
            let mut entries = self.map[*key].clone();
            entries.sort_by(|a, b| b.freq.cmp(&a.freq));
            payloads.push(entries);
        }
        let fst_bytes = builder.into_inner().context("finish fst")?;

        File::create(fst_path.as_ref())
            .with_context(|| format!("create {}", fst_path.as_ref().display()))?
            .write_all(&fst_bytes)
            .context("write fst")?;

        let encoded = bincode::serialize(&payloads).context("serialize payloads")?;
        File::create(bincode_path.as_ref())
            .with_context(|| format!("create {}", bincode_path.as_ref().display()))?
            .write_all(&encoded)
            .context("write payloads")?;
        Ok(())
    }
}

impl ReadingProvider for Lexicon {
    fn reading(&self, run: &str) -> Option<String> {
        self.best(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut lx = Lexicon::new();
        lx.insert("明日", "あした", 10);
        lx.insert("明日", "あす", 4);
        let readings = lx.readings("明日");
        assert_eq!(readings, vec!["あした".to_string(), "あす".to_string()]);
    }

    #[test]
    fn duplicate_insert_accumulates_frequency() {
        let mut lx = Lexicon::new();
        lx.insert("水", "みず", 1);
        lx.insert("水", "みず", 3);
        let entries = lx.lookup("水");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].freq, 4);
    }

    #[test]
    fn best_prefers_the_most_frequent_reading() {
        let mut lx = Lexicon::new();
        lx.insert("日", "にち", 2);
        lx.insert("日", "ひ", 9);
        assert_eq!(lx.best("日"), Some("ひ".to_string()));
    }

    #[test]
    fn unknown_run_has_no_reading() {
        let lx = Lexicon::new();
        assert!(lx.lookup("峠").is_empty());
        assert_eq!(lx.best("峠"), None);
        assert!(lx.reading("峠").is_none());
    }

    #[test]
    fn artifacts_round_trip() {
        let dir = std::env::temp_dir();
        let fst_path = dir.join(format!("furigana_lexicon_{}.fst", std::process::id()));
        let bin_path = dir.join(format!("furigana_lexicon_{}.bincode", std::process::id()));

        let mut lx = Lexicon::new();
        lx.insert("漢字", "かんじ", 5);
        lx.insert("明日", "あした", 8);
        lx.insert("明日", "あす", 2);
        lx.save_artifacts(&fst_path, &bin_path).unwrap();

        let loaded = Lexicon::load_from_fst_bincode(&fst_path, &bin_path).unwrap();
        assert_eq!(loaded.best("漢字"), Some("かんじ".to_string()));
        assert_eq!(
            loaded.readings("明日"),
            vec!["あした".to_string(), "あす".to_string()]
        );
        assert!(loaded.lookup("峠").is_empty());

        let _ = std::fs::remove_file(fst_path);
        let _ = std::fs::remove_file(bin_path);
    }
}

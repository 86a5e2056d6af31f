//! The delimited huri encoding.
//!
//! A huri string serializes a sequence of annotated units into a single
//! `String` that survives ordinary text storage:
//!
//! ```text
//! sequence := unit (UNIT_SEPARATOR unit)*
//! unit     := kanji READING_START reading READING_END | plain_text
//! ```
//!
//! The three sentinels are private-use-area codepoints, so they never occur
//! in source text or in kana produced by a reading provider. Decoding is
//! total: a truncated unit (reading start without terminator) is recovered
//! with its partial reading and flagged malformed instead of failing the
//! whole string, since previously persisted data must always load.
//!
//! Public API:
//! - `READING_START`, `READING_END`, `UNIT_SEPARATOR` — the sentinels
//! - `parse` — huri string → [`HuriSequence`]
//! - `render` — [`HuriSequence`] → huri string (inverse of `parse` on
//!   well-formed input)

use crate::unit::{HuriSequence, HuriUnit};

/// Opens a reading annotation; everything before it in a unit is the kanji.
pub const READING_START: char = '\u{E000}';
/// Terminates a reading annotation.
pub const READING_END: char = '\u{E001}';
/// Separates successive units in a sequence.
pub const UNIT_SEPARATOR: char = '\u{E002}';

/// Encode a single kanji run with its reading.
///
/// An unresolved reading is encoded as the empty string between the
/// sentinels, which keeps the unit explicit in the output.
pub(crate) fn encode_annotated(kanji: &str, reading: &str) -> String {
    let mut out = String::with_capacity(kanji.len() + reading.len() + 8);
    out.push_str(kanji);
    out.push(READING_START);
    out.push_str(reading);
    out.push(READING_END);
    out
}

/// Serialize a sequence back to its canonical huri string.
pub fn render(sequence: &HuriSequence) -> String {
    let mut out = String::new();
    for (i, unit) in sequence.units().iter().enumerate() {
        if i > 0 {
            out.push(UNIT_SEPARATOR);
        }
        if unit.is_plain() {
            out.push_str(unit.reading());
        } else {
            out.push_str(&encode_annotated(unit.kanji(), unit.reading()));
        }
    }
    out
}

/// Decode a huri string into an ordered sequence of units.
///
/// Ids are assigned positionally from zero. The empty string decodes to an
/// empty sequence.
pub fn parse(encoded: &str) -> HuriSequence {
    if encoded.is_empty() {
        return HuriSequence::default();
    }

    let mut units = Vec::new();
    for (index, raw) in encoded.split(UNIT_SEPARATOR).enumerate() {
        let id = index as u32;
        match raw.find(READING_START) {
            None => units.push(HuriUnit::plain(id, raw)),
            Some(at) => {
                let kanji = &raw[..at];
                let remainder = &raw[at + READING_START.len_utf8()..];
                match remainder.strip_suffix(READING_END) {
                    Some(reading) => units.push(HuriUnit::annotated(id, kanji, reading)),
                    None => {
                        tracing::debug!(unit = id, "unterminated reading, keeping partial text");
                        units.push(HuriUnit::truncated(id, kanji, remainder));
                    }
                }
            }
        }
    }
    HuriSequence::from_units(units)
}

//! Annotated unit and sequence types.
//!
//! A `HuriUnit` pairs one source run with its reading; a `HuriSequence` is the
//! ordered decode of a whole huri string. Units are immutable values: a
//! correction builds a replacement unit and a new sequence rather than
//! mutating in place, so callers can hold onto earlier sequences safely.

use serde::{Deserialize, Serialize};

/// Parse outcome for a decoded unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitState {
    /// The unit decoded cleanly (or was produced by the encoder/editor).
    WellFormed,
    /// The encoded unit had a reading start with no terminator; the reading
    /// holds whatever partial text was recoverable.
    Malformed,
}

/// One annotated token.
///
/// `kanji` is empty exactly when the unit is a passthrough run, in which case
/// `reading` holds the run text verbatim. For annotated units an empty
/// `reading` means the reading is unresolved, never that the run has no
/// pronunciation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuriUnit {
    id: u32,
    kanji: String,
    reading: String,
    state: UnitState,
}

impl HuriUnit {
    pub(crate) fn annotated(id: u32, kanji: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            id,
            kanji: kanji.into(),
            reading: reading.into(),
            state: UnitState::WellFormed,
        }
    }

    pub(crate) fn plain(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            kanji: String::new(),
            reading: text.into(),
            state: UnitState::WellFormed,
        }
    }

    pub(crate) fn truncated(id: u32, kanji: impl Into<String>, partial: impl Into<String>) -> Self {
        Self {
            id,
            kanji: kanji.into(),
            reading: partial.into(),
            state: UnitState::Malformed,
        }
    }

    /// Identity of this unit within its owning sequence.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The kanji run, empty for passthrough units.
    pub fn kanji(&self) -> &str {
        &self.kanji
    }

    /// The reading (or the literal run text for passthrough units).
    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn state(&self) -> UnitState {
        self.state
    }

    /// True for passthrough runs that carry no annotation.
    pub fn is_plain(&self) -> bool {
        self.kanji.is_empty()
    }

    /// True for kanji runs whose reading lookup came back empty.
    pub fn is_unresolved(&self) -> bool {
        !self.kanji.is_empty() && self.reading.is_empty()
    }

    pub fn is_malformed(&self) -> bool {
        self.state == UnitState::Malformed
    }

    /// Replacement unit with the same id and kanji and a new reading.
    ///
    /// The result is well-formed: a human-supplied reading repairs whatever
    /// truncation made the original malformed.
    pub(crate) fn with_reading(&self, reading: impl Into<String>) -> Self {
        Self {
            id: self.id,
            kanji: self.kanji.clone(),
            reading: reading.into(),
            state: UnitState::WellFormed,
        }
    }
}

/// Ordered sequence of annotated units, left-to-right source order.
///
/// Ids are unique within a sequence and assigned positionally at decode time;
/// they are not stable across independent decodes of different strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuriSequence {
    units: Vec<HuriUnit>,
}

impl HuriSequence {
    pub(crate) fn from_units(units: Vec<HuriUnit>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[HuriUnit] {
        &self.units
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HuriUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Look up a unit by id.
    pub fn get(&self, id: u32) -> Option<&HuriUnit> {
        self.units.iter().find(|u| u.id() == id)
    }

    /// True if any kanji run still lacks a reading. Hosts typically refuse to
    /// persist a sequence until this clears.
    pub fn has_unresolved(&self) -> bool {
        self.units.iter().any(HuriUnit::is_unresolved)
    }

    /// True if any unit was recovered from a truncated encoding.
    pub fn has_malformed(&self) -> bool {
        self.units.iter().any(HuriUnit::is_malformed)
    }

    /// Serialize back to the canonical huri string.
    pub fn render(&self) -> String {
        crate::codec::render(self)
    }

    /// Replace one unit's reading; see [`crate::editor::correct`].
    pub fn correct(&self, unit_id: u32, new_reading: &str) -> HuriSequence {
        crate::editor::correct(self, unit_id, new_reading)
    }
}

impl<'a> IntoIterator for &'a HuriSequence {
    type Item = &'a HuriUnit;
    type IntoIter = std::slice::Iter<'a, HuriUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

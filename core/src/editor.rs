//! Reading correction.
//!
//! Automated readings are best-effort, so the engine leaves disambiguation to
//! a human: the host shows the decoded sequence, the user picks a unit and
//! types the reading they want, and `correct` produces the updated sequence.
//! Correction is strictly local: the replacement unit keeps its id and kanji,
//! every other unit is untouched, and no resegmentation happens.

use crate::unit::HuriSequence;

/// Replace one unit's reading, returning the rebuilt sequence.
///
/// An empty `new_reading` is rejected and the sequence is returned unchanged;
/// the explicit empty-reading state is reserved for unresolved lookups, not
/// user input. An id that matches no unit is likewise a no-op: nothing in a
/// decoded string can reference a unit that does not exist, so a miss is host
/// bookkeeping gone wrong and must not be destructive.
pub fn correct(sequence: &HuriSequence, unit_id: u32, new_reading: &str) -> HuriSequence {
    if new_reading.is_empty() {
        tracing::debug!(unit = unit_id, "rejecting empty correction");
        return sequence.clone();
    }
    if sequence.get(unit_id).is_none() {
        tracing::debug!(unit = unit_id, "correction targets unknown unit");
        return sequence.clone();
    }

    let units = sequence
        .units()
        .iter()
        .map(|unit| {
            if unit.id() == unit_id {
                unit.with_reading(new_reading)
            } else {
                unit.clone()
            }
        })
        .collect();
    HuriSequence::from_units(units)
}

// Decoding must keep previously persisted data loadable even when a stored
// string was truncated. These tests build damaged encodings by hand from the
// public sentinels.

use libfurigana_core::{parse, render, READING_END, READING_START, UNIT_SEPARATOR};

fn annotated(kanji: &str, reading: &str) -> String {
    format!("{kanji}{READING_START}{reading}{READING_END}")
}

#[test]
fn truncated_reading_is_recovered_with_partial_text() {
    let damaged = format!("漢{READING_START}かん");
    let seq = parse(&damaged);
    assert_eq!(seq.len(), 1);

    let unit = &seq.units()[0];
    assert!(unit.is_malformed());
    assert_eq!(unit.kanji(), "漢");
    assert_eq!(unit.reading(), "かん");
    assert!(seq.has_malformed());
}

#[test]
fn reading_start_with_nothing_after_it() {
    let damaged = format!("字{READING_START}");
    let seq = parse(&damaged);
    let unit = &seq.units()[0];
    assert!(unit.is_malformed());
    assert_eq!(unit.kanji(), "字");
    assert_eq!(unit.reading(), "");
}

#[test]
fn damage_in_one_unit_does_not_poison_the_rest() {
    let encoded = format!(
        "{}{UNIT_SEPARATOR}峠{READING_START}とう{UNIT_SEPARATOR}かな",
        annotated("水", "みず"),
    );
    let seq = parse(&encoded);
    assert_eq!(seq.len(), 3);

    assert!(!seq.units()[0].is_malformed());
    assert_eq!(seq.units()[0].reading(), "みず");

    assert!(seq.units()[1].is_malformed());
    assert_eq!(seq.units()[1].reading(), "とう");

    assert!(!seq.units()[2].is_malformed());
    assert_eq!(seq.units()[2].reading(), "かな");
}

#[test]
fn rendering_a_repaired_unit_terminates_it_properly() {
    let damaged = format!("漢{READING_START}かん");
    let seq = parse(&damaged);
    let fixed = seq.correct(0, "かん");

    let stored = render(&fixed);
    assert_eq!(stored, annotated("漢", "かん"));
    let reloaded = parse(&stored);
    assert!(!reloaded.has_malformed());
}

#[test]
fn well_formed_strings_still_round_trip_exactly() {
    let encoded = format!(
        "{}{UNIT_SEPARATOR}べる{UNIT_SEPARATOR}{}",
        annotated("食", "た"),
        annotated("時", "とき"),
    );
    assert_eq!(render(&parse(&encoded)), encoded);
}

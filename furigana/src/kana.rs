//! Kana classification and conversion helpers.
//!
//! Hiragana and katakana occupy parallel Unicode blocks offset by 0x60, so
//! conversion between the scripts is codepoint arithmetic over the shared
//! range. Characters without a counterpart (the prolonged sound mark, small
//! katakana-only letters like ヷ) pass through unchanged.

const KANA_BLOCK_OFFSET: u32 = 0x60;

/// True for hiragana letters and iteration marks.
pub const fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}')
}

/// True for katakana letters, the prolonged sound mark and iteration marks.
pub const fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30FA}' | '\u{30FC}' | '\u{30FD}' | '\u{30FE}')
}

pub const fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// True if the string is non-empty and entirely kana.
pub fn is_all_kana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_kana)
}

/// Convert hiragana letters to katakana, leaving everything else unchanged.
pub fn to_katakana(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}' => {
                char::from_u32(ch as u32 + KANA_BLOCK_OFFSET).unwrap_or(ch)
            }
            _ => ch,
        })
        .collect()
}

/// Convert katakana letters back to hiragana, leaving everything else
/// unchanged. ヮ through ヶ map; ヷ..ヺ and ー have no hiragana counterpart.
pub fn to_hiragana(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            '\u{30A1}'..='\u{30F6}' | '\u{30FD}' | '\u{30FE}' => {
                char::from_u32(ch as u32 - KANA_BLOCK_OFFSET).unwrap_or(ch)
            }
            _ => ch,
        })
        .collect()
}

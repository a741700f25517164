//! Display width measurement.
//!
//! Table columns are sized in terminal columns, not bytes or chars. The default
//! rule ([`WidthMode::Han`]) is deliberately narrow: Han ideographs and a short
//! list of full-width punctuation take two columns, everything else takes one.
//! [`WidthMode::Unicode`] switches to East Asian Width rules for callers that
//! render Hangul, Kana or full-width Latin.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Full-width punctuation that renders two columns wide.
const WIDE_PUNCTUATION: [char; 8] = ['！', '…', '（', '）', '，', '。', '？', '、'];

/// Code point ranges of the Unicode Han script, sorted and non-overlapping.
const HAN_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x2E99),
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),
    (0x3005, 0x3005),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFA6D),
    (0xFA70, 0xFAD9),
    (0x16FE2, 0x16FE3),
    (0x16FF0, 0x16FF1),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2B739),
    (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1),
    (0x2CEB0, 0x2EBE0),
    (0x2F800, 0x2FA1D),
    (0x30000, 0x3134A),
    (0x31350, 0x323AF),
];

/// Rule used to measure how many terminal columns a string occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    /// Han ideographs and the full-width punctuation set count as 2.
    #[default]
    Han,
    /// East Asian Width classification via `unicode-width`.
    Unicode,
}

/// Returns true if `c` is in the Han script.
pub fn is_han(c: char) -> bool {
    let cp = c as u32;
    HAN_RANGES
        .binary_search_by(|&(start, end)| {
            if cp < start {
                std::cmp::Ordering::Greater
            } else if cp > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns true if `c` takes two columns under [`WidthMode::Han`].
pub fn is_wide(c: char) -> bool {
    is_han(c) || WIDE_PUNCTUATION.contains(&c)
}

/// Returns the display width of `s` under [`WidthMode::Han`].
///
/// # Example
///
/// ```rust
/// use standout_table::display_width;
///
/// assert_eq!(display_width("AB"), 2);
/// assert_eq!(display_width("中文"), 4);
/// assert_eq!(display_width("A中"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

/// Returns the display width of `s` under the given mode.
pub fn display_width_with(s: &str, mode: WidthMode) -> usize {
    match mode {
        WidthMode::Han => display_width(s),
        WidthMode::Unicode => s.width(),
    }
}

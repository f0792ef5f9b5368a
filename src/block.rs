//! Static Unicode block tables and classification predicates.
//!
//! The block arrays are grouped by how this crate treats the characters
//! (kanji, kana, wide punctuation and so on) rather than strictly by the
//! official block list, e.g. `COMMON_KANJI_BLOCKS` holds the blocks a
//! Japanese text is actually expected to use while `RARE_KANJI_BLOCKS`
//! holds the extension blocks that mostly show up via UCD links.

use crate::utf8::{COMBINING_SEMI_VOICED, COMBINING_VOICED};

/// An inclusive code point range with an optional block name and the
/// Unicode version that introduced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock {
    pub start: u32,
    pub end: u32,
    pub name: Option<&'static str>,
    pub version: Option<&'static str>,
}

impl UnicodeBlock {
    const fn new(start: u32, end: u32, name: &'static str, version: &'static str) -> Self {
        UnicodeBlock {
            start,
            end,
            name: Some(name),
            version: Some(version),
        }
    }

    /// Unnamed range, used by the display-width table.
    const fn range(start: u32, end: u32) -> Self {
        UnicodeBlock {
            start,
            end,
            name: None,
            version: None,
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.start <= c as u32 && c as u32 <= self.end
    }
}

pub static HIRAGANA_BLOCKS: [UnicodeBlock; 1] =
    [UnicodeBlock::new(0x3040, 0x309f, "Hiragana", "1.1")];

pub static KATAKANA_BLOCKS: [UnicodeBlock; 2] = [
    UnicodeBlock::new(0x30a0, 0x30ff, "Katakana", "1.1"),
    UnicodeBlock::new(0x31f0, 0x31ff, "Katakana Phonetic Extensions", "3.2"),
];

pub static COMMON_KANJI_BLOCKS: [UnicodeBlock; 4] = [
    UnicodeBlock::new(0x3400, 0x4dbf, "CJK Extension A", "3.0"),
    UnicodeBlock::new(0x4e00, 0x9fff, "CJK Unified Ideographs", "1.1"),
    UnicodeBlock::new(0xf900, 0xfaff, "CJK Compatibility Ideographs", "1.1"),
    UnicodeBlock::new(0x20000, 0x2a6df, "CJK Extension B", "3.1"),
];

pub static RARE_KANJI_BLOCKS: [UnicodeBlock; 4] = [
    UnicodeBlock::new(0x2e80, 0x2eff, "CJK Radicals Supplement", "3.0"),
    UnicodeBlock::new(0x2a700, 0x2ebef, "CJK Extension C-F", "5.2"),
    UnicodeBlock::new(0x2f800, 0x2fa1f, "CJK Compatibility Supplement", "3.1"),
    UnicodeBlock::new(0x30000, 0x3134f, "CJK Extension G", "13.0"),
];

pub static PUNCTUATION_BLOCKS: [UnicodeBlock; 3] = [
    UnicodeBlock::new(0x2000, 0x206f, "General Punctuation", "1.1"),
    UnicodeBlock::new(0x3000, 0x303f, "CJK Symbols and Punctuation", "1.1"),
    UnicodeBlock::new(0xfff0, 0xffff, "Specials", "1.1"),
];

pub static SYMBOL_BLOCKS: [UnicodeBlock; 7] = [
    UnicodeBlock::new(0x2100, 0x214f, "Letterlike Symbols", "1.1"),
    UnicodeBlock::new(0x2190, 0x21ff, "Arrows", "1.1"),
    UnicodeBlock::new(0x2200, 0x22ff, "Mathematical Operators", "1.1"),
    UnicodeBlock::new(0x2500, 0x257f, "Box Drawing", "1.1"),
    UnicodeBlock::new(0x25a0, 0x25ff, "Geometric Shapes", "1.1"),
    UnicodeBlock::new(0x2600, 0x26ff, "Miscellaneous Symbols", "1.1"),
    UnicodeBlock::new(0x3190, 0x319f, "Kanbun", "1.1"),
];

pub static LETTER_BLOCKS: [UnicodeBlock; 7] = [
    UnicodeBlock::new(0x0080, 0x00ff, "Latin-1 Supplement", "1.1"),
    UnicodeBlock::new(0x0100, 0x017f, "Latin Extended-A", "1.1"),
    UnicodeBlock::new(0x2150, 0x218f, "Number Forms", "1.1"),
    UnicodeBlock::new(0x2460, 0x24ff, "Enclosed Alphanumerics", "1.1"),
    UnicodeBlock::new(0x2c60, 0x2c7f, "Latin Extended-C", "5.0"),
    UnicodeBlock::new(0x3200, 0x32ff, "Enclosed CJK Letters and Months", "1.1"),
    UnicodeBlock::new(0xff00, 0xffef, "Halfwidth and Fullwidth Forms", "1.1"),
];

/// Variation selectors render with zero width.
pub static NON_SPACING_BLOCKS: [UnicodeBlock; 2] = [
    UnicodeBlock::new(0xfe00, 0xfe0f, "Variation Selectors", "3.2"),
    UnicodeBlock::new(0xe0100, 0xe01ef, "Variation Selectors Supplement", "4.0"),
];

/// East Asian Wide and Fullwidth ranges (two display columns each).
#[rustfmt::skip]
pub static WIDE_BLOCKS: [UnicodeBlock; 121] = [
    UnicodeBlock::range(0x1100, 0x115f), UnicodeBlock::range(0x231a, 0x231b),
    UnicodeBlock::range(0x2329, 0x232a), UnicodeBlock::range(0x23e9, 0x23ec),
    UnicodeBlock::range(0x23f0, 0x23f0), UnicodeBlock::range(0x23f3, 0x23f3),
    UnicodeBlock::range(0x25fd, 0x25fe), UnicodeBlock::range(0x2614, 0x2615),
    UnicodeBlock::range(0x2648, 0x2653), UnicodeBlock::range(0x267f, 0x267f),
    UnicodeBlock::range(0x2693, 0x2693), UnicodeBlock::range(0x26a1, 0x26a1),
    UnicodeBlock::range(0x26aa, 0x26ab), UnicodeBlock::range(0x26bd, 0x26be),
    UnicodeBlock::range(0x26c4, 0x26c5), UnicodeBlock::range(0x26ce, 0x26ce),
    UnicodeBlock::range(0x26d4, 0x26d4), UnicodeBlock::range(0x26ea, 0x26ea),
    UnicodeBlock::range(0x26f2, 0x26f3), UnicodeBlock::range(0x26f5, 0x26f5),
    UnicodeBlock::range(0x26fa, 0x26fa), UnicodeBlock::range(0x26fd, 0x26fd),
    UnicodeBlock::range(0x2705, 0x2705), UnicodeBlock::range(0x270a, 0x270b),
    UnicodeBlock::range(0x2728, 0x2728), UnicodeBlock::range(0x274c, 0x274c),
    UnicodeBlock::range(0x274e, 0x274e), UnicodeBlock::range(0x2753, 0x2755),
    UnicodeBlock::range(0x2757, 0x2757), UnicodeBlock::range(0x2795, 0x2797),
    UnicodeBlock::range(0x27b0, 0x27b0), UnicodeBlock::range(0x27bf, 0x27bf),
    UnicodeBlock::range(0x2b1b, 0x2b1c), UnicodeBlock::range(0x2b50, 0x2b50),
    UnicodeBlock::range(0x2b55, 0x2b55), UnicodeBlock::range(0x2e80, 0x2e99),
    UnicodeBlock::range(0x2e9b, 0x2ef3), UnicodeBlock::range(0x2f00, 0x2fd5),
    UnicodeBlock::range(0x2ff0, 0x2ffb), UnicodeBlock::range(0x3000, 0x303e),
    UnicodeBlock::range(0x3041, 0x3096), UnicodeBlock::range(0x3099, 0x30ff),
    UnicodeBlock::range(0x3105, 0x312f), UnicodeBlock::range(0x3131, 0x318e),
    UnicodeBlock::range(0x3190, 0x31e3), UnicodeBlock::range(0x31f0, 0x321e),
    UnicodeBlock::range(0x3220, 0x3247), UnicodeBlock::range(0x3250, 0x4dbf),
    UnicodeBlock::range(0x4e00, 0xa48c), UnicodeBlock::range(0xa490, 0xa4c6),
    UnicodeBlock::range(0xa960, 0xa97c), UnicodeBlock::range(0xac00, 0xd7a3),
    UnicodeBlock::range(0xf900, 0xfaff), UnicodeBlock::range(0xfe10, 0xfe19),
    UnicodeBlock::range(0xfe30, 0xfe52), UnicodeBlock::range(0xfe54, 0xfe66),
    UnicodeBlock::range(0xfe68, 0xfe6b), UnicodeBlock::range(0xff01, 0xff60),
    UnicodeBlock::range(0xffe0, 0xffe6), UnicodeBlock::range(0x16fe0, 0x16fe4),
    UnicodeBlock::range(0x16ff0, 0x16ff1), UnicodeBlock::range(0x17000, 0x187f7),
    UnicodeBlock::range(0x18800, 0x18cd5), UnicodeBlock::range(0x18d00, 0x18d08),
    UnicodeBlock::range(0x1aff0, 0x1aff3), UnicodeBlock::range(0x1aff5, 0x1affb),
    UnicodeBlock::range(0x1affd, 0x1affe), UnicodeBlock::range(0x1b000, 0x1b122),
    UnicodeBlock::range(0x1b150, 0x1b152), UnicodeBlock::range(0x1b164, 0x1b167),
    UnicodeBlock::range(0x1b170, 0x1b2fb), UnicodeBlock::range(0x1f004, 0x1f004),
    UnicodeBlock::range(0x1f0cf, 0x1f0cf), UnicodeBlock::range(0x1f18e, 0x1f18e),
    UnicodeBlock::range(0x1f191, 0x1f19a), UnicodeBlock::range(0x1f200, 0x1f202),
    UnicodeBlock::range(0x1f210, 0x1f23b), UnicodeBlock::range(0x1f240, 0x1f248),
    UnicodeBlock::range(0x1f250, 0x1f251), UnicodeBlock::range(0x1f260, 0x1f265),
    UnicodeBlock::range(0x1f300, 0x1f320), UnicodeBlock::range(0x1f32d, 0x1f335),
    UnicodeBlock::range(0x1f337, 0x1f37c), UnicodeBlock::range(0x1f37e, 0x1f393),
    UnicodeBlock::range(0x1f3a0, 0x1f3ca), UnicodeBlock::range(0x1f3cf, 0x1f3d3),
    UnicodeBlock::range(0x1f3e0, 0x1f3f0), UnicodeBlock::range(0x1f3f4, 0x1f3f4),
    UnicodeBlock::range(0x1f3f8, 0x1f43e), UnicodeBlock::range(0x1f440, 0x1f440),
    UnicodeBlock::range(0x1f442, 0x1f4fc), UnicodeBlock::range(0x1f4ff, 0x1f53d),
    UnicodeBlock::range(0x1f54b, 0x1f54e), UnicodeBlock::range(0x1f550, 0x1f567),
    UnicodeBlock::range(0x1f57a, 0x1f57a), UnicodeBlock::range(0x1f595, 0x1f596),
    UnicodeBlock::range(0x1f5a4, 0x1f5a4), UnicodeBlock::range(0x1f5fb, 0x1f64f),
    UnicodeBlock::range(0x1f680, 0x1f6c5), UnicodeBlock::range(0x1f6cc, 0x1f6cc),
    UnicodeBlock::range(0x1f6d0, 0x1f6d2), UnicodeBlock::range(0x1f6d5, 0x1f6d7),
    UnicodeBlock::range(0x1f6dd, 0x1f6df), UnicodeBlock::range(0x1f6eb, 0x1f6ec),
    UnicodeBlock::range(0x1f6f4, 0x1f6fc), UnicodeBlock::range(0x1f7e0, 0x1f7eb),
    UnicodeBlock::range(0x1f7f0, 0x1f7f0), UnicodeBlock::range(0x1f90c, 0x1f93a),
    UnicodeBlock::range(0x1f93c, 0x1f945), UnicodeBlock::range(0x1f947, 0x1f9ff),
    UnicodeBlock::range(0x1fa70, 0x1fa74), UnicodeBlock::range(0x1fa78, 0x1fa7c),
    UnicodeBlock::range(0x1fa80, 0x1fa86), UnicodeBlock::range(0x1fa90, 0x1faac),
    UnicodeBlock::range(0x1fab0, 0x1faba), UnicodeBlock::range(0x1fac0, 0x1fac5),
    UnicodeBlock::range(0x1fad0, 0x1fad9), UnicodeBlock::range(0x1fae0, 0x1fae7),
    UnicodeBlock::range(0x1faf0, 0x1faf6), UnicodeBlock::range(0x20000, 0x2fffd),
    UnicodeBlock::range(0x30000, 0x3fffd),
];

/// Ideographic (full-width) space.
pub const WIDE_SPACE: char = '\u{3000}';

fn in_blocks(c: char, blocks: &[UnicodeBlock]) -> bool {
    blocks.iter().any(|b| b.contains(c))
}

pub fn is_hiragana_char(c: char) -> bool {
    in_blocks(c, &HIRAGANA_BLOCKS)
}

pub fn is_katakana_char(c: char) -> bool {
    in_blocks(c, &KATAKANA_BLOCKS)
}

pub fn is_kana_char(c: char) -> bool {
    is_hiragana_char(c) || is_katakana_char(c)
}

pub fn is_common_kanji_char(c: char) -> bool {
    in_blocks(c, &COMMON_KANJI_BLOCKS)
}

pub fn is_rare_kanji_char(c: char) -> bool {
    in_blocks(c, &RARE_KANJI_BLOCKS)
}

pub fn is_kanji_char(c: char) -> bool {
    is_common_kanji_char(c) || is_rare_kanji_char(c)
}

pub fn is_non_spacing_char(c: char) -> bool {
    in_blocks(c, &NON_SPACING_BLOCKS) || c == COMBINING_VOICED || c == COMBINING_SEMI_VOICED
}

/// Check the first code point of `s` against `blocks`. With `size_one`,
/// `s` must be exactly one code point.
fn check(s: &str, size_one: bool, blocks: &[&[UnicodeBlock]]) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if size_one && chars.next().is_some() {
        return false;
    }
    blocks.iter().any(|b| in_blocks(first, b))
}

fn check_all(s: &str, blocks: &[&[UnicodeBlock]]) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| blocks.iter().any(|b| in_blocks(c, b)))
}

pub fn is_hiragana(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&HIRAGANA_BLOCKS])
}

pub fn is_katakana(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&KATAKANA_BLOCKS])
}

pub fn is_kana(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&HIRAGANA_BLOCKS, &KATAKANA_BLOCKS])
}

pub fn is_kanji(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&COMMON_KANJI_BLOCKS, &RARE_KANJI_BLOCKS])
}

pub fn is_common_kanji(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&COMMON_KANJI_BLOCKS])
}

pub fn is_rare_kanji(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&RARE_KANJI_BLOCKS])
}

pub fn is_mb_symbol(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&SYMBOL_BLOCKS])
}

pub fn is_mb_letter(s: &str, size_one: bool) -> bool {
    check(s, size_one, &[&LETTER_BLOCKS])
}

/// The wide space is only counted as punctuation when `include_space` is
/// set.
pub fn is_mb_punctuation(s: &str, include_space: bool, size_one: bool) -> bool {
    if s.starts_with(WIDE_SPACE) {
        include_space && (!size_one || s.chars().count() == 1)
    } else {
        check(s, size_one, &[&PUNCTUATION_BLOCKS])
    }
}

/// True if the first code point is in any block this crate recognizes.
pub fn is_recognized_mb(s: &str, size_one: bool) -> bool {
    check(
        s,
        size_one,
        &[
            &HIRAGANA_BLOCKS,
            &KATAKANA_BLOCKS,
            &COMMON_KANJI_BLOCKS,
            &RARE_KANJI_BLOCKS,
            &PUNCTUATION_BLOCKS,
            &SYMBOL_BLOCKS,
            &LETTER_BLOCKS,
        ],
    )
}

pub fn is_all_hiragana(s: &str) -> bool {
    check_all(s, &[&HIRAGANA_BLOCKS])
}

pub fn is_all_katakana(s: &str) -> bool {
    check_all(s, &[&KATAKANA_BLOCKS])
}

pub fn is_all_kana(s: &str) -> bool {
    check_all(s, &[&HIRAGANA_BLOCKS, &KATAKANA_BLOCKS])
}

pub fn is_all_kanji(s: &str) -> bool {
    check_all(s, &[&COMMON_KANJI_BLOCKS, &RARE_KANJI_BLOCKS])
}

pub fn is_all_mb_symbol(s: &str) -> bool {
    check_all(s, &[&SYMBOL_BLOCKS])
}

pub fn is_all_mb_letter(s: &str) -> bool {
    check_all(s, &[&LETTER_BLOCKS])
}

pub fn is_all_mb_punctuation(s: &str) -> bool {
    check_all(s, &[&PUNCTUATION_BLOCKS])
}

pub fn is_all_recognized_mb(s: &str) -> bool {
    check_all(
        s,
        &[
            &HIRAGANA_BLOCKS,
            &KATAKANA_BLOCKS,
            &COMMON_KANJI_BLOCKS,
            &RARE_KANJI_BLOCKS,
            &PUNCTUATION_BLOCKS,
            &SYMBOL_BLOCKS,
            &LETTER_BLOCKS,
        ],
    )
}

/// The named block containing `c`, searching every table this crate
/// classifies by (the display-width table is not included).
pub fn find_block(c: char) -> Option<&'static UnicodeBlock> {
    [
        &HIRAGANA_BLOCKS[..],
        &KATAKANA_BLOCKS[..],
        &COMMON_KANJI_BLOCKS[..],
        &RARE_KANJI_BLOCKS[..],
        &PUNCTUATION_BLOCKS[..],
        &SYMBOL_BLOCKS[..],
        &LETTER_BLOCKS[..],
        &NON_SPACING_BLOCKS[..],
    ]
    .into_iter()
    .flatten()
    .find(|b| b.contains(c))
}

/// Number of terminal columns needed to display `s`: non-spacing marks take
/// none, wide characters take two, everything else takes one.
pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| {
            if is_non_spacing_char(c) {
                0
            } else if in_blocks(c, &WIDE_BLOCKS) {
                2
            } else {
                1
            }
        })
        .sum()
}

/// Append `start-end` pairs for a regex character class.
fn push_class(out: &mut String, blocks: &[UnicodeBlock]) {
    use core::fmt::Write;
    for b in blocks {
        let _ = write!(out, "\\u{{{:X}}}-\\u{{{:X}}}", b.start, b.end);
    }
}

/// Character-class body matching every kanji block plus variation
/// selectors, for building regular expressions over Japanese text.
pub fn kanji_class() -> String {
    let mut out = String::new();
    push_class(&mut out, &COMMON_KANJI_BLOCKS);
    push_class(&mut out, &RARE_KANJI_BLOCKS);
    push_class(&mut out, &NON_SPACING_BLOCKS);
    out
}

/// Character-class body for both kana scripts (including the prolong mark
/// and combining marks which live inside these blocks).
pub fn kana_class() -> String {
    let mut out = String::new();
    push_class(&mut out, &HIRAGANA_BLOCKS);
    push_class(&mut out, &KATAKANA_BLOCKS);
    out
}

/// Character-class body for the halfwidth/fullwidth letter block.
pub fn wide_letter_class() -> String {
    let mut out = String::new();
    push_class(&mut out, &LETTER_BLOCKS[6..7]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered(blocks: &[UnicodeBlock]) {
        for pair in blocks.windows(2) {
            assert!(pair[0].end < pair[1].start, "{:?}", pair);
        }
        for b in blocks {
            assert!(b.start <= b.end, "{b:?}");
        }
    }

    #[test]
    fn blocks_are_ordered_and_disjoint() {
        ordered(&HIRAGANA_BLOCKS);
        ordered(&KATAKANA_BLOCKS);
        ordered(&COMMON_KANJI_BLOCKS);
        ordered(&RARE_KANJI_BLOCKS);
        ordered(&PUNCTUATION_BLOCKS);
        ordered(&SYMBOL_BLOCKS);
        ordered(&LETTER_BLOCKS);
        ordered(&NON_SPACING_BLOCKS);
        ordered(&WIDE_BLOCKS);
    }

    #[test]
    fn classify_kana() {
        assert!(is_hiragana("ひらがな", false));
        assert!(!is_hiragana("ひらがな", true));
        assert!(is_hiragana("ひ", true));
        assert!(is_katakana("カ", true));
        assert!(is_kana("か", true) && is_kana("カ", true));
        assert!(!is_hiragana("カ", true));
        assert!(is_all_hiragana("ひらがな"));
        assert!(!is_all_hiragana("ひらgana"));
        assert!(is_all_katakana("カタカナ"));
        assert!(is_all_kana("かたカタ"));
    }

    #[test]
    fn classify_kanji() {
        assert!(is_kanji("雪", true));
        assert!(is_common_kanji("雪", true));
        assert!(!is_rare_kanji("雪", true));
        // radical supplement is rare
        assert!(is_rare_kanji("⺀", true));
        assert!(!is_kanji("か", true));
        assert!(is_all_kanji("吹雪"));
        // extension B
        assert!(is_kanji("𠮟", true));
    }

    #[test]
    fn classify_punctuation_symbols_letters() {
        assert!(is_mb_punctuation("。", false, true));
        assert!(is_mb_punctuation("　", true, true));
        assert!(!is_mb_punctuation("　", false, true));
        assert!(is_mb_symbol("☆", true));
        assert!(is_mb_letter("Ａ", true));
        assert!(!is_mb_letter("ー", true));
        assert!(is_recognized_mb("、", true));
        assert!(!is_recognized_mb("a", true));
    }

    #[test]
    fn width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("カナ漢字"), 8);
        // variation selector adds nothing
        assert_eq!(display_width("逸\u{fe01}"), 2);
        // combining mark adds nothing
        assert_eq!(display_width("は\u{3099}"), 2);
        assert_eq!(display_width("ｶﾀ"), 2);
    }

    #[test]
    fn block_lookup() {
        assert_eq!(find_block('か').unwrap().name, Some("Hiragana"));
        assert_eq!(
            find_block('雪').unwrap().name,
            Some("CJK Unified Ideographs")
        );
        assert_eq!(
            find_block('\u{fe01}').unwrap().name,
            Some("Variation Selectors")
        );
        assert!(find_block('a').is_none());
        assert!(is_all_mb_symbol("☆★"));
        assert!(is_all_mb_letter("ＡＢ"));
        assert!(is_all_mb_punctuation("。、"));
        assert!(is_all_recognized_mb("ひらがな漢字。"));
        assert!(!is_all_recognized_mb("ひらがな!"));
    }

    #[test]
    fn regex_classes() {
        let re = regex::Regex::new(&format!("^[{}]+$", kana_class())).unwrap();
        assert!(re.is_match("ひらがなカタカナー"));
        assert!(!re.is_match("漢字"));
        let re = regex::Regex::new(&format!("^[{}]$", kanji_class())).unwrap();
        assert!(re.is_match("雪"));
        assert!(!re.is_match("か"));
    }
}

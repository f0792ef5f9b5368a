//! Logical-character segmentation of UTF-8 byte strings.
//!
//! A "logical character" is a code point plus any variation selector that
//! follows it, with combining voiced marks folded into the preceding kana
//! (は + U+3099 yields ば). Input does not have to be valid UTF-8: bytes
//! that don't begin a valid sequence are skipped and counted.

use crate::kana;
use crate::utf8::{self, COMBINING_SEMI_VOICED, COMBINING_VOICED};

/// True for U+FE00..FE0F and U+E0100..E01EF.
pub fn is_variation_selector(c: char) -> bool {
    matches!(c, '\u{fe00}'..='\u{fe0f}' | '\u{e0100}'..='\u{e01ef}')
}

/// True for the combining voiced marks U+3099 and U+309A.
pub fn is_combining_mark(c: char) -> bool {
    c == COMBINING_VOICED || c == COMBINING_SEMI_VOICED
}

/// True if `s` is one code point followed by one variation selector.
pub fn has_variation_selector(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some(second), None)
            if !is_variation_selector(first) && is_variation_selector(second)
    )
}

/// Return `s` without its trailing variation selector, if it has one.
pub fn strip_variation_selector(s: &str) -> &str {
    if has_variation_selector(s) {
        let mut chars = s.chars();
        let first = chars.next().map(char::len_utf8).unwrap_or_default();
        &s[..first]
    } else {
        s
    }
}

/// First logical character of `s` (including any variation selector), or
/// `None` if `s` doesn't start with a multi-byte sequence.
pub fn first_mb(s: &str) -> Option<String> {
    let mut segmenter = Segmenter::new(s.as_bytes());
    segmenter.next().filter(|_| !s.starts_with(|c: char| c.is_ascii()))
}

/// Number of logical characters in `s`. With `only_mb` (the common case)
/// ASCII bytes are not counted.
pub fn mb_len(s: &str, only_mb: bool) -> usize {
    let mut segmenter = Segmenter::with_only_mb(s.as_bytes(), only_mb);
    let mut len = 0;
    while segmenter.next().is_some() {
        len += 1;
    }
    len
}

/// Iterator over the logical characters of a byte string.
#[derive(Clone)]
pub struct Segmenter<'a> {
    data: &'a [u8],
    pos: usize,
    only_mb: bool,
    errors: usize,
    variants: usize,
    combining_marks: usize,
}

impl<'a> Segmenter<'a> {
    /// Segment `data`, skipping ASCII.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_only_mb(data, true)
    }

    /// Segment `data`; with `only_mb` false ASCII bytes are yielded as
    /// one-byte tokens.
    pub fn with_only_mb(data: &'a [u8], only_mb: bool) -> Self {
        Segmenter {
            data,
            pos: 0,
            only_mb,
            errors: 0,
            variants: 0,
            combining_marks: 0,
        }
    }

    /// Bytes that did not begin a valid UTF-8 sequence.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Variation selectors folded into the preceding character.
    pub fn variants(&self) -> usize {
        self.variants
    }

    /// Combining marks folded into the preceding kana.
    pub fn combining_marks(&self) -> usize {
        self.combining_marks
    }

    /// Next logical character without consuming it or touching counters.
    pub fn peek(&self) -> Option<String> {
        self.clone().next()
    }

    /// Decode the next valid multi-byte character, skipping errors (and
    /// ASCII when `only_mb`).
    fn next_scalar(&mut self) -> Option<char> {
        loop {
            let (result, used) = utf8::decode_one(&self.data[self.pos..])?;
            match result {
                Ok(c) if c.is_ascii() => {
                    self.pos += used;
                    if !self.only_mb {
                        return Some(c);
                    }
                }
                Ok(c) => {
                    self.pos += used;
                    return Some(c);
                }
                Err(_) => {
                    self.errors += 1;
                    self.pos += used;
                }
            }
        }
    }

    /// Peek the next multi-byte character without consuming; ASCII and
    /// invalid bytes stop the peek (they never combine with anything).
    fn peek_scalar(&self) -> Option<(char, usize)> {
        match utf8::decode_one(&self.data[self.pos..]) {
            Some((Ok(c), used)) if !c.is_ascii() => Some((c, used)),
            _ => None,
        }
    }
}

impl Iterator for Segmenter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let cur = self.next_scalar()?;
        if cur.is_ascii() {
            return Some(cur.to_string());
        }
        if let Some((next, used)) = self.peek_scalar() {
            if is_variation_selector(next) && !is_variation_selector(cur) {
                self.pos += used;
                self.variants += 1;
                let mut token = cur.to_string();
                token.push(next);
                return Some(token);
            }
            if next == COMBINING_VOICED {
                self.pos += used;
                return Some(self.fold(cur, kana::dakuten(cur)));
            }
            if next == COMBINING_SEMI_VOICED {
                self.pos += used;
                return Some(self.fold(cur, kana::han_dakuten(cur)));
            }
        }
        Some(cur.to_string())
    }
}

impl Segmenter<'_> {
    /// The mark was consumed either way; only a successful fold counts as a
    /// combining mark, a dangling one is an error.
    fn fold(&mut self, base: char, accented: Option<char>) -> String {
        match accented {
            Some(c) => {
                self.combining_marks += 1;
                c.to_string()
            }
            None => {
                self.errors += 1;
                base.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(s: &str) -> Vec<String> {
        Segmenter::new(s.as_bytes()).collect()
    }

    #[test]
    fn segments_one_character_at_a_time() {
        assert_eq!(all("ひらがな"), ["ひ", "ら", "が", "な"]);
        assert_eq!(all("吹雪"), ["吹", "雪"]);
    }

    #[test]
    fn skips_ascii_when_only_mb() {
        assert_eq!(all("aひbらc"), ["ひ", "ら"]);
        let tokens: Vec<_> = Segmenter::with_only_mb("aひ".as_bytes(), false).collect();
        assert_eq!(tokens, ["a", "ひ"]);
    }

    #[test]
    fn absorbs_variation_selectors() {
        let mut s = Segmenter::new("逸\u{fe01}逸".as_bytes());
        assert_eq!(s.next().as_deref(), Some("逸\u{fe01}"));
        assert_eq!(s.next().as_deref(), Some("逸"));
        assert_eq!(s.next(), None);
        assert_eq!(s.variants(), 1);
        assert_eq!(s.errors(), 0);
    }

    #[test]
    fn folds_combining_marks() {
        let mut s = Segmenter::new("は\u{3099}は\u{309a}つ\u{3099}".as_bytes());
        assert_eq!(s.next().as_deref(), Some("ば"));
        assert_eq!(s.next().as_deref(), Some("ぱ"));
        assert_eq!(s.next().as_deref(), Some("づ"));
        assert_eq!(s.next(), None);
        assert_eq!(s.combining_marks(), 3);
        // katakana folds too
        let mut s = Segmenter::new("ウ\u{3099}ワ\u{3099}".as_bytes());
        assert_eq!(s.next().as_deref(), Some("ヴ"));
        assert_eq!(s.next().as_deref(), Some("ヷ"));
    }

    #[test]
    fn dangling_mark_is_an_error() {
        // ん has no voiced form so the mark is dropped and counted
        let mut s = Segmenter::new("ん\u{3099}".as_bytes());
        assert_eq!(s.next().as_deref(), Some("ん"));
        assert_eq!(s.next(), None);
        assert_eq!(s.errors(), 1);
        assert_eq!(s.combining_marks(), 0);
    }

    #[test]
    fn counts_invalid_bytes() {
        let mut bytes = "あ".as_bytes().to_vec();
        bytes.push(0x80);
        bytes.extend_from_slice("い".as_bytes());
        let mut s = Segmenter::new(&bytes);
        assert_eq!(s.next().as_deref(), Some("あ"));
        assert_eq!(s.next().as_deref(), Some("い"));
        assert_eq!(s.next(), None);
        assert_eq!(s.errors(), 1);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut s = Segmenter::new("かな".as_bytes());
        assert_eq!(s.peek().as_deref(), Some("か"));
        assert_eq!(s.next().as_deref(), Some("か"));
        assert_eq!(s.peek().as_deref(), Some("な"));
    }

    #[test]
    fn helpers() {
        assert!(is_variation_selector('\u{fe0f}'));
        assert!(is_variation_selector('\u{e0100}'));
        assert!(!is_variation_selector('あ'));
        assert!(has_variation_selector("逸\u{fe01}"));
        assert!(!has_variation_selector("逸"));
        assert_eq!(strip_variation_selector("逸\u{fe01}"), "逸");
        assert_eq!(strip_variation_selector("逸"), "逸");
        assert_eq!(first_mb("雪s"), Some("雪".to_string()));
        assert_eq!(first_mb("s雪"), None);
        assert_eq!(mb_len("a猫b犬", true), 2);
        assert_eq!(mb_len("a猫b犬", false), 4);
        assert_eq!(mb_len("逸\u{fe01}", true), 1);
    }
}

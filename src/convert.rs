//! Conversion between rōmaji, hiragana and katakana.
//!
//! Rōmaji input is matched longest-first (three letters, then two, then
//! one) so "shi" wins over "s"+"hi" failing; kana input is matched two
//! code points first so digraphs win over their halves. Anything that
//! doesn't match an entry passes through untouched.

#[cfg(test)]
mod tests;

use crate::block::WIDE_SPACE;
use crate::kana::{
    self, dakuten, CharType, ConvertFlags, Kana, ITERATION_HIRAGANA, ITERATION_HIRAGANA_VOICED,
    ITERATION_KATAKANA, ITERATION_KATAKANA_VOICED, PROLONG_MARK,
};
use crate::segment::Segmenter;

/// Convert `src` from one script to another.
pub fn convert(src: &str, from: CharType, to: CharType, flags: ConvertFlags) -> String {
    if from == to {
        return src.to_owned();
    }
    match from {
        CharType::Romaji => from_romaji(src, to, flags),
        _ => from_kana(src, from, to, flags),
    }
}

/// Base vowel of a macron vowel, e.g. ā → a.
fn macron_base(c: char) -> Option<char> {
    Some(match c {
        'ā' => 'a',
        'ī' => 'i',
        'ū' => 'u',
        'ē' => 'e',
        'ō' => 'o',
        _ => return None,
    })
}

/// Macron vowel for a base vowel, e.g. a → ā.
fn macron_for(c: char) -> Option<char> {
    Some(match c {
        'a' => 'ā',
        'i' => 'ī',
        'u' => 'ū',
        'e' => 'ē',
        'o' => 'ō',
        _ => return None,
    })
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// ASCII punctuation written alongside rōmaji and its wide counterpart.
static PUNCTUATION: [(char, char); 8] = [
    ('.', '。'),
    (',', '、'),
    ('!', '！'),
    ('?', '？'),
    ('(', '（'),
    (')', '）'),
    (':', '：'),
    (';', '；'),
];

fn wide_punctuation(c: char) -> Option<char> {
    PUNCTUATION
        .iter()
        .find(|&&(narrow, _)| narrow == c)
        .map(|&(_, wide)| wide)
}

fn narrow_punctuation(c: char) -> Option<char> {
    PUNCTUATION
        .iter()
        .find(|&&(_, wide)| wide == c)
        .map(|&(narrow, _)| narrow)
}

/// Doubled consonants (and "tch") mark a sokuon before the syllable.
fn starts_sokuon(chars: &[char]) -> bool {
    let [c, rest @ ..] = chars else {
        return false;
    };
    if !c.is_ascii_alphabetic() || is_vowel(*c) || *c == 'n' {
        return false;
    }
    match rest {
        [next, ..] if next == c => true,
        [next, next2, ..] => *c == 't' && *next == 'c' && *next2 == 'h',
        _ => false,
    }
}

/// A long vowel after this syllable: ー for katakana, and for hiragana
/// either ー or (with `NO_PROLONG_MARK`) the plain vowel kana repeated.
fn push_prolong(out: &mut String, base: char, to: CharType, flags: ConvertFlags) {
    if to == CharType::Hiragana && flags.has(ConvertFlags::NO_PROLONG_MARK) {
        if let Some(entry) = kana::find(CharType::Romaji, base.encode_utf8(&mut [0; 4])) {
            out.push_str(entry.hiragana());
            return;
        }
    }
    out.push(PROLONG_MARK);
}

fn from_romaji(src: &str, to: CharType, flags: ConvertFlags) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == ' ' {
            if !flags.has(ConvertFlags::REMOVE_SPACES) {
                out.push(WIDE_SPACE);
            }
            i += 1;
            continue;
        }
        // a hyphen is the wāpuro way of typing the prolonged sound mark
        if c == '-' {
            out.push(PROLONG_MARK);
            i += 1;
            continue;
        }
        if let Some(wide) = wide_punctuation(c) {
            out.push(wide);
            i += 1;
            continue;
        }
        if starts_sokuon(&chars[i..]) {
            out.push(if to == CharType::Katakana { 'ッ' } else { 'っ' });
            i += 1;
            continue;
        }
        if let Some((len, macron)) = best_match(&chars[i..], to, flags, &mut out) {
            i += len;
            if let Some(base) = macron {
                push_prolong(&mut out, base, to, flags);
            }
            // an apostrophe after a syllabic n is only a separator
            if chars[i - 1] == 'n' && chars.get(i) == Some(&'\'') {
                i += 1;
            }
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

/// Longest rōmaji match at the head of `chars`; a trailing macron vowel
/// matches as its base vowel and is reported back for prolong handling.
fn best_match(
    chars: &[char],
    to: CharType,
    flags: ConvertFlags,
    out: &mut String,
) -> Option<(usize, Option<char>)> {
    for len in (1..=3usize.min(chars.len())).rev() {
        let mut candidate = String::new();
        let mut macron = None;
        let mut valid = true;
        for (at, &c) in chars[..len].iter().enumerate() {
            match macron_base(c) {
                Some(base) if at + 1 == len => {
                    macron = Some(base);
                    candidate.push(base);
                }
                Some(_) => {
                    valid = false;
                    break;
                }
                None => candidate.push(c),
            }
        }
        if !valid {
            continue;
        }
        if let Some(entry) = kana::find(CharType::Romaji, &candidate) {
            out.push_str(entry.get(to, flags));
            return Some((len, macron));
        }
    }
    None
}

/// The voiced-table entry for `entry`, used by the voiced iteration marks.
fn voiced_of(entry: &Kana) -> Option<&'static Kana> {
    let mut chars = entry.hiragana().chars();
    let voiced = dakuten(chars.next()?)?;
    let mut name = voiced.to_string();
    name.extend(chars);
    kana::find(CharType::Hiragana, &name)
}

/// Replace a trailing vowel of `out` with its macron form, or append ー
/// when there is nothing to lengthen.
fn macronize(out: &mut String) {
    match out.pop() {
        Some(last) => match macron_for(last) {
            Some(m) => out.push(m),
            None => {
                out.push(last);
                out.push(PROLONG_MARK);
            }
        },
        None => out.push(PROLONG_MARK),
    }
}

fn from_kana(src: &str, from: CharType, to: CharType, flags: ConvertFlags) -> String {
    let (sokuon, iteration, iteration_voiced) = match from {
        CharType::Hiragana => ("っ", ITERATION_HIRAGANA, ITERATION_HIRAGANA_VOICED),
        _ => ("ッ", ITERATION_KATAKANA, ITERATION_KATAKANA_VOICED),
    };
    let tokens: Vec<String> = Segmenter::with_only_mb(src.as_bytes(), false).collect();
    let mut out = String::new();
    let mut pending_sokuon = false;
    let mut prev: Option<&'static Kana> = None;
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        i += 1;
        if to == CharType::Romaji && token == sokuon {
            pending_sokuon = true;
            continue;
        }
        if token.chars().eq([PROLONG_MARK]) {
            if to == CharType::Romaji {
                macronize(&mut out);
            } else {
                out.push(PROLONG_MARK);
            }
            continue;
        }
        if token.chars().eq([iteration]) || token.chars().eq([iteration_voiced]) {
            let voiced = token.chars().eq([iteration_voiced]);
            push_iteration(&mut out, token, to, flags, prev, voiced);
            continue;
        }
        if to == CharType::Romaji && token.chars().eq([WIDE_SPACE]) {
            out.push(' ');
            continue;
        }
        if to == CharType::Romaji {
            let mut chars = token.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(narrow) = narrow_punctuation(c) {
                    out.push(narrow);
                    continue;
                }
            }
        }
        let mut entry = None;
        if let Some(next) = tokens.get(i) {
            entry = kana::find(from, &format!("{token}{next}"));
            if entry.is_some() {
                i += 1;
            }
        }
        let entry = entry.or_else(|| kana::find(from, token));
        match entry {
            Some(e) => {
                let text = e.get(to, flags);
                if pending_sokuon && to == CharType::Romaji {
                    push_sokuon_romaji(&mut out, text);
                } else {
                    out.push_str(text);
                }
                pending_sokuon = false;
                prev = Some(e);
            }
            None => {
                out.push_str(token);
                prev = None;
            }
        }
    }
    // a trailing sokuon with nothing to attach to passes through
    if pending_sokuon {
        out.push_str(sokuon);
    }
    out
}

/// Sokuon doubles the first consonant, except before "ch" where Hepburn
/// uses a "t" (まっちゃ → matcha).
fn push_sokuon_romaji(out: &mut String, text: &str) {
    match text.chars().next() {
        Some('c') => out.push('t'),
        Some(first) => out.push(first),
        None => {}
    }
    out.push_str(text);
}

fn push_iteration(
    out: &mut String,
    token: &str,
    to: CharType,
    flags: ConvertFlags,
    prev: Option<&'static Kana>,
    voiced: bool,
) {
    match to {
        CharType::Romaji => match prev {
            Some(p) => {
                let repeated = if voiced { voiced_of(p).unwrap_or(p) } else { p };
                out.push_str(repeated.romaji_for(flags));
            }
            None => out.push_str(token),
        },
        CharType::Hiragana => out.push(if voiced {
            ITERATION_HIRAGANA_VOICED
        } else {
            ITERATION_HIRAGANA
        }),
        CharType::Katakana => out.push(if voiced {
            ITERATION_KATAKANA_VOICED
        } else {
            ITERATION_KATAKANA
        }),
    }
}

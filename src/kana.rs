//! The kana table: rōmaji, hiragana and katakana spellings for every
//! syllable, with the variant spellings and Hepburn/Kunrei overrides the
//! converter needs.

mod table;


use core::fmt;
use core::ops::{BitOr, BitOrAssign};
use std::collections::HashMap;

use once_cell::sync::Lazy;

pub use self::table::TABLE;

/// Script selector used throughout conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Hiragana,
    Katakana,
    Romaji,
}

impl CharType {
    pub const ALL: &'static [CharType] = &[CharType::Hiragana, CharType::Katakana, CharType::Romaji];
}

impl fmt::Display for CharType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CharType::Hiragana => "Hiragana",
            CharType::Katakana => "Katakana",
            CharType::Romaji => "Romaji",
        })
    }
}

/// Flags tweaking conversion output.
///
/// `HEPBURN` and `KUNREI` only affect rōmaji output: they produce more
/// standard spellings but are lossy (ぢ and じ both become "ji" under
/// Hepburn). `NO_PROLONG_MARK` only affects hiragana output ("rāmen"
/// becomes らあめん instead of らーめん). `REMOVE_SPACES` only applies when
/// converting from rōmaji; without it ASCII spaces become wide spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertFlags(u8);

impl ConvertFlags {
    pub const NONE: ConvertFlags = ConvertFlags(0);
    pub const HEPBURN: ConvertFlags = ConvertFlags(1);
    pub const KUNREI: ConvertFlags = ConvertFlags(2);
    pub const NO_PROLONG_MARK: ConvertFlags = ConvertFlags(4);
    pub const REMOVE_SPACES: ConvertFlags = ConvertFlags(8);

    /// True if every flag in `other` is set in `self`.
    pub fn has(self, other: ConvertFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ConvertFlags {
    type Output = ConvertFlags;

    fn bitor(self, rhs: ConvertFlags) -> ConvertFlags {
        ConvertFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ConvertFlags {
    fn bitor_assign(&mut self, rhs: ConvertFlags) {
        self.0 |= rhs.0;
    }
}

/// One entry of the kana table: a syllable with its three spellings.
///
/// `variants` are alternative rōmaji input spellings. When
/// `kunrei_variant` is set the first variant doubles as the Kunrei-shiki
/// output spelling; a handful of entries instead carry explicit `hepburn`
/// or `kunrei` overrides (ぢ, づ and friends).
#[derive(Debug)]
pub struct Kana {
    romaji: &'static str,
    hiragana: &'static str,
    katakana: &'static str,
    variants: &'static [&'static str],
    hepburn: Option<&'static str>,
    kunrei: Option<&'static str>,
    kunrei_variant: bool,
}

impl Kana {
    pub(crate) const fn new(
        romaji: &'static str,
        hiragana: &'static str,
        katakana: &'static str,
    ) -> Self {
        Kana {
            romaji,
            hiragana,
            katakana,
            variants: &[],
            hepburn: None,
            kunrei: None,
            kunrei_variant: false,
        }
    }

    /// Add alternative rōmaji input spellings.
    pub(crate) const fn with_variants(mut self, variants: &'static [&'static str]) -> Self {
        self.variants = variants;
        self
    }

    /// Add variants whose first element is also the Kunrei-shiki spelling.
    pub(crate) const fn with_kunrei_variants(mut self, variants: &'static [&'static str]) -> Self {
        self.variants = variants;
        self.kunrei_variant = true;
        self
    }

    pub(crate) const fn with_hepburn(mut self, hepburn: &'static str) -> Self {
        self.hepburn = Some(hepburn);
        self
    }

    pub(crate) const fn with_kunrei(mut self, kunrei: &'static str) -> Self {
        self.kunrei = Some(kunrei);
        self
    }

    pub fn romaji(&self) -> &'static str {
        self.romaji
    }

    pub fn hiragana(&self) -> &'static str {
        self.hiragana
    }

    pub fn katakana(&self) -> &'static str {
        self.katakana
    }

    pub fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    pub fn hepburn(&self) -> Option<&'static str> {
        self.hepburn
    }

    pub fn kunrei(&self) -> Option<&'static str> {
        if self.kunrei_variant {
            self.variants.first().copied()
        } else {
            self.kunrei
        }
    }

    /// Rōmaji honoring the Hepburn and Kunrei flags: Hepburn wins when both
    /// are set and an override exists, then Kunrei, then the plain
    /// spelling.
    pub fn romaji_for(&self, flags: ConvertFlags) -> &'static str {
        if flags.has(ConvertFlags::HEPBURN) {
            if let Some(hepburn) = self.hepburn {
                return hepburn;
            }
        }
        if flags.has(ConvertFlags::KUNREI) {
            if let Some(kunrei) = self.kunrei() {
                return kunrei;
            }
        }
        self.romaji
    }

    /// The spelling for `target`, honoring `flags` for rōmaji.
    pub fn get(&self, target: CharType, flags: ConvertFlags) -> &'static str {
        match target {
            CharType::Hiragana => self.hiragana,
            CharType::Katakana => self.katakana,
            CharType::Romaji => self.romaji_for(flags),
        }
    }

    /// Small kana (ぁ, ゃ, っ and so on) that only appear as the second
    /// half of a digraph or standalone in loanwords.
    pub fn is_small(&self) -> bool {
        self.hiragana
            .chars()
            .next()
            .is_some_and(|c| SMALL_HIRAGANA.contains(c))
    }

    /// The sokuon っ.
    pub fn is_sokuon(&self) -> bool {
        self.hiragana == "っ"
    }

    /// The syllabic ん.
    pub fn is_n(&self) -> bool {
        self.hiragana == "ん"
    }

    /// Voiced (dakuten) form such as が or ば.
    pub fn is_dakuten(&self) -> bool {
        self.hiragana
            .chars()
            .next()
            .is_some_and(|c| DAKUTEN_PAIRS.iter().any(|&(_, voiced)| voiced == c))
    }

    /// Semi-voiced (handakuten) form such as ぱ.
    pub fn is_han_dakuten(&self) -> bool {
        self.hiragana
            .chars()
            .next()
            .is_some_and(|c| HAN_DAKUTEN_PAIRS.iter().any(|&(_, voiced)| voiced == c))
    }

    /// Number of code points in the kana spellings (1 for monographs, 2
    /// for digraphs).
    pub fn is_digraph(&self) -> bool {
        self.hiragana.chars().count() == 2
    }
}

const SMALL_HIRAGANA: &str = "ぁぃぅぇぉゃゅょっゎゕゖ";

/// Iteration marks: ゝ/ヽ repeat the previous syllable, ゞ/ヾ repeat its
/// voiced form.
pub const ITERATION_HIRAGANA: char = 'ゝ';
pub const ITERATION_HIRAGANA_VOICED: char = 'ゞ';
pub const ITERATION_KATAKANA: char = 'ヽ';
pub const ITERATION_KATAKANA_VOICED: char = 'ヾ';

/// Prolonged sound mark ー.
pub const PROLONG_MARK: char = 'ー';

/// Plain → voiced (dakuten) pairs for both scripts.
#[rustfmt::skip]
static DAKUTEN_PAIRS: [(char, char); 48] = [
    ('か', 'が'), ('き', 'ぎ'), ('く', 'ぐ'), ('け', 'げ'), ('こ', 'ご'),
    ('さ', 'ざ'), ('し', 'じ'), ('す', 'ず'), ('せ', 'ぜ'), ('そ', 'ぞ'),
    ('た', 'だ'), ('ち', 'ぢ'), ('つ', 'づ'), ('て', 'で'), ('と', 'ど'),
    ('は', 'ば'), ('ひ', 'び'), ('ふ', 'ぶ'), ('へ', 'べ'), ('ほ', 'ぼ'),
    ('う', 'ゔ'), ('ゝ', 'ゞ'),
    ('カ', 'ガ'), ('キ', 'ギ'), ('ク', 'グ'), ('ケ', 'ゲ'), ('コ', 'ゴ'),
    ('サ', 'ザ'), ('シ', 'ジ'), ('ス', 'ズ'), ('セ', 'ゼ'), ('ソ', 'ゾ'),
    ('タ', 'ダ'), ('チ', 'ヂ'), ('ツ', 'ヅ'), ('テ', 'デ'), ('ト', 'ド'),
    ('ハ', 'バ'), ('ヒ', 'ビ'), ('フ', 'ブ'), ('ヘ', 'ベ'), ('ホ', 'ボ'),
    ('ウ', 'ヴ'), ('ワ', 'ヷ'), ('ヰ', 'ヸ'), ('ヱ', 'ヹ'), ('ヲ', 'ヺ'),
    ('ヽ', 'ヾ'),
];

#[rustfmt::skip]
static HAN_DAKUTEN_PAIRS: [(char, char); 10] = [
    ('は', 'ぱ'), ('ひ', 'ぴ'), ('ふ', 'ぷ'), ('へ', 'ぺ'), ('ほ', 'ぽ'),
    ('ハ', 'パ'), ('ヒ', 'ピ'), ('フ', 'プ'), ('ヘ', 'ペ'), ('ホ', 'ポ'),
];

/// Voiced form of `c`, e.g. は → ば, ウ → ヴ.
pub fn dakuten(c: char) -> Option<char> {
    DAKUTEN_PAIRS
        .iter()
        .find(|&&(plain, _)| plain == c)
        .map(|&(_, voiced)| voiced)
}

/// Semi-voiced form of `c`, e.g. は → ぱ.
pub fn han_dakuten(c: char) -> Option<char> {
    HAN_DAKUTEN_PAIRS
        .iter()
        .find(|&&(plain, _)| plain == c)
        .map(|&(_, voiced)| voiced)
}

/// Plain form of a voiced kana, e.g. ば → は (either mark).
pub fn without_marks(c: char) -> Option<char> {
    DAKUTEN_PAIRS
        .iter()
        .chain(HAN_DAKUTEN_PAIRS.iter())
        .find(|&&(_, voiced)| voiced == c)
        .map(|&(plain, _)| plain)
}

static ROMAJI_MAP: Lazy<HashMap<&'static str, &'static Kana>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for kana in &TABLE {
        let duplicate = map.insert(kana.romaji, kana);
        debug_assert!(duplicate.is_none(), "duplicate romaji {}", kana.romaji);
        for &variant in kana.variants {
            let duplicate = map.insert(variant, kana);
            debug_assert!(duplicate.is_none(), "duplicate romaji variant {variant}");
        }
    }
    map
});

static HIRAGANA_MAP: Lazy<HashMap<&'static str, &'static Kana>> =
    Lazy::new(|| TABLE.iter().map(|k| (k.hiragana, k)).collect());

static KATAKANA_MAP: Lazy<HashMap<&'static str, &'static Kana>> =
    Lazy::new(|| TABLE.iter().map(|k| (k.katakana, k)).collect());

/// Look up an entry by its spelling in the given script. Rōmaji lookup
/// accepts variant spellings as well.
pub fn find(source: CharType, s: &str) -> Option<&'static Kana> {
    let map = match source {
        CharType::Romaji => &ROMAJI_MAP,
        CharType::Hiragana => &HIRAGANA_MAP,
        CharType::Katakana => &KATAKANA_MAP,
    };
    map.get(s).copied()
}

/// Number of entries in the source map for `source` (variant spellings
/// included for rōmaji).
pub fn map_len(source: CharType) -> usize {
    match source {
        CharType::Romaji => ROMAJI_MAP.len(),
        CharType::Hiragana => HIRAGANA_MAP.len(),
        CharType::Katakana => KATAKANA_MAP.len(),
    }
}

//! The kanji hierarchy: one common core with a tagged kind per source
//! list, linked kinds pointing at their official counterpart through an
//! `Arc`.

mod data;

pub use self::data::KanjiData;

use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

use fixed_map::Key;

use crate::error::Error;
use crate::morohashi::MorohashiId;
use crate::radical::Radical;
use crate::strokes::Strokes;
use crate::symbol::Symbol;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $string:literal,)* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Key)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $($name::$variant => $string,)*
                })
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Error> {
                match s {
                    $($string => Ok($name::$variant),)*
                    _ => Err(Error::lookup(format!(
                        concat!("'{}' is not a valid ", stringify!($name)), s
                    ))),
                }
            }
        }
    };
}

string_enum! {
    /// Which list a kanji was loaded from. The order reflects precedence:
    /// a kanji only ends up in a later type when no earlier file claimed
    /// it.
    KanjiType {
        Jouyou => "Jouyou",
        Jinmei => "Jinmei",
        LinkedJinmei => "LinkedJinmei",
        LinkedOld => "LinkedOld",
        Frequency => "Frequency",
        Extra => "Extra",
        Kentei => "Kentei",
        Ucd => "Ucd",
    }
}

string_enum! {
    /// School grade of a Jouyou kanji; S is secondary school.
    Grade {
        G1 => "G1",
        G2 => "G2",
        G3 => "G3",
        G4 => "G4",
        G5 => "G5",
        G6 => "G6",
        S => "S",
    }
}

impl Grade {
    /// The jouyou file writes grades as "1".."6" or "S".
    pub fn from_column(s: &str) -> Result<Grade, Error> {
        if s.starts_with('S') {
            s.parse()
        } else {
            format!("G{s}").parse()
        }
    }
}

string_enum! {
    /// JLPT level, from N5 (easiest) to N1.
    JlptLevel {
        N5 => "N5",
        N4 => "N4",
        N3 => "N3",
        N2 => "N2",
        N1 => "N1",
    }
}

string_enum! {
    /// Kanji Kentei grade, from 10 kyū (easiest) to 1 kyū, with the two
    /// "pre" grades written KJ2 and KJ1.
    KenteiKyu {
        K10 => "K10",
        K9 => "K9",
        K8 => "K8",
        K7 => "K7",
        K6 => "K6",
        K5 => "K5",
        K4 => "K4",
        K3 => "K3",
        KJ2 => "KJ2",
        K2 => "K2",
        KJ1 => "KJ1",
        K1 => "K1",
    }
}

string_enum! {
    /// Why a kanji was added to the Jinmei (names) list.
    JinmeiReason {
        Names => "Names",
        Print => "Print",
        Variant => "Variant",
        Moved => "Moved",
        Simple => "Simple",
        Other => "Other",
    }
}

/// Fields of a Jouyou kanji (from `jouyou.txt`).
#[derive(Debug)]
pub struct JouyouFields {
    pub number: u16,
    pub grade: Grade,
    pub year: Option<u16>,
    pub level: Option<JlptLevel>,
    pub kyu: Option<KenteiKyu>,
    pub frequency: Option<u16>,
    pub old_names: Vec<String>,
    pub meaning: String,
    pub reading: String,
}

/// Fields of a Jinmei kanji (from `jinmei.txt`); meaning comes from UCD.
#[derive(Debug)]
pub struct JinmeiFields {
    pub number: u16,
    pub reason: JinmeiReason,
    pub year: Option<u16>,
    pub level: Option<JlptLevel>,
    pub kyu: Option<KenteiKyu>,
    pub frequency: Option<u16>,
    pub old_names: Vec<String>,
    pub meaning: String,
    pub reading: String,
}

/// Fields of a linked kanji: meaning, reading and new name all come from
/// the linked official kanji.
#[derive(Debug)]
pub struct LinkedFields {
    pub link: Arc<Kanji>,
    pub frequency: Option<u16>,
    pub kyu: Option<KenteiKyu>,
}

/// Fields of an Extra kanji (from `extra.txt`); links come from UCD.
#[derive(Debug)]
pub struct ExtraFields {
    pub number: u16,
    pub kyu: Option<KenteiKyu>,
    pub meaning: String,
    pub reading: String,
    pub old_names: Vec<String>,
    pub new_name: Option<String>,
}

/// Fields shared by the UCD-derived kinds (Frequency, Kentei, Ucd).
///
/// `link_names` holds UCD link targets: with `has_old_links` they act as
/// old names (traditional forms), otherwise the first is the new name.
#[derive(Debug, Default)]
pub struct StandardFields {
    pub kyu: Option<KenteiKyu>,
    pub frequency: Option<u16>,
    pub meaning: String,
    pub reading: String,
    pub link_names: Vec<String>,
    pub has_old_links: bool,
    pub linked_readings: bool,
}

#[derive(Debug)]
pub enum KanjiKind {
    Jouyou(JouyouFields),
    Jinmei(JinmeiFields),
    LinkedJinmei(LinkedFields),
    LinkedOld(LinkedFields),
    Frequency(StandardFields),
    Extra(ExtraFields),
    Kentei(StandardFields),
    Ucd(StandardFields),
}

/// A kanji with the fields every kind shares; kind-specific fields live in
/// [`KanjiKind`] and are reached through `Option` accessors. Built once by
/// [`KanjiData`] and never mutated.
#[derive(Debug)]
pub struct Kanji {
    name: String,
    /// the form without a variation selector, when `name` carries one
    compat_name: Option<String>,
    radical: Radical,
    strokes: Strokes,
    morohashi: MorohashiId,
    nelson_ids: Vec<u16>,
    pinyin: Symbol,
    kind: KanjiKind,
}

impl Kanji {
    pub(crate) fn new(
        name: String,
        compat_name: Option<String>,
        radical: Radical,
        strokes: Strokes,
        morohashi: MorohashiId,
        nelson_ids: Vec<u16>,
        pinyin: Symbol,
        kind: KanjiKind,
    ) -> Self {
        Kanji {
            name,
            compat_name,
            radical,
            strokes,
            morohashi,
            nelson_ids,
            pinyin,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The non-variant form when the display name has a variation
    /// selector.
    pub fn compat_name(&self) -> Option<&str> {
        self.compat_name.as_deref()
    }

    pub fn radical(&self) -> &Radical {
        &self.radical
    }

    pub fn strokes(&self) -> Strokes {
        self.strokes
    }

    pub fn morohashi(&self) -> MorohashiId {
        self.morohashi
    }

    pub fn nelson_ids(&self) -> &[u16] {
        &self.nelson_ids
    }

    pub fn pinyin(&self) -> &'static str {
        self.pinyin.as_str()
    }

    pub fn kind(&self) -> &KanjiKind {
        &self.kind
    }

    pub fn kanji_type(&self) -> KanjiType {
        match self.kind {
            KanjiKind::Jouyou(_) => KanjiType::Jouyou,
            KanjiKind::Jinmei(_) => KanjiType::Jinmei,
            KanjiKind::LinkedJinmei(_) => KanjiType::LinkedJinmei,
            KanjiKind::LinkedOld(_) => KanjiType::LinkedOld,
            KanjiKind::Frequency(_) => KanjiType::Frequency,
            KanjiKind::Extra(_) => KanjiType::Extra,
            KanjiKind::Kentei(_) => KanjiType::Kentei,
            KanjiKind::Ucd(_) => KanjiType::Ucd,
        }
    }

    /// Meaning, following the link for linked kinds.
    pub fn meaning(&self) -> &str {
        match &self.kind {
            KanjiKind::Jouyou(k) => &k.meaning,
            KanjiKind::Jinmei(k) => &k.meaning,
            KanjiKind::LinkedJinmei(k) | KanjiKind::LinkedOld(k) => k.link.meaning(),
            KanjiKind::Extra(k) => &k.meaning,
            KanjiKind::Frequency(k) | KanjiKind::Kentei(k) | KanjiKind::Ucd(k) => &k.meaning,
        }
    }

    /// Reading, following the link for linked kinds.
    pub fn reading(&self) -> &str {
        match &self.kind {
            KanjiKind::Jouyou(k) => &k.reading,
            KanjiKind::Jinmei(k) => &k.reading,
            KanjiKind::LinkedJinmei(k) | KanjiKind::LinkedOld(k) => k.link.reading(),
            KanjiKind::Extra(k) => &k.reading,
            KanjiKind::Frequency(k) | KanjiKind::Kentei(k) | KanjiKind::Ucd(k) => &k.reading,
        }
    }

    pub fn grade(&self) -> Option<Grade> {
        match &self.kind {
            KanjiKind::Jouyou(k) => Some(k.grade),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<JlptLevel> {
        match &self.kind {
            KanjiKind::Jouyou(k) => k.level,
            KanjiKind::Jinmei(k) => k.level,
            _ => None,
        }
    }

    pub fn kyu(&self) -> Option<KenteiKyu> {
        match &self.kind {
            KanjiKind::Jouyou(k) => k.kyu,
            KanjiKind::Jinmei(k) => k.kyu,
            KanjiKind::LinkedJinmei(k) | KanjiKind::LinkedOld(k) => k.kyu,
            KanjiKind::Extra(k) => k.kyu,
            KanjiKind::Frequency(k) | KanjiKind::Kentei(k) | KanjiKind::Ucd(k) => k.kyu,
        }
    }

    /// Rank in the top-2501 frequency list.
    pub fn frequency(&self) -> Option<u16> {
        match &self.kind {
            KanjiKind::Jouyou(k) => k.frequency,
            KanjiKind::Jinmei(k) => k.frequency,
            KanjiKind::LinkedJinmei(k) | KanjiKind::LinkedOld(k) => k.frequency,
            KanjiKind::Frequency(k) | KanjiKind::Kentei(k) | KanjiKind::Ucd(k) => k.frequency,
            KanjiKind::Extra(_) => None,
        }
    }

    /// Year the kanji was officially added (Jouyou and Jinmei only).
    pub fn year(&self) -> Option<u16> {
        match &self.kind {
            KanjiKind::Jouyou(k) => k.year,
            KanjiKind::Jinmei(k) => k.year,
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<JinmeiReason> {
        match &self.kind {
            KanjiKind::Jinmei(k) => Some(k.reason),
            _ => None,
        }
    }

    /// Older forms of this kanji (from the OldNames column or from UCD
    /// traditional links).
    pub fn old_names(&self) -> &[String] {
        match &self.kind {
            KanjiKind::Jouyou(k) => &k.old_names,
            KanjiKind::Jinmei(k) => &k.old_names,
            KanjiKind::Extra(k) => &k.old_names,
            KanjiKind::Frequency(k) | KanjiKind::Kentei(k) | KanjiKind::Ucd(k) => {
                if k.has_old_links {
                    &k.link_names
                } else {
                    &[]
                }
            }
            _ => &[],
        }
    }

    /// The modern form this kanji is a variant of, when there is one.
    pub fn new_name(&self) -> Option<&str> {
        match &self.kind {
            KanjiKind::LinkedJinmei(k) | KanjiKind::LinkedOld(k) => Some(k.link.name()),
            KanjiKind::Extra(k) => k.new_name.as_deref(),
            KanjiKind::Frequency(k) | KanjiKind::Kentei(k) | KanjiKind::Ucd(k) => {
                if k.has_old_links {
                    None
                } else {
                    k.link_names.first().map(String::as_str)
                }
            }
            _ => None,
        }
    }

    /// The linked official kanji for the Linked kinds.
    pub fn link(&self) -> Option<&Arc<Kanji>> {
        match &self.kind {
            KanjiKind::LinkedJinmei(k) | KanjiKind::LinkedOld(k) => Some(&k.link),
            _ => None,
        }
    }

    /// True when the readings were pulled in via a UCD link rather than
    /// defined for this code point itself.
    pub fn linked_readings(&self) -> bool {
        match &self.kind {
            KanjiKind::LinkedJinmei(_) | KanjiKind::LinkedOld(_) => true,
            KanjiKind::Frequency(k) | KanjiKind::Kentei(k) | KanjiKind::Ucd(k) => {
                k.linked_readings
            }
            _ => false,
        }
    }

    /// Row number in the source file (Jouyou, Jinmei and Extra only).
    pub fn number(&self) -> Option<u16> {
        match &self.kind {
            KanjiKind::Jouyou(k) => Some(k.number),
            KanjiKind::Jinmei(k) => Some(k.number),
            KanjiKind::Extra(k) => Some(k.number),
            _ => None,
        }
    }

    /// Name plus a single-character type marker, handy in dense listings.
    pub fn qualified_name(&self) -> String {
        let marker = match self.kanji_type() {
            KanjiType::Jouyou => '.',
            KanjiType::Jinmei => '^',
            KanjiType::LinkedJinmei => '~',
            KanjiType::LinkedOld => '%',
            KanjiType::Frequency => '"',
            KanjiType::Extra => '+',
            KanjiType::Kentei => '@',
            KanjiType::Ucd => '#',
        };
        format!("{}{marker}", self.name)
    }
}

impl fmt::Display for Kanji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

//! Japanese kanji and kana toolkit.
//!
//! Three things live here: a rōmaji ↔ hiragana ↔ katakana conversion
//! engine built on a full kana table, a kanji knowledge base loaded from
//! tabular reference data (UCD extract, official lists, radicals, groups),
//! and a UTF-8 aware token counter for computing kanji statistics over
//! files and directories.

pub mod error;
pub use self::error::{Error, Result};

pub mod utf8;

pub mod block;

pub mod segment;
pub use self::segment::Segmenter;

pub mod kana;
pub use self::kana::{CharType, ConvertFlags, Kana};

pub mod convert;
pub use self::convert::convert;

pub mod symbol;
pub use self::symbol::Symbol;

pub mod column_file;
pub use self::column_file::{Column, ColumnFile};

pub mod list_file;
pub use self::list_file::ListFile;

pub mod strokes;
pub use self::strokes::Strokes;

pub mod morohashi;
pub use self::morohashi::MorohashiId;

pub mod radical;
pub use self::radical::{Radical, RadicalData};

pub mod ucd;
pub use self::ucd::{Ucd, UcdData};

pub mod kanji;
pub use self::kanji::{
    Grade, JinmeiReason, JlptLevel, Kanji, KanjiData, KanjiType, KenteiKyu,
};

pub mod group;
pub use self::group::{Group, GroupData};

pub mod jukugo;
pub use self::jukugo::{Jukugo, JukugoData};

pub mod count;
pub use self::count::Utf8Count;

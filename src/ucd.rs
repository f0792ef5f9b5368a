//! The Unicode Character Database extract (`ucd.txt`).
//!
//! One row per kanji with the properties this crate cares about: radical,
//! strokes, readings, Morohashi and Nelson ids, which national standards
//! reference it, and links to related code points (traditional forms,
//! compatibility variants and so on).

use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;
use std::path::Path;

use crate::column_file::{Column, ColumnFile};
use crate::convert::convert;
use crate::error::{Error, Result};
use crate::kana::{CharType, ConvertFlags};
use crate::morohashi::MorohashiId;
use crate::segment;
use crate::strokes::Strokes;
use crate::symbol::Symbol;

/// The UCD property a link came from. A single type applies to all links
/// of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UcdLinkType {
    Compatibility,
    Definition,
    Jinmei,
    Semantic,
    Simplified,
    Traditional,
}

impl UcdLinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            UcdLinkType::Compatibility => "Compatibility",
            UcdLinkType::Definition => "Definition",
            UcdLinkType::Jinmei => "Jinmei",
            UcdLinkType::Semantic => "Semantic",
            UcdLinkType::Simplified => "Simplified",
            UcdLinkType::Traditional => "Traditional",
        }
    }
}

impl FromStr for UcdLinkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "Compatibility" => UcdLinkType::Compatibility,
            "Definition" => UcdLinkType::Definition,
            "Jinmei" => UcdLinkType::Jinmei,
            "Semantic" => UcdLinkType::Semantic,
            "Simplified" => UcdLinkType::Simplified,
            "Traditional" => UcdLinkType::Traditional,
            _ => {
                return Err(Error::lookup(format!(
                    "'{s}' is not a recognized link type"
                )))
            }
        })
    }
}

impl fmt::Display for UcdLinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source-script flags: one bit per national standard (G, H, J, K, T, V)
/// plus the Jouyou and Jinmei list flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sources(u8);

impl Sources {
    const LETTERS: [(char, u8); 6] = [
        ('G', 1),
        ('H', 2),
        ('J', 4),
        ('K', 8),
        ('T', 16),
        ('V', 32),
    ];
    const JOYO: u8 = 64;
    const JINMEI: u8 = 128;

    pub fn new(sources: &str, joyo: bool, jinmei: bool) -> Result<Self> {
        let mut bits = 0u8;
        for c in sources.chars() {
            let (_, bit) = Self::LETTERS
                .iter()
                .find(|&&(letter, _)| letter == c)
                .ok_or_else(|| Error::lookup(format!("'{c}' is not a recognized source")))?;
            bits |= bit;
        }
        if joyo {
            bits |= Self::JOYO;
        }
        if jinmei {
            bits |= Self::JINMEI;
        }
        Ok(Sources(bits))
    }

    pub fn has(&self, letter: char) -> bool {
        Self::LETTERS
            .iter()
            .any(|&(l, bit)| l == letter && self.0 & bit != 0)
    }

    /// On the official Jouyou list.
    pub fn joyo(&self) -> bool {
        self.0 & Self::JOYO != 0
    }

    /// On the official Jinmei (names) list.
    pub fn jinmei(&self) -> bool {
        self.0 & Self::JINMEI != 0
    }
}

impl fmt::Display for Sources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, bit) in Self::LETTERS {
            if self.0 & bit != 0 {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// A linked code point with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UcdEntry {
    pub code: char,
    pub name: String,
}

impl UcdEntry {
    /// Unicode in brackets plus the name, e.g. "[FA67] 逸".
    pub fn code_and_name(&self) -> String {
        format!("[{:04X}] {}", self.code as u32, self.name)
    }
}

/// Links of one UCD row: zero or more targets sharing one link type, with
/// a flag saying whether readings were pulled in via the link.
#[derive(Debug, Clone, Default)]
pub struct UcdLinks {
    links: Vec<UcdEntry>,
    link_type: Option<UcdLinkType>,
    linked_readings: bool,
}

impl UcdLinks {
    pub fn links(&self) -> &[UcdEntry] {
        &self.links
    }

    pub fn link_type(&self) -> Option<UcdLinkType> {
        self.link_type
    }

    pub fn linked_readings(&self) -> bool {
        self.linked_readings
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn code_and_names(&self) -> String {
        let mut result = String::new();
        for entry in &self.links {
            if !result.is_empty() {
                result.push_str(", ");
            }
            result.push_str(&entry.code_and_name());
        }
        result
    }
}

/// One row of the UCD extract.
#[derive(Debug)]
pub struct Ucd {
    code: char,
    name: String,
    block: Symbol,
    version: Symbol,
    radical: u16,
    strokes: Strokes,
    pinyin: Symbol,
    morohashi: MorohashiId,
    nelson_ids: Vec<u16>,
    sources: Sources,
    j_source: String,
    links: UcdLinks,
    meaning: String,
    on_reading: String,
    kun_reading: String,
}

impl Ucd {
    pub fn code(&self) -> char {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn block(&self) -> &'static str {
        self.block.as_str()
    }

    pub fn version(&self) -> &'static str {
        self.version.as_str()
    }

    pub fn radical(&self) -> u16 {
        self.radical
    }

    pub fn strokes(&self) -> Strokes {
        self.strokes
    }

    pub fn pinyin(&self) -> &'static str {
        self.pinyin.as_str()
    }

    pub fn morohashi(&self) -> MorohashiId {
        self.morohashi
    }

    pub fn nelson_ids(&self) -> &[u16] {
        &self.nelson_ids
    }

    pub fn sources(&self) -> Sources {
        self.sources
    }

    pub fn j_source(&self) -> &str {
        &self.j_source
    }

    pub fn links(&self) -> &UcdLinks {
        &self.links
    }

    pub fn link_type(&self) -> Option<UcdLinkType> {
        self.links.link_type()
    }

    pub fn linked_readings(&self) -> bool {
        self.links.linked_readings()
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn on_reading(&self) -> &str {
        &self.on_reading
    }

    pub fn kun_reading(&self) -> &str {
        &self.kun_reading
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    pub fn has_traditional_links(&self) -> bool {
        self.has_links() && self.link_type() == Some(UcdLinkType::Traditional)
    }

    pub fn has_non_traditional_links(&self) -> bool {
        self.has_links() && self.link_type() != Some(UcdLinkType::Traditional)
    }

    pub fn code_and_name(&self) -> String {
        format!("[{:04X}] {}", self.code as u32, self.name)
    }
}

/// All UCD rows indexed by name, plus the maps that resolve
/// variation-selector forms to their own entries.
#[derive(Debug, Default)]
pub struct UcdData {
    map: HashMap<String, Ucd>,
    /// standard form → name of its Jinmei variant entry
    linked_jinmei: HashMap<String, String>,
    /// standard form → names of its other variant entries
    linked_other: HashMap<String, Vec<String>>,
}

impl UcdData {
    pub fn load(path: &Path) -> Result<Self> {
        let code_col = Column::new("Code");
        let name_col = Column::new("Name");
        let block_col = Column::new("Block");
        let version_col = Column::new("Version");
        let radical_col = Column::new("Radical");
        let strokes_col = Column::new("Strokes");
        let vstrokes_col = Column::new("VStrokes");
        let pinyin_col = Column::new("Pinyin");
        let morohashi_col = Column::new("Morohashi");
        let nelson_col = Column::new("Nelson");
        let sources_col = Column::new("Sources");
        let j_source_col = Column::new("JSource");
        let joyo_col = Column::new("Joyo");
        let jinmei_col = Column::new("Jinmei");
        let link_codes_col = Column::new("LinkCodes");
        let link_names_col = Column::new("LinkNames");
        let link_type_col = Column::new("LinkType");
        let linked_readings_col = Column::new("LinkedReadings");
        let meaning_col = Column::new("Meaning");
        let on_col = Column::new("On");
        let kun_col = Column::new("Kun");
        let columns = [
            code_col.clone(),
            name_col.clone(),
            block_col.clone(),
            version_col.clone(),
            radical_col.clone(),
            strokes_col.clone(),
            vstrokes_col.clone(),
            pinyin_col.clone(),
            morohashi_col.clone(),
            nelson_col.clone(),
            sources_col.clone(),
            j_source_col.clone(),
            joyo_col.clone(),
            jinmei_col.clone(),
            link_codes_col.clone(),
            link_names_col.clone(),
            link_type_col.clone(),
            linked_readings_col.clone(),
            meaning_col.clone(),
            on_col.clone(),
            kun_col.clone(),
        ];
        let mut file = ColumnFile::new(path, &columns)?;
        let mut data = UcdData::default();
        while file.next_row()? {
            let code = file.get_char32(&code_col)?;
            let name = file.get(&name_col)?.to_owned();
            let radical = file.get_u16(&radical_col)?;
            if radical == 0 || radical > crate::radical::MAX_RADICALS {
                return Err(file.value_error(
                    "radical number out of range",
                    &radical_col,
                    file.get(&radical_col)?,
                ));
            }
            let strokes = {
                let value = file.get_u8(&strokes_col)?;
                match file.get_opt_usize(&vstrokes_col)? {
                    None | Some(0) => Strokes::new(value),
                    Some(variant) => Strokes::with_variant(value, variant as u8),
                }
                .map_err(|e| file.error(&e.to_string()))?
            };
            let morohashi = file
                .get(&morohashi_col)?
                .parse::<MorohashiId>()
                .map_err(|e| file.error(&e.to_string()))?;
            let nelson_ids = parse_nelson(&file, &nelson_col)?;
            let sources = Sources::new(
                file.get(&sources_col)?,
                file.get_bool(&joyo_col)?,
                file.get_bool(&jinmei_col)?,
            )
            .map_err(|e| file.error(&e.to_string()))?;
            let links = parse_links(
                &file,
                &link_codes_col,
                &link_names_col,
                &link_type_col,
                &linked_readings_col,
            )?;
            let ucd = Ucd {
                code,
                name: name.clone(),
                block: Symbol::new(file.get(&block_col)?),
                version: Symbol::new(file.get(&version_col)?),
                radical,
                strokes,
                pinyin: Symbol::new(file.get(&pinyin_col)?),
                morohashi,
                nelson_ids,
                sources,
                j_source: file.get(&j_source_col)?.to_owned(),
                links,
                meaning: file.get(&meaning_col)?.to_owned(),
                on_reading: file.get(&on_col)?.to_owned(),
                kun_reading: file.get(&kun_col)?.to_owned(),
            };
            // variant entries are reachable from their standard form plus
            // a variation selector, so index them under the target name
            if let Some(target) = ucd.links.links().first() {
                if ucd.link_type() == Some(UcdLinkType::Jinmei) && ucd.sources.jinmei() {
                    data.linked_jinmei
                        .insert(target.name.clone(), name.clone());
                } else {
                    data.linked_other
                        .entry(target.name.clone())
                        .or_default()
                        .push(name.clone());
                }
            }
            if data.map.insert(name.clone(), ucd).is_some() {
                return Err(file.error(&format!("duplicate entry '{name}'")));
            }
        }
        Ok(data)
    }

    /// Look up by kanji name. A name carrying a variation selector
    /// resolves through the linked-variant maps, so `逸\u{FE01}` finds the
    /// dedicated compatibility entry U+FA67.
    pub fn find(&self, name: &str) -> Option<&Ucd> {
        if let Some(ucd) = self.map.get(name) {
            return Some(ucd);
        }
        if !segment::has_variation_selector(name) {
            return None;
        }
        let base = segment::strip_variation_selector(name);
        let variant = self
            .linked_jinmei
            .get(base)
            .or_else(|| self.linked_other.get(base).and_then(|v| v.first()))?;
        self.map.get(variant)
    }

    pub fn map(&self) -> &HashMap<String, Ucd> {
        &self.map
    }

    /// Meaning of an optional entry, empty when absent.
    pub fn meaning<'a>(&self, ucd: Option<&'a Ucd>) -> &'a str {
        ucd.map(Ucd::meaning).unwrap_or_default()
    }

    /// The rōmaji on/kun readings as kana: on readings become katakana,
    /// kun readings hiragana, all joined with a wide comma.
    pub fn reading_kana(&self, ucd: Option<&Ucd>) -> String {
        let Some(ucd) = ucd else {
            return String::new();
        };
        let mut parts = Vec::new();
        for token in ucd.on_reading.split_whitespace() {
            parts.push(convert(
                &token.to_lowercase(),
                CharType::Romaji,
                CharType::Katakana,
                ConvertFlags::NONE,
            ));
        }
        for token in ucd.kun_reading.split_whitespace() {
            parts.push(convert(
                &token.to_lowercase(),
                CharType::Romaji,
                CharType::Hiragana,
                ConvertFlags::NONE,
            ));
        }
        parts.join("、")
    }
}

fn parse_nelson(file: &ColumnFile, column: &Column) -> Result<Vec<u16>> {
    let value = file.get(column)?;
    if value.is_empty() {
        return Ok(Vec::new());
    }
    value
        .split(',')
        .map(|id| {
            id.parse()
                .map_err(|_| file.value_error("failed to convert to u16", column, value))
        })
        .collect()
}

fn parse_links(
    file: &ColumnFile,
    codes_col: &Column,
    names_col: &Column,
    type_col: &Column,
    readings_col: &Column,
) -> Result<UcdLinks> {
    let codes = file.get(codes_col)?;
    let names = file.get(names_col)?;
    let linked_readings = file.get_bool(readings_col)?;
    let type_value = file.get(type_col)?;
    if codes.is_empty() {
        if !type_value.is_empty() {
            return Err(file.error("LinkType without LinkCodes"));
        }
        return Ok(UcdLinks {
            links: Vec::new(),
            link_type: None,
            linked_readings,
        });
    }
    let link_type = type_value
        .parse::<UcdLinkType>()
        .map_err(|e| file.value_error(&e.to_string(), type_col, type_value))?;
    let codes: Vec<&str> = codes.split(',').collect();
    let names: Vec<&str> = names.split(',').collect();
    if codes.len() != names.len() {
        return Err(file.error("LinkCodes and LinkNames have different sizes"));
    }
    let mut links = Vec::with_capacity(codes.len());
    for (code, name) in codes.iter().zip(&names) {
        let code = (code.len() == 4 || code.len() == 5)
            .then(|| u32::from_str_radix(code, 16).ok())
            .flatten()
            .and_then(char::from_u32)
            .ok_or_else(|| file.value_error("failed to convert to char32", codes_col, code))?;
        links.push(UcdEntry {
            code,
            name: (*name).to_owned(),
        });
    }
    Ok(UcdLinks {
        links,
        link_type: Some(link_type),
        linked_readings,
    })
}

//! Loading and indexing of the whole kanji knowledge base.
//!
//! Load order matters and is enforced here: JLPT/Kentei/frequency lists
//! come first (kanji constructors look entries up in them), then radicals,
//! then UCD, then the custom files in precedence order, and finally the
//! UCD fallback for everything not claimed by any file.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use fixed_map::Map;
use tracing::debug;

use super::{
    ExtraFields, Grade, JinmeiFields, JinmeiReason, JlptLevel, JouyouFields, Kanji, KanjiKind,
    KanjiType, KenteiKyu, LinkedFields, StandardFields,
};
use crate::column_file::{Column, ColumnFile};
use crate::error::{Context, Error, Result};
use crate::list_file::{self, FileType, KyuListFile, LevelListFile, ListFile, UniqueNames};
use crate::radical::{Radical, RadicalData};
use crate::segment;
use crate::strokes::Strokes;
use crate::symbol::Symbol;
use crate::ucd::{Ucd, UcdData};

/// The frequency list covers the top 2501 kanji.
pub const MAX_FREQUENCY: u16 = 2501;

const LEVEL_FILES: [(JlptLevel, &str); 5] = [
    (JlptLevel::N5, "n5"),
    (JlptLevel::N4, "n4"),
    (JlptLevel::N3, "n3"),
    (JlptLevel::N2, "n2"),
    (JlptLevel::N1, "n1"),
];

const KYU_FILES: [(KenteiKyu, &str); 12] = [
    (KenteiKyu::K10, "k10"),
    (KenteiKyu::K9, "k9"),
    (KenteiKyu::K8, "k8"),
    (KenteiKyu::K7, "k7"),
    (KenteiKyu::K6, "k6"),
    (KenteiKyu::K5, "k5"),
    (KenteiKyu::K4, "k4"),
    (KenteiKyu::K3, "k3"),
    (KenteiKyu::KJ2, "kj2"),
    (KenteiKyu::K2, "k2"),
    (KenteiKyu::KJ1, "kj1"),
    (KenteiKyu::K1, "k1"),
];

/// The loaded kanji knowledge base: every kanji by name plus the indexes
/// by type, grade, JLPT level, Kentei kyū and frequency rank.
#[derive(Debug)]
pub struct KanjiData {
    radicals: RadicalData,
    ucd: UcdData,
    levels: Vec<LevelListFile>,
    kyus: Vec<KyuListFile>,
    frequency: ListFile,
    name_map: HashMap<String, Arc<Kanji>>,
    compat_map: HashMap<String, Arc<Kanji>>,
    types: Map<KanjiType, Vec<Arc<Kanji>>>,
    grades: Map<Grade, Vec<Arc<Kanji>>>,
    level_index: Map<JlptLevel, Vec<Arc<Kanji>>>,
    kyu_index: Map<KenteiKyu, Vec<Arc<Kanji>>>,
    frequency_index: Vec<Arc<Kanji>>,
}

impl KanjiData {
    /// Load everything from a data directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut level_names = UniqueNames::default();
        let mut levels = Vec::with_capacity(LEVEL_FILES.len());
        let jlpt_dir = dir.join("jlpt");
        for (level, name) in LEVEL_FILES {
            let path = list_file::get_file(&jlpt_dir, name)?;
            levels.push(LevelListFile::new(&path, level, &mut level_names)?);
        }
        let mut kyu_names = UniqueNames::default();
        let mut kyus = Vec::with_capacity(KYU_FILES.len());
        let kentei_dir = dir.join("kentei");
        for (kyu, name) in KYU_FILES {
            let path = list_file::get_file(&kentei_dir, name)?;
            kyus.push(KyuListFile::new(&path, kyu, &mut kyu_names)?);
        }
        let mut frequency_names = UniqueNames::default();
        let frequency_path = list_file::get_file(dir, "frequency")?;
        let frequency = ListFile::with_global_names(
            &frequency_path,
            FileType::OnePerLine,
            &mut frequency_names,
        )?;
        if frequency.len() > usize::from(MAX_FREQUENCY) {
            return Err(Error::range(
                format!("frequency list exceeds {MAX_FREQUENCY} entries"),
                Context::file(&frequency_path),
            ));
        }
        let radicals = RadicalData::load(&list_file::get_file(dir, "radicals")?)?;
        let ucd = UcdData::load(&list_file::get_file(dir, "ucd")?)?;
        let mut data = KanjiData {
            radicals,
            ucd,
            levels,
            kyus,
            frequency,
            name_map: HashMap::new(),
            compat_map: HashMap::new(),
            types: Map::new(),
            grades: Map::new(),
            level_index: Map::new(),
            kyu_index: Map::new(),
            frequency_index: Vec::new(),
        };
        data.load_jouyou(&list_file::get_file(dir, "jouyou")?)?;
        data.load_jinmei(&list_file::get_file(dir, "jinmei")?)?;
        data.load_linked_jinmei(&list_file::get_file(dir, "linked-jinmei")?)?;
        data.link_old_kanji()?;
        data.load_extra(&list_file::get_file(dir, "extra")?)?;
        data.load_frequency_kanji(dir)?;
        data.load_kentei_kanji()?;
        data.load_ucd_kanji()?;
        data.build_frequency_index();
        debug!(total = data.name_map.len(), "loaded kanji data");
        // per-type uniqueness sets drop here; lookups from now on are
        // read-only
        Ok(data)
    }

    /// JLPT level of `name` according to the level list files.
    pub fn level(&self, name: &str) -> Option<JlptLevel> {
        self.levels
            .iter()
            .find(|l| l.file().exists(name))
            .map(LevelListFile::level)
    }

    /// Kentei kyū of `name` according to the kyū list files.
    pub fn kyu(&self, name: &str) -> Option<KenteiKyu> {
        self.kyus
            .iter()
            .find(|k| k.file().exists(name))
            .map(KyuListFile::kyu)
    }

    /// Frequency rank of `name` (1 is the most common kanji).
    pub fn frequency(&self, name: &str) -> Option<u16> {
        self.frequency.index(name)
    }

    /// Find by name, falling back to the compatibility (variation
    /// selector stripped) form.
    pub fn find(&self, name: &str) -> Option<&Arc<Kanji>> {
        self.name_map
            .get(name)
            .or_else(|| self.compat_map.get(name))
    }

    pub fn find_by_frequency(&self, rank: u16) -> Option<&Arc<Kanji>> {
        (rank != 0)
            .then(|| self.frequency_index.get(usize::from(rank) - 1))
            .flatten()
    }

    pub fn list(&self, kanji_type: KanjiType) -> &[Arc<Kanji>] {
        self.types.get(kanji_type).map_or(&[], Vec::as_slice)
    }

    pub fn grade_list(&self, grade: Grade) -> &[Arc<Kanji>] {
        self.grades.get(grade).map_or(&[], Vec::as_slice)
    }

    pub fn level_list(&self, level: JlptLevel) -> &[Arc<Kanji>] {
        self.level_index.get(level).map_or(&[], Vec::as_slice)
    }

    pub fn kyu_list(&self, kyu: KenteiKyu) -> &[Arc<Kanji>] {
        self.kyu_index.get(kyu).map_or(&[], Vec::as_slice)
    }

    /// All kanji with a frequency rank, ordered by rank.
    pub fn frequency_list(&self) -> &[Arc<Kanji>] {
        &self.frequency_index
    }

    pub fn name_map(&self) -> &HashMap<String, Arc<Kanji>> {
        &self.name_map
    }

    pub fn radicals(&self) -> &RadicalData {
        &self.radicals
    }

    pub fn ucd_data(&self) -> &UcdData {
        &self.ucd
    }

    pub fn len(&self) -> usize {
        self.name_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_map.is_empty()
    }

    fn load_jouyou(&mut self, path: &Path) -> Result<()> {
        let number_col = Column::new("Number");
        let name_col = Column::new("Name");
        let radical_col = Column::new("Radical");
        let old_names_col = Column::new("OldNames");
        let year_col = Column::new("Year");
        let strokes_col = Column::new("Strokes");
        let grade_col = Column::new("Grade");
        let meaning_col = Column::new("Meaning");
        let reading_col = Column::new("Reading");
        let columns = [
            number_col.clone(),
            name_col.clone(),
            radical_col.clone(),
            old_names_col.clone(),
            year_col.clone(),
            strokes_col.clone(),
            grade_col.clone(),
            meaning_col.clone(),
            reading_col.clone(),
        ];
        let mut file = ColumnFile::new(path, &columns)?;
        while file.next_row()? {
            let name = file.get(&name_col)?.to_owned();
            let radical = self.radical_for(&file, &radical_col)?;
            let strokes = Strokes::new(file.get_u8(&strokes_col)?)
                .map_err(|e| file.error(&e.to_string()))?;
            let grade_value = file.get(&grade_col)?.to_owned();
            let grade = Grade::from_column(&grade_value)
                .map_err(|_| file.value_error("failed to convert to Grade", &grade_col, &grade_value))?;
            let fields = JouyouFields {
                number: file.get_u16(&number_col)?,
                grade,
                year: file.get_opt_u16(&year_col)?,
                level: self.level(&name),
                kyu: self.kyu(&name),
                frequency: self.frequency(&name),
                old_names: split_list(file.get(&old_names_col)?, ','),
                meaning: file.get(&meaning_col)?.to_owned(),
                reading: file.get(&reading_col)?.to_owned(),
            };
            let kanji = self.make_kanji(name, radical, strokes, KanjiKind::Jouyou(fields));
            self.insert(kanji)?;
        }
        debug!(count = self.list(KanjiType::Jouyou).len(), "loaded jouyou");
        Ok(())
    }

    fn load_jinmei(&mut self, path: &Path) -> Result<()> {
        let number_col = Column::new("Number");
        let name_col = Column::new("Name");
        let radical_col = Column::new("Radical");
        let old_names_col = Column::new("OldNames");
        let year_col = Column::new("Year");
        let reason_col = Column::new("Reason");
        let reading_col = Column::new("Reading");
        let columns = [
            number_col.clone(),
            name_col.clone(),
            radical_col.clone(),
            old_names_col.clone(),
            year_col.clone(),
            reason_col.clone(),
            reading_col.clone(),
        ];
        let mut file = ColumnFile::new(path, &columns)?;
        while file.next_row()? {
            let name = file.get(&name_col)?.to_owned();
            let radical = self.radical_for(&file, &radical_col)?;
            let strokes = self
                .ucd_strokes(&name)
                .map_err(|e| file.error(&e.to_string()))?;
            let reason_value = file.get(&reason_col)?.to_owned();
            let reason: JinmeiReason = reason_value.parse().map_err(|_| {
                file.value_error("failed to convert to JinmeiReason", &reason_col, &reason_value)
            })?;
            let fields = JinmeiFields {
                number: file.get_u16(&number_col)?,
                reason,
                year: file.get_opt_u16(&year_col)?,
                level: self.level(&name),
                kyu: self.kyu(&name),
                frequency: self.frequency(&name),
                old_names: split_list(file.get(&old_names_col)?, ','),
                meaning: self.ucd.meaning(self.ucd.find(&name)).to_owned(),
                reading: file.get(&reading_col)?.to_owned(),
            };
            let kanji = self.make_kanji(name, radical, strokes, KanjiKind::Jinmei(fields));
            self.insert(kanji)?;
        }
        debug!(count = self.list(KanjiType::Jinmei).len(), "loaded jinmei");
        Ok(())
    }

    /// Each line is an official kanji followed by one or more variant
    /// forms that the Jinmei list allows.
    fn load_linked_jinmei(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("can't open '{}'", path.display()), e))?;
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| Error::io("failed reading line", e))?;
            let context = || Context::line(path, number + 1);
            let mut tokens = line.split_whitespace();
            let Some(target) = tokens.next() else {
                continue;
            };
            let link = self.checked_link(target, true).map_err(|e| match e {
                Error::Domain { msg, .. } => Error::domain(msg, context()),
                other => other,
            })?;
            let mut linked = 0;
            for name in tokens {
                let kanji = self.make_linked(name, &link, KanjiKind::LinkedJinmei)?;
                self.insert(kanji)?;
                linked += 1;
            }
            if linked == 0 {
                return Err(Error::format("missing linked names", context()));
            }
        }
        Ok(())
    }

    /// Old names of Jouyou kanji that aren't already linked-Jinmei become
    /// LinkedOld kanji.
    fn link_old_kanji(&mut self) -> Result<()> {
        let jouyou: Vec<Arc<Kanji>> = self.list(KanjiType::Jouyou).to_vec();
        for kanji in jouyou {
            for old in kanji.old_names().to_vec() {
                if self.name_map.contains_key(&old) {
                    continue;
                }
                let linked = self.make_linked(&old, &kanji, KanjiKind::LinkedOld)?;
                self.insert(linked)?;
            }
        }
        Ok(())
    }

    fn load_extra(&mut self, path: &Path) -> Result<()> {
        let number_col = Column::new("Number");
        let name_col = Column::new("Name");
        let radical_col = Column::new("Radical");
        let strokes_col = Column::new("Strokes");
        let meaning_col = Column::new("Meaning");
        let reading_col = Column::new("Reading");
        let columns = [
            number_col.clone(),
            name_col.clone(),
            radical_col.clone(),
            strokes_col.clone(),
            meaning_col.clone(),
            reading_col.clone(),
        ];
        let mut file = ColumnFile::new(path, &columns)?;
        while file.next_row()? {
            let name = file.get(&name_col)?.to_owned();
            let radical = self.radical_for(&file, &radical_col)?;
            let strokes = Strokes::new(file.get_u8(&strokes_col)?)
                .map_err(|e| file.error(&e.to_string()))?;
            let (old_names, new_name) = match self.ucd.find(&name) {
                Some(u) if u.has_traditional_links() => (
                    u.links().links().iter().map(|l| l.name.clone()).collect(),
                    None,
                ),
                Some(u) if u.has_non_traditional_links() => {
                    (Vec::new(), u.links().links().first().map(|l| l.name.clone()))
                }
                _ => (Vec::new(), None),
            };
            let fields = ExtraFields {
                number: file.get_u16(&number_col)?,
                kyu: self.kyu(&name),
                meaning: file.get(&meaning_col)?.to_owned(),
                reading: file.get(&reading_col)?.to_owned(),
                old_names,
                new_name,
            };
            let kanji = self.make_kanji(name, radical, strokes, KanjiKind::Extra(fields));
            self.insert(kanji)?;
        }
        Ok(())
    }

    /// Frequency-list entries not claimed by any official file become
    /// Frequency kanji; readings come from the optional overrides file or
    /// else from UCD.
    fn load_frequency_kanji(&mut self, dir: &Path) -> Result<()> {
        let mut overrides = HashMap::new();
        let readings_path = dir.join("frequency-readings.txt");
        if readings_path.is_file() {
            let name_col = Column::new("Name");
            let reading_col = Column::new("Reading");
            let columns = [name_col.clone(), reading_col.clone()];
            let mut file = ColumnFile::new(&readings_path, &columns)?;
            while file.next_row()? {
                overrides.insert(
                    file.get(&name_col)?.to_owned(),
                    file.get(&reading_col)?.to_owned(),
                );
            }
        }
        for name in self.frequency.list().to_vec() {
            if self.name_map.contains_key(&name) {
                continue;
            }
            let reading = overrides.get(&name).cloned();
            let kanji = self.make_standard(
                &name,
                reading,
                self.frequency(&name),
                self.kyu(&name),
                KanjiKind::Frequency,
            )?;
            self.insert(kanji)?;
        }
        Ok(())
    }

    /// Kyū-list entries not claimed by anything above become Kentei
    /// kanji.
    fn load_kentei_kanji(&mut self) -> Result<()> {
        let lists: Vec<(KenteiKyu, Vec<String>)> = self
            .kyus
            .iter()
            .map(|k| (k.kyu(), k.file().list().to_vec()))
            .collect();
        for (kyu, names) in lists {
            for name in names {
                if self.name_map.contains_key(&name) {
                    continue;
                }
                let kanji =
                    self.make_standard(&name, None, None, Some(kyu), KanjiKind::Kentei)?;
                self.insert(kanji)?;
            }
        }
        Ok(())
    }

    /// Everything left in UCD becomes a Ucd kanji.
    fn load_ucd_kanji(&mut self) -> Result<()> {
        let mut names: Vec<String> = self
            .ucd
            .map()
            .keys()
            .filter(|name| !self.name_map.contains_key(*name))
            .cloned()
            .collect();
        names.sort();
        for name in names {
            let kanji = self.make_standard(&name, None, None, None, KanjiKind::Ucd)?;
            self.insert(kanji)?;
        }
        Ok(())
    }

    fn build_frequency_index(&mut self) {
        let mut list: Vec<Arc<Kanji>> = self
            .name_map
            .values()
            .filter(|k| k.frequency().is_some())
            .cloned()
            .collect();
        list.sort_by(|a, b| {
            a.frequency()
                .cmp(&b.frequency())
                .then_with(|| a.name().cmp(b.name()))
        });
        self.frequency_index = list;
    }

    /// Resolve a radical column value, turning unknown radicals into an
    /// error naming the row and column.
    fn radical_for(&self, file: &ColumnFile, column: &Column) -> Result<Radical> {
        let value = file.get(column)?;
        self.radicals
            .find_by_name(value)
            .map(Radical::clone)
            .map_err(|_| file.value_error("non-existing radical", column, value))
    }

    fn ucd_radical(&self, name: &str) -> Result<Radical> {
        let ucd = self.require_ucd(name)?;
        Ok(self.radicals.find_by_number(ucd.radical())?.clone())
    }

    fn ucd_strokes(&self, name: &str) -> Result<Strokes> {
        Ok(self.require_ucd(name)?.strokes())
    }

    fn require_ucd(&self, name: &str) -> Result<&Ucd> {
        self.ucd
            .find(name)
            .ok_or_else(|| Error::domain(format!("no UCD entry for '{name}'"), Context::default()))
    }

    /// Common-core construction: compatibility name plus the UCD-derived
    /// identifiers every kind carries.
    fn make_kanji(&self, name: String, radical: Radical, strokes: Strokes, kind: KanjiKind) -> Kanji {
        let ucd = self.ucd.find(&name);
        let compat_name = segment::has_variation_selector(&name)
            .then(|| segment::strip_variation_selector(&name).to_owned());
        Kanji::new(
            name,
            compat_name,
            radical,
            strokes,
            ucd.map(Ucd::morohashi).unwrap_or_default(),
            ucd.map(|u| u.nelson_ids().to_vec()).unwrap_or_default(),
            ucd.map(|u| Symbol::new(u.pinyin())).unwrap_or(Symbol::EMPTY),
            kind,
        )
    }

    fn make_linked(
        &self,
        name: &str,
        link: &Arc<Kanji>,
        kind: fn(LinkedFields) -> KanjiKind,
    ) -> Result<Kanji> {
        let fields = LinkedFields {
            link: link.clone(),
            frequency: self.frequency(name),
            kyu: self.kyu(name),
        };
        let radical = self.ucd_radical(name)?;
        let strokes = self.ucd_strokes(name)?;
        Ok(self.make_kanji(name.to_owned(), radical, strokes, kind(fields)))
    }

    fn make_standard(
        &self,
        name: &str,
        reading: Option<String>,
        frequency: Option<u16>,
        kyu: Option<KenteiKyu>,
        kind: fn(StandardFields) -> KanjiKind,
    ) -> Result<Kanji> {
        let ucd = self.ucd.find(name);
        let fields = StandardFields {
            kyu,
            frequency,
            meaning: self.ucd.meaning(ucd).to_owned(),
            reading: reading.unwrap_or_else(|| self.ucd.reading_kana(ucd)),
            link_names: ucd
                .map(|u| u.links().links().iter().map(|l| l.name.clone()).collect())
                .unwrap_or_default(),
            has_old_links: ucd.is_some_and(Ucd::has_traditional_links),
            linked_readings: ucd.is_some_and(Ucd::linked_readings),
        };
        let radical = self.ucd_radical(name)?;
        let strokes = self.ucd_strokes(name)?;
        Ok(self.make_kanji(name.to_owned(), radical, strokes, kind(fields)))
    }

    /// Look up a link target and check its type: linked-Jinmei may link
    /// to Jouyou or Jinmei, linked-Old only to Jouyou.
    fn checked_link(&self, name: &str, allow_jinmei: bool) -> Result<Arc<Kanji>> {
        let link = self
            .name_map
            .get(name)
            .ok_or_else(|| {
                Error::domain(format!("link target '{name}' not found"), Context::default())
            })?
            .clone();
        let ok = match link.kanji_type() {
            KanjiType::Jouyou => true,
            KanjiType::Jinmei => allow_jinmei,
            _ => false,
        };
        if !ok {
            return Err(Error::domain(
                format!(
                    "linked kanji wanted type 'Jouyou'{} for link {name}, but got '{}'",
                    if allow_jinmei { " or 'Jinmei'" } else { "" },
                    link.kanji_type()
                ),
                Context::default(),
            ));
        }
        Ok(link)
    }

    fn insert(&mut self, kanji: Kanji) -> Result<Arc<Kanji>> {
        let kanji = Arc::new(kanji);
        if self.name_map.contains_key(kanji.name()) {
            return Err(Error::domain(
                format!("duplicate kanji '{}'", kanji.name()),
                Context::default(),
            ));
        }
        self.name_map
            .insert(kanji.name().to_owned(), kanji.clone());
        if let Some(compat) = kanji.compat_name() {
            self.compat_map.insert(compat.to_owned(), kanji.clone());
        }
        push_to(&mut self.types, kanji.kanji_type(), &kanji);
        if let Some(grade) = kanji.grade() {
            push_to(&mut self.grades, grade, &kanji);
        }
        if let Some(level) = kanji.level() {
            push_to(&mut self.level_index, level, &kanji);
        }
        if let Some(kyu) = kanji.kyu() {
            push_to(&mut self.kyu_index, kyu, &kanji);
        }
        Ok(kanji)
    }
}

fn push_to<K>(map: &mut Map<K, Vec<Arc<Kanji>>>, key: K, kanji: &Arc<Kanji>)
where
    K: fixed_map::Key,
{
    if let Some(list) = map.get_mut(key) {
        list.push(kanji.clone());
    } else {
        map.insert(key, vec![kanji.clone()]);
    }
}

/// Split a separated column value, dropping empties.
fn split_list(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

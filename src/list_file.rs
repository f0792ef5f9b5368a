//! Lists of unique kanji tokens, one per line or space-separated.
//!
//! Entries keep their load order and are indexed from one, so the
//! frequency list's index doubles as the frequency rank. Cross-file
//! uniqueness is enforced through a caller-owned [`UniqueNames`] set
//! instead of global state; the aggregator drops the sets once loading is
//! done.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Context, Error, Result};
use crate::kanji::{JlptLevel, KenteiKyu};
use crate::utf8;

/// Entries are indexed by `u16` starting at 1, which caps a list at
/// 65,534 entries.
pub const MAX_ENTRIES: u16 = u16::MAX - 1;

pub const TEXT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    OnePerLine,
    MultiplePerLine,
}

/// Cross-file uniqueness set shared by all lists of one kind.
#[derive(Debug, Default)]
pub struct UniqueNames(HashSet<String>);

/// How a list participates in cross-file uniqueness checking.
enum Dedup<'a> {
    /// No cross-file checking (in-file duplicates are still errors).
    None,
    /// Duplicates are an immediate error (the untyped frequency list).
    Global(&'a mut UniqueNames),
    /// Duplicates collect and raise one error at end of load, since a
    /// typed set spans many files and listing every clash at once is more
    /// useful.
    Typed(&'a mut UniqueNames),
}

/// Check that `file` exists in `dir` (trying a `.txt` extension when there
/// is none) and return the full path.
pub fn get_file(dir: &Path, file: &str) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(Error::lookup(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }
    let mut path = dir.join(file);
    if !path.is_file() && path.extension().is_none() {
        path.set_extension(TEXT_EXTENSION);
    }
    if !path.is_file() {
        return Err(Error::lookup(format!(
            "'{}' must contain '{file}'",
            dir.display()
        )));
    }
    Ok(path)
}

#[derive(Debug, Default)]
pub struct ListFile {
    name: String,
    list: Vec<String>,
    map: HashMap<String, u16>,
}

impl ListFile {
    /// Load a one-per-line list with no cross-file uniqueness checking.
    pub fn new(path: &Path) -> Result<Self> {
        Self::load(path, FileType::OnePerLine, Dedup::None)
    }

    pub fn with_type(path: &Path, file_type: FileType) -> Result<Self> {
        Self::load(path, file_type, Dedup::None)
    }

    /// Load a list whose entries must also be unique in `names`
    /// (duplicates error immediately).
    pub fn with_global_names(
        path: &Path,
        file_type: FileType,
        names: &mut UniqueNames,
    ) -> Result<Self> {
        Self::load(path, file_type, Dedup::Global(names))
    }

    fn load(path: &Path, file_type: FileType, mut dedup: Dedup<'_>) -> Result<Self> {
        let file =
            File::open(path).map_err(|e| Error::io(format!("can't open '{}'", path.display()), e))?;
        let name = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut result = ListFile {
            name,
            list: Vec::new(),
            map: HashMap::new(),
        };
        let mut duplicates = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line_number = number + 1;
            let line = line.map_err(|e| Error::io("failed reading line", e))?;
            let mut tokens = line.split(' ').filter(|t| !t.is_empty());
            let context = || Context::line(path, line_number);
            while let Some(token) = tokens.next() {
                if file_type == FileType::OnePerLine && tokens.next().is_some() {
                    return Err(Error::format("got multiple tokens", context()));
                }
                if !utf8::is_valid_mb(token, true) {
                    return Err(Error::format(
                        format!("invalid multi-byte token '{token}'"),
                        context(),
                    ));
                }
                if result.map.contains_key(token) {
                    return Err(Error::domain(
                        format!("got duplicate token '{token}'"),
                        context(),
                    ));
                }
                match &mut dedup {
                    Dedup::None => {}
                    Dedup::Global(names) => {
                        if !names.0.insert(token.to_owned()) {
                            return Err(Error::domain(
                                format!("found globally non-unique entry '{token}'"),
                                context(),
                            ));
                        }
                    }
                    Dedup::Typed(names) => {
                        if !names.0.insert(token.to_owned()) {
                            duplicates.push(token.to_owned());
                            continue;
                        }
                    }
                }
                if !result.add_entry(token) {
                    return Err(Error::range(
                        format!("exceeded '{MAX_ENTRIES}' entries"),
                        Context::file(path),
                    ));
                }
            }
        }
        if !duplicates.is_empty() {
            return Err(Error::domain(
                format!(
                    "found {} duplicates in {}: {}",
                    duplicates.len(),
                    result.name,
                    duplicates.join(" ")
                ),
                Context::file(path),
            ));
        }
        Ok(result)
    }

    fn add_entry(&mut self, token: &str) -> bool {
        if self.list.len() == usize::from(MAX_ENTRIES) {
            return false;
        }
        self.list.push(token.to_owned());
        self.map.insert(token.to_owned(), self.list.len() as u16);
        true
    }

    /// 1-based position of `name`, or `None` when absent. For the
    /// frequency list this is the frequency rank.
    pub fn index(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn list(&self) -> &[String] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// All entries joined into one string, with no separators.
    pub fn to_joined_string(&self) -> String {
        self.list.concat()
    }
}

/// A space-separated list of kanji for one JLPT level.
#[derive(Debug)]
pub struct LevelListFile {
    file: ListFile,
    level: JlptLevel,
}

impl LevelListFile {
    /// `names` is shared by all level files so a kanji can only be in one
    /// level.
    pub fn new(path: &Path, level: JlptLevel, names: &mut UniqueNames) -> Result<Self> {
        let file = ListFile::load(path, FileType::MultiplePerLine, Dedup::Typed(names))?;
        Ok(LevelListFile { file, level })
    }

    pub fn level(&self) -> JlptLevel {
        self.level
    }

    pub fn file(&self) -> &ListFile {
        &self.file
    }
}

/// A space-separated list of kanji for one Kentei kyū.
#[derive(Debug)]
pub struct KyuListFile {
    file: ListFile,
    kyu: KenteiKyu,
}

impl KyuListFile {
    /// `names` is shared by all kyū files so a kanji can only be in one
    /// kyū.
    pub fn new(path: &Path, kyu: KenteiKyu, names: &mut UniqueNames) -> Result<Self> {
        let file = ListFile::load(path, FileType::MultiplePerLine, Dedup::Typed(names))?;
        Ok(KyuListFile { file, kyu })
    }

    pub fn kyu(&self) -> KenteiKyu {
        self.kyu
    }

    pub fn file(&self) -> &ListFile {
        &self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "frequency.txt", "日\n一\n国\n");
        let file = ListFile::new(&path).unwrap();
        assert_eq!(file.len(), 3);
        assert_eq!(file.index("日"), Some(1));
        assert_eq!(file.index("国"), Some(3));
        assert_eq!(file.index("人"), None);
        assert!(file.exists("一"));
        assert_eq!(file.name(), "frequency");
        assert_eq!(file.to_joined_string(), "日一国");
    }

    #[test]
    fn one_per_line_rejects_multiple_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "l.txt", "日 一\n");
        let err = ListFile::new(&path).unwrap_err().to_string();
        assert!(err.contains("got multiple tokens"), "{err}");
        assert!(err.contains("row: 1"), "{err}");
    }

    #[test]
    fn multiple_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "l.txt", "日 一\n国\n");
        let file = ListFile::with_type(&path, FileType::MultiplePerLine).unwrap();
        assert_eq!(file.list(), ["日", "一", "国"]);
    }

    #[test]
    fn rejects_non_mb_tokens() {
        let dir = tempfile::tempdir().unwrap();
        for bad in ["a", "日本"] {
            let path = write_file(dir.path(), "l.txt", &format!("{bad}\n"));
            let err = ListFile::new(&path).unwrap_err().to_string();
            assert!(err.contains("invalid multi-byte token"), "{err}");
        }
    }

    #[test]
    fn rejects_duplicates_within_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "l.txt", "日\n日\n");
        let err = ListFile::new(&path).unwrap_err().to_string();
        assert!(err.contains("got duplicate token '日'"), "{err}");
        assert!(err.contains("row: 2"), "{err}");
    }

    #[test]
    fn global_uniqueness_is_immediate() {
        let dir = tempfile::tempdir().unwrap();
        let mut names = UniqueNames::default();
        let first = write_file(dir.path(), "a.txt", "日\n");
        ListFile::with_global_names(&first, FileType::OnePerLine, &mut names).unwrap();
        let second = write_file(dir.path(), "b.txt", "日\n");
        let err = ListFile::with_global_names(&second, FileType::OnePerLine, &mut names)
            .unwrap_err()
            .to_string();
        assert!(err.contains("found globally non-unique entry '日'"), "{err}");
    }

    #[test]
    fn typed_uniqueness_collects_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut names = UniqueNames::default();
        let first = write_file(dir.path(), "n5.txt", "日 一\n");
        let n5 = LevelListFile::new(&first, JlptLevel::N5, &mut names).unwrap();
        assert_eq!(n5.level(), JlptLevel::N5);
        let second = write_file(dir.path(), "n4.txt", "日 一 国\n");
        let err = LevelListFile::new(&second, JlptLevel::N4, &mut names)
            .unwrap_err()
            .to_string();
        assert!(err.contains("found 2 duplicates in n4: 日 一"), "{err}");
    }

    #[test]
    fn entry_limit() {
        let dir = tempfile::tempdir().unwrap();
        let max = usize::from(MAX_ENTRIES);
        let chars: Vec<char> = (0x3400u32..)
            .filter_map(char::from_u32)
            .filter(|c| (*c as u32) >= 0x80)
            .take(max + 1)
            .collect();
        let mut contents: String = chars[..max].iter().map(|c| format!("{c}\n")).collect();
        let path = write_file(dir.path(), "max.txt", &contents);
        let file = ListFile::new(&path).unwrap();
        assert_eq!(file.len(), max);
        assert_eq!(file.index(&chars[max - 1].to_string()), Some(MAX_ENTRIES));
        contents.push_str(&format!("{}\n", chars[max]));
        let path = write_file(dir.path(), "over.txt", &contents);
        let err = ListFile::new(&path).unwrap_err().to_string();
        assert!(err.contains("exceeded '65534' entries"), "{err}");
    }

    #[test]
    fn get_file_adds_extension() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "frequency.txt", "日\n");
        let path = get_file(dir.path(), "frequency").unwrap();
        assert!(path.ends_with("frequency.txt"));
        assert!(get_file(dir.path(), "missing").is_err());
        assert!(get_file(&dir.path().join("nope"), "frequency").is_err());
    }
}

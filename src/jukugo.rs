//! Jukugo (compound word) lists, one file per school grade.

use core::fmt;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::block::{is_hiragana, is_kanji};
use crate::error::{Context, Error, Result};
use crate::kana::PROLONG_MARK;
use crate::kanji::Grade;
use crate::list_file;
use crate::segment::Segmenter;

/// A compound word with its reading and the grade file it came from.
#[derive(Debug)]
pub struct Jukugo {
    name: String,
    reading: String,
    grade: Grade,
}

impl Jukugo {
    /// Validates that `name` contains at least two kanji and `reading` is
    /// all hiragana (the prolong mark is allowed).
    pub fn new(name: &str, reading: &str, grade: Grade) -> Result<Self> {
        let error = |msg: &str| {
            Error::domain(format!("jukugo '{name}' {msg}"), Context::default())
        };
        let kanji_count = Segmenter::new(name.as_bytes())
            .filter(|c| is_kanji(c, true))
            .count();
        if kanji_count == 0 {
            return Err(error("contains no Kanji"));
        }
        if kanji_count < 2 {
            return Err(error("must contain two or more Kanji"));
        }
        for token in Segmenter::with_only_mb(reading.as_bytes(), false) {
            if !is_hiragana(&token, true) && !token.chars().eq([PROLONG_MARK]) {
                return Err(error("reading must be all Hiragana"));
            }
        }
        Ok(Jukugo {
            name: name.to_owned(),
            reading: reading.to_owned(),
            grade,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Name plus reading in wide brackets, e.g. 朝日（あさひ）.
    pub fn name_and_reading(&self) -> String {
        format!("{}（{}）", self.name, self.reading)
    }
}

impl fmt::Display for Jukugo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// All jukugo indexed by the kanji they contain.
#[derive(Debug, Default)]
pub struct JukugoData {
    kanji_to_jukugo: HashMap<String, Vec<Arc<Jukugo>>>,
    unique: HashMap<(String, String), Arc<Jukugo>>,
}

const GRADE_FILES: [(Grade, &str); 7] = [
    (Grade::G1, "g1"),
    (Grade::G2, "g2"),
    (Grade::G3, "g3"),
    (Grade::G4, "g4"),
    (Grade::G5, "g5"),
    (Grade::G6, "g6"),
    (Grade::S, "other"),
];

impl JukugoData {
    /// Load `jukugo/g1.txt` … `g6.txt` and `jukugo/other.txt` under
    /// `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let jukugo_dir = dir.join("jukugo");
        let mut data = JukugoData::default();
        for (grade, name) in GRADE_FILES {
            let path = list_file::get_file(&jukugo_dir, name)?;
            data.load_file(&path, grade)?;
        }
        Ok(data)
    }

    /// Jukugo containing the kanji `name`.
    pub fn find(&self, name: &str) -> &[Arc<Jukugo>] {
        self.kanji_to_jukugo.get(name).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.unique.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }

    fn load_file(&mut self, path: &Path, grade: Grade) -> Result<()> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("can't open '{}'", path.display()), e))?;
        // grade files have one "name (reading)" per line; other.txt has a
        // kanji, "...", then several "name(reading)" entries per line
        let one_per_line = grade != Grade::S;
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| Error::io("failed reading line", e))?;
            if line.is_empty() {
                continue;
            }
            let context = || Context::line(path, number + 1);
            if one_per_line {
                self.create_jukugo(&line, grade, true)
                    .map_err(|e| Error::domain(e.to_string(), context()))?;
            } else {
                let rest = line
                    .split_once("... ")
                    .map(|(_, rest)| rest)
                    .ok_or_else(|| Error::format("line is missing '...'", context()))?;
                for entry in rest.split(' ').filter(|s| !s.is_empty()) {
                    self.create_jukugo(entry, grade, false)
                        .map_err(|e| Error::domain(e.to_string(), context()))?;
                }
            }
        }
        Ok(())
    }

    fn create_jukugo(&mut self, entry: &str, grade: Grade, one_per_line: bool) -> Result<()> {
        let open = entry
            .find('(')
            .ok_or_else(|| error_for(entry, "failed to find open bracket"))?;
        if one_per_line && (open < 2 || !entry[..open].ends_with(' ')) {
            return Err(error_for(entry, "open bracket should follow a space"));
        }
        let close = entry
            .find(')')
            .filter(|&close| close > open)
            .ok_or_else(|| error_for(entry, "failed to find close bracket"))?;
        if one_per_line && close != entry.len() - 1 {
            return Err(error_for(entry, "close bracket should be the last character"));
        }
        let name = entry[..open].trim_end();
        let reading = &entry[open + 1..close];
        let key = (name.to_owned(), reading.to_owned());
        match self.unique.get(&key) {
            // duplicates with the same reading in the same grade file
            // happen in the data and are ignored
            Some(existing) if existing.grade() == grade => Ok(()),
            Some(_) => Err(error_for(name, "found in more than one file")),
            None => {
                let jukugo = Arc::new(Jukugo::new(name, reading, grade)?);
                for token in Segmenter::new(name.as_bytes()) {
                    if is_kanji(&token, true) {
                        self.kanji_to_jukugo
                            .entry(token)
                            .or_default()
                            .push(jukugo.clone());
                    }
                }
                self.unique.insert(key, jukugo);
                Ok(())
            }
        }
    }
}

fn error_for(entry: &str, msg: &str) -> Error {
    Error::domain(format!("jukugo '{entry}' {msg}"), Context::default())
}

//! Counting multi-byte tokens in strings, files and directory trees.
//!
//! An optional find/replace regex runs over each line before counting;
//! the stock pattern strips furigana, i.e. a bracketed kana reading
//! following a kanji (or wide letter). Since furigana can span a line
//! break, file processing keeps one line of look-ahead and joins a line
//! whose wide bracket is still open with the next line up through the
//! closing bracket.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{self, is_kanji};
use crate::error::{Error, Result};
use crate::segment::Segmenter;

const OPEN_WIDE_BRACKET: &str = "（";
const CLOSE_WIDE_BRACKET: &str = "）";

/// The stock furigana pattern: a kanji or wide letter followed by kana in
/// wide brackets. Replacing with `$1` keeps the kanji and drops the
/// reading.
pub static REMOVE_FURIGANA: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        "([{}{}])（[{}]+）",
        block::kanji_class(),
        block::wide_letter_class(),
        block::kana_class()
    );
    Regex::new(&pattern).expect("furigana pattern is valid")
});

/// Replacement that keeps just the prefix character.
pub const DEFAULT_REPLACE: &str = "$1";

/// Counts occurrences of multi-byte tokens, with optional per-tag
/// breakdowns (tags are usually file names).
#[derive(Default)]
pub struct Utf8Count {
    map: HashMap<String, usize>,
    tags: HashMap<String, HashMap<String, usize>>,
    filter: Option<Box<dyn Fn(&str) -> bool>>,
    find: Option<Regex>,
    replace: String,
    last_replace_tag: Option<String>,
    replacements: usize,
    errors: usize,
    variants: usize,
    combining_marks: usize,
    files: usize,
    directories: usize,
}

impl Utf8Count {
    /// Count every multi-byte token.
    pub fn new() -> Self {
        Utf8Count::default()
    }

    /// Count only tokens passing `filter`.
    pub fn with_filter(filter: impl Fn(&str) -> bool + 'static) -> Self {
        Utf8Count {
            filter: Some(Box::new(filter)),
            ..Utf8Count::default()
        }
    }

    /// Count only kanji (variation-selector forms included).
    pub fn kanji() -> Self {
        Self::with_filter(|token| is_kanji(token, false))
    }

    /// Run `find`/`replace` over every line before counting.
    pub fn set_replace(&mut self, find: Regex, replace: impl Into<String>) {
        self.find = Some(find);
        self.replace = replace.into();
    }

    /// Configure the stock furigana-stripping replacement.
    pub fn remove_furigana(&mut self) {
        self.set_replace(REMOVE_FURIGANA.clone(), DEFAULT_REPLACE);
    }

    /// Count the tokens of `s`, returning how many were added.
    pub fn add(&mut self, s: &str, tag: Option<&str>) -> usize {
        self.add_bytes(s.as_bytes(), tag)
    }

    /// Like [`add`](Self::add) for raw bytes; invalid UTF-8 is counted in
    /// [`errors`](Self::errors) rather than panicking or failing.
    pub fn add_bytes(&mut self, s: &[u8], tag: Option<&str>) -> usize {
        let replaced;
        let bytes: &[u8] = match &self.find {
            Some(find) => {
                let text = String::from_utf8_lossy(s);
                let result = find.replace_all(&text, self.replace.as_str());
                if result != text {
                    self.replacements += 1;
                    if let Some(tag) = tag {
                        if self.last_replace_tag.as_deref() != Some(tag) {
                            self.last_replace_tag = Some(tag.to_owned());
                        }
                    }
                }
                replaced = result.into_owned();
                replaced.as_bytes()
            }
            None => s,
        };
        let mut segmenter = Segmenter::new(bytes);
        let mut added = 0;
        for token in segmenter.by_ref() {
            if self.filter.as_ref().is_some_and(|f| !f(&token)) {
                continue;
            }
            *self.map.entry(token.clone()).or_default() += 1;
            added += 1;
            if let Some(tag) = tag {
                *self
                    .tags
                    .entry(token)
                    .or_default()
                    .entry(tag.to_owned())
                    .or_default() += 1;
            }
        }
        self.errors += segmenter.errors();
        self.variants += segmenter.variants();
        self.combining_marks += segmenter.combining_marks();
        added
    }

    /// Count a file, or every regular file under a directory. `add_tag`
    /// tracks per-file counts under the final path component; with
    /// `file_names` the name itself is counted too; `recurse` descends
    /// into subdirectories. Symlinks are skipped.
    pub fn add_file(
        &mut self,
        path: &Path,
        add_tag: bool,
        file_names: bool,
        recurse: bool,
    ) -> Result<usize> {
        if !path.exists() {
            return Err(Error::lookup(format!(
                "file not found: {}",
                path.display()
            )));
        }
        self.do_add_file(path, add_tag, file_names, recurse)
    }

    fn do_add_file(
        &mut self,
        path: &Path,
        add_tag: bool,
        file_names: bool,
        recurse: bool,
    ) -> Result<usize> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tag = add_tag.then_some(file_name.as_str());
        let mut added = 0;
        if path.is_file() {
            self.files += 1;
            added += self.process_file(path, tag)?;
        } else if path.is_dir() {
            self.directories += 1;
            let mut entries: Vec<_> = fs::read_dir(path)
                .map_err(|e| Error::io(format!("can't read '{}'", path.display()), e))?
                .collect::<std::io::Result<_>>()
                .map_err(|e| Error::io(format!("can't read '{}'", path.display()), e))?;
            entries.sort_by_key(|e| e.file_name());
            for entry in entries {
                let entry_path = entry.path();
                if entry_path.is_symlink() {
                    continue;
                }
                if recurse {
                    added += self.do_add_file(&entry_path, add_tag, file_names, true)?;
                } else if entry_path.is_file() {
                    added += self.do_add_file(&entry_path, add_tag, file_names, false)?;
                }
            }
        } else {
            return Ok(0);
        }
        if file_names {
            added += self.add(&file_name, tag);
        }
        Ok(added)
    }

    /// Occurrences of `token` seen so far.
    pub fn count(&self, token: &str) -> usize {
        self.map.get(token).copied().unwrap_or_default()
    }

    /// Per-tag counts for `token`.
    pub fn tags_for(&self, token: &str) -> Option<&HashMap<String, usize>> {
        self.tags.get(token)
    }

    pub fn map(&self) -> &HashMap<String, usize> {
        &self.map
    }

    /// Number of distinct tokens.
    pub fn unique(&self) -> usize {
        self.map.len()
    }

    /// Total count across all tokens.
    pub fn total(&self) -> usize {
        self.map.values().sum()
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn variants(&self) -> usize {
        self.variants
    }

    pub fn combining_marks(&self) -> usize {
        self.combining_marks
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }

    /// The most recent tag that triggered a replacement.
    pub fn last_replace_tag(&self) -> Option<&str> {
        self.last_replace_tag.as_deref()
    }

    pub fn files(&self) -> usize {
        self.files
    }

    pub fn directories(&self) -> usize {
        self.directories
    }

    fn process_file(&mut self, path: &Path, tag: Option<&str>) -> Result<usize> {
        let contents =
            fs::read(path).map_err(|e| Error::io(format!("can't read '{}'", path.display()), e))?;
        let lines = contents.split(|&b| b == b'\n');
        if self.find.is_none() {
            let mut added = 0;
            for line in lines {
                added += self.add_bytes(line, tag);
            }
            return Ok(added);
        }
        // with a replacement configured, join lines so that furigana
        // spanning a line break still matches
        let mut added = 0;
        let mut prev_line = String::new();
        let mut prev_unclosed = false;
        for line in lines {
            let line = String::from_utf8_lossy(line).into_owned();
            if !prev_line.is_empty() {
                let close = line.find(CLOSE_WIDE_BRACKET);
                let open = line.find(OPEN_WIDE_BRACKET);
                let joinable = match (prev_unclosed, close) {
                    // the bracket is still open and closes before any new
                    // bracket opens on this line
                    (true, Some(at)) => at < open.unwrap_or(usize::MAX),
                    // this line starts with a bracketed reading for the
                    // last character of the previous line
                    (false, Some(_)) => open == Some(0),
                    _ => false,
                };
                if joinable {
                    let end = close.unwrap_or_default() + CLOSE_WIDE_BRACKET.len();
                    let joined = format!("{prev_line}{}", &line[..end]);
                    added += self.add(&joined, tag);
                    prev_line = line[end..].to_owned();
                    prev_unclosed = has_unclosed_bracket(&prev_line);
                    continue;
                }
                added += self.add(&prev_line, tag);
            }
            prev_unclosed = has_unclosed_bracket(&line);
            prev_line = line;
        }
        if !prev_line.is_empty() {
            added += self.add(&prev_line, tag);
        }
        Ok(added)
    }
}

/// True when the last wide bracket on the line is still open.
fn has_unclosed_bracket(line: &str) -> bool {
    match memmem::rfind(line.as_bytes(), OPEN_WIDE_BRACKET.as_bytes()) {
        Some(open) => match memmem::rfind(line.as_bytes(), CLOSE_WIDE_BRACKET.as_bytes()) {
            Some(close) => close < open,
            None => true,
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn counts_tokens() {
        let mut count = Utf8Count::new();
        assert_eq!(count.add("雪が降る。雪!", None), 6);
        assert_eq!(count.count("雪"), 2);
        assert_eq!(count.count("が"), 1);
        assert_eq!(count.count("。"), 1);
        // ASCII is not counted
        assert_eq!(count.count("!"), 0);
        assert_eq!(count.unique(), 5);
        assert_eq!(count.total(), 6);
    }

    #[test]
    fn kanji_filter() {
        let mut count = Utf8Count::kanji();
        assert_eq!(count.add("雪が降る。", None), 2);
        assert_eq!(count.count("雪"), 1);
        assert_eq!(count.count("が"), 0);
    }

    #[test]
    fn tags_track_per_source_counts() {
        let mut count = Utf8Count::new();
        count.add("雪雪", Some("a.txt"));
        count.add("雪", Some("b.txt"));
        let tags = count.tags_for("雪").unwrap();
        assert_eq!(tags["a.txt"], 2);
        assert_eq!(tags["b.txt"], 1);
        assert!(count.tags_for("犬").is_none());
    }

    #[test]
    fn counts_decode_errors() {
        let mut count = Utf8Count::new();
        let mut bytes = "雪".as_bytes().to_vec();
        bytes.push(0xff);
        count.add_bytes(&bytes, None);
        assert_eq!(count.count("雪"), 1);
        assert_eq!(count.errors(), 1);
    }

    #[test]
    fn furigana_stripping() {
        let mut count = Utf8Count::kanji();
        count.remove_furigana();
        count.add("今日（きょう）は雨", Some("x"));
        assert_eq!(count.count("今"), 1);
        assert_eq!(count.count("日"), 1);
        assert_eq!(count.count("雨"), 1);
        assert_eq!(count.replacements(), 1);
        assert_eq!(count.last_replace_tag(), Some("x"));
        // the kana reading was stripped so it never got counted
        let mut plain = Utf8Count::new();
        plain.remove_furigana();
        plain.add("今日（きょう）は雨", None);
        assert_eq!(plain.count("き"), 0);
        assert_eq!(plain.count("は"), 1);
    }

    #[test]
    fn furigana_after_wide_letter() {
        let mut count = Utf8Count::new();
        count.remove_furigana();
        count.add("Ｘ（えっくす）だ", None);
        assert_eq!(count.count("え"), 0);
        assert_eq!(count.count("だ"), 1);
    }

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn furigana_joins_across_lines() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.txt", "昨日は晴れ、今\n（きょう）は雨\n");
        let mut count = Utf8Count::kanji();
        count.remove_furigana();
        count.add_file(&dir.path().join("a.txt"), true, false, false).unwrap();
        // 今 at the end of line one keeps its furigana on line two; the
        // joined line strips it
        assert_eq!(count.count("今"), 1);
        assert_eq!(count.count("雨"), 1);
        assert_eq!(count.replacements(), 1);
        let mut kana = Utf8Count::new();
        kana.remove_furigana();
        kana.add_file(&dir.path().join("a.txt"), false, false, false).unwrap();
        assert_eq!(kana.count("き"), 0);
        assert_eq!(kana.count("ょ"), 0);
    }

    #[test]
    fn files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.txt", "雪\n");
        write_file(dir.path(), "b.txt", "雪月\n");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        write_file(&sub, "c.txt", "花\n");
        let mut count = Utf8Count::new();
        let added = count.add_file(dir.path(), true, false, false).unwrap();
        // no recursion: only a.txt and b.txt
        assert_eq!(added, 3);
        assert_eq!(count.files(), 2);
        assert_eq!(count.count("花"), 0);
        let mut count = Utf8Count::new();
        count.add_file(dir.path(), true, false, true).unwrap();
        assert_eq!(count.files(), 3);
        assert_eq!(count.directories(), 2);
        assert_eq!(count.count("花"), 1);
        assert_eq!(count.tags_for("雪").unwrap().len(), 2);
        assert!(count
            .add_file(&dir.path().join("missing.txt"), false, false, false)
            .is_err());
    }

    #[test]
    fn file_names_count_as_tokens() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "雪.txt", "月\n");
        let mut count = Utf8Count::new();
        count
            .add_file(&dir.path().join("雪.txt"), false, true, false)
            .unwrap();
        assert_eq!(count.count("雪"), 1);
        assert_eq!(count.count("月"), 1);
    }
}

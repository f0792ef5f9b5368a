//! The 214 official (Kangxi) radicals.

use core::fmt;
use std::collections::HashMap;
use std::path::Path;

use crate::column_file::{Column, ColumnFile};
use crate::error::{Error, Result};

pub const MAX_RADICALS: u16 = 214;

/// One radical: its number, the ideograph used to display it, any
/// alternate forms, a long (Japanese category) name and readings.
///
/// Equality and ordering are by number.
#[derive(Debug, Clone)]
pub struct Radical {
    number: u16,
    name: String,
    alt_forms: Vec<String>,
    long_name: String,
    reading: String,
}

impl Radical {
    pub fn number(&self) -> u16 {
        self.number
    }

    /// The primary display form, e.g. 口 for radical 30. This is the
    /// regular ideograph, not the dedicated Unicode radical code point.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alt_forms(&self) -> &[String] {
        &self.alt_forms
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    pub fn reading(&self) -> &str {
        &self.reading
    }
}

impl PartialEq for Radical {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Radical {}

impl PartialOrd for Radical {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Radical {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.number.cmp(&other.number)
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:03}] {}", self.number, self.name)
    }
}

/// All radicals loaded from `radicals.txt`, indexed by number and by
/// primary name.
#[derive(Debug, Default)]
pub struct RadicalData {
    radicals: Vec<Radical>,
    map: HashMap<String, usize>,
}

impl RadicalData {
    /// Load from a tab-separated file with Number, Name, LongName and
    /// Reading columns. Rows must be in ascending number order with no
    /// gaps. The Name column is space-separated: the first token is the
    /// primary name and the rest are alternate forms.
    pub fn load(path: &Path) -> Result<Self> {
        let number_col = Column::new("Number");
        let name_col = Column::new("Name");
        let long_name_col = Column::new("LongName");
        let reading_col = Column::new("Reading");
        let columns = [
            number_col.clone(),
            name_col.clone(),
            long_name_col.clone(),
            reading_col.clone(),
        ];
        let mut file = ColumnFile::new(path, &columns)?;
        let mut data = RadicalData::default();
        while file.next_row()? {
            let number = file.get_u16(&number_col)?;
            if usize::from(number) != file.current_row() {
                return Err(file.error("radicals must be ordered by 'number'"));
            }
            if number > MAX_RADICALS {
                return Err(file.value_error(
                    "radical number out of range",
                    &number_col,
                    file.get(&number_col)?,
                ));
            }
            let mut names = file.get(&name_col)?.split(' ').filter(|s| !s.is_empty());
            let Some(name) = names.next() else {
                return Err(file.error("radical name is empty"));
            };
            let radical = Radical {
                number,
                name: name.to_owned(),
                alt_forms: names.map(str::to_owned).collect(),
                long_name: file.get(&long_name_col)?.to_owned(),
                reading: file.get(&reading_col)?.to_owned(),
            };
            data.map.insert(radical.name.clone(), data.radicals.len());
            data.radicals.push(radical);
        }
        Ok(data)
    }

    /// Look up by the display ideograph (the primary name).
    pub fn find_by_name(&self, name: &str) -> Result<&Radical> {
        self.check_loaded()?;
        self.map
            .get(name)
            .map(|&at| &self.radicals[at])
            .ok_or_else(|| Error::lookup(format!("radical name not found: {name}")))
    }

    /// Look up by the official radical number (1 to 214).
    pub fn find_by_number(&self, number: u16) -> Result<&Radical> {
        self.check_loaded()?;
        if number == 0 || usize::from(number) > self.radicals.len() {
            return Err(Error::lookup(format!(
                "'{number}' is not a valid radical number"
            )));
        }
        Ok(&self.radicals[usize::from(number) - 1])
    }

    pub fn list(&self) -> &[Radical] {
        &self.radicals
    }

    fn check_loaded(&self) -> Result<()> {
        if self.radicals.is_empty() {
            return Err(Error::lookup("must call 'load' before calling 'find'"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn radical_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radicals.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    const SAMPLE: &str = "\
Number\tName\tLongName\tReading\n\
1\t一\t一部（いちぶ）\tイチ\n\
2\t丨\t丨部（こんぶ）\tコン\n\
3\t丶 丿\t丶部（ちゅぶ）\tチュ\n";

    #[test]
    fn loads_and_finds() {
        let (_dir, path) = radical_file(SAMPLE);
        let data = RadicalData::load(&path).unwrap();
        assert_eq!(data.list().len(), 3);
        let one = data.find_by_name("一").unwrap();
        assert_eq!(one.number(), 1);
        assert_eq!(one.long_name(), "一部（いちぶ）");
        assert_eq!(one.reading(), "イチ");
        assert_eq!(data.find_by_number(2).unwrap().name(), "丨");
        let third = data.find_by_number(3).unwrap();
        assert_eq!(third.name(), "丶");
        assert_eq!(third.alt_forms(), ["丿"]);
        assert_eq!(third.to_string(), "[003] 丶");
    }

    #[test]
    fn rows_must_be_dense_and_ordered() {
        let (_dir, path) = radical_file(
            "Number\tName\tLongName\tReading\n1\t一\tx\ty\n2\t丨\tx\ty\n5\t乙\tx\ty\n",
        );
        let err = RadicalData::load(&path).unwrap_err().to_string();
        assert!(err.contains("radicals must be ordered by 'number'"), "{err}");
        assert!(err.contains("row: 3"), "{err}");
    }

    #[test]
    fn unknown_lookups_fail() {
        let (_dir, path) = radical_file(SAMPLE);
        let data = RadicalData::load(&path).unwrap();
        assert!(data.find_by_name("口").is_err());
        assert!(data.find_by_number(0).is_err());
        assert!(data.find_by_number(4).is_err());
    }

    #[test]
    fn find_before_load() {
        let data = RadicalData::default();
        let err = data.find_by_name("一").unwrap_err().to_string();
        assert!(err.contains("must call 'load'"), "{err}");
    }

    #[test]
    fn equality_is_by_number() {
        let (_dir, path) = radical_file(SAMPLE);
        let data = RadicalData::load(&path).unwrap();
        let a = data.find_by_number(1).unwrap();
        let b = data.find_by_name("一").unwrap();
        assert_eq!(a, b);
        assert!(a < data.find_by_number(2).unwrap());
    }
}

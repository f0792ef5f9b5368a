//! Loader for delimiter-separated files with a header row.
//!
//! Columns are declared up front and may appear in any order in the file;
//! the header is matched by name. Errors always name the file and, once
//! rows are being read, the row number.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use crate::error::{Context, Error, Result};

/// Globally unique number for a column name, shared across files.
fn column_number(name: &str) -> usize {
    static REGISTRY: OnceLock<Mutex<HashMap<String, usize>>> = OnceLock::new();
    let mut registry = REGISTRY
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let next = registry.len();
    *registry.entry(name.to_owned()).or_insert(next)
}

/// A named column. The same `Column` value can be used across any number
/// of files; equality is by interned number.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    number: usize,
}

impl Column {
    pub fn new(name: &str) -> Column {
        Column {
            name: name.to_owned(),
            number: column_number(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> usize {
        self.number
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Column {}

#[derive(Debug)]
pub struct ColumnFile {
    path: std::path::PathBuf,
    lines: Lines<BufReader<File>>,
    delimiter: char,
    /// interned column number → slot in `values`
    slots: HashMap<usize, usize>,
    /// file column position → slot in `values`
    positions: Vec<usize>,
    values: Vec<String>,
    current_row: usize,
}

impl ColumnFile {
    /// Open a tab-separated file and validate its header against
    /// `columns`.
    pub fn new(path: &Path, columns: &[Column]) -> Result<Self> {
        Self::with_delimiter(path, columns, '\t')
    }

    pub fn with_delimiter(path: &Path, columns: &[Column], delimiter: char) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("can't open '{}'", path.display()), e))?;
        let mut lines = BufReader::new(file).lines();
        let header = match lines.next() {
            Some(line) => line.map_err(|e| Error::io("failed reading header row", e))?,
            None => {
                return Err(Error::format("missing header row", Context::file(path)));
            }
        };
        let mut slots = HashMap::new();
        for (slot, column) in columns.iter().enumerate() {
            if slots.insert(column.number(), slot).is_some() {
                return Err(Error::domain(
                    format!("duplicate column '{}'", column.name()),
                    Context::file(path),
                ));
            }
        }
        let mut positions = Vec::new();
        let mut seen = vec![false; columns.len()];
        for token in header.split(delimiter) {
            let slot = columns
                .iter()
                .position(|c| c.name() == token)
                .ok_or_else(|| {
                    Error::format(
                        format!("unrecognized header '{token}'"),
                        Context::file(path),
                    )
                })?;
            if seen[slot] {
                return Err(Error::format(
                    format!("duplicate header '{token}'"),
                    Context::file(path),
                ));
            }
            seen[slot] = true;
            positions.push(slot);
        }
        if let Some(missing) = seen.iter().position(|&found| !found) {
            return Err(Error::format(
                format!("column '{}' not found", columns[missing].name()),
                Context::file(path),
            ));
        }
        Ok(ColumnFile {
            path: path.to_owned(),
            lines,
            delimiter,
            slots,
            positions,
            values: vec![String::new(); columns.len()],
            current_row: 0,
        })
    }

    /// Read the next row into the current-value buffer. Returns false at
    /// end of file.
    pub fn next_row(&mut self) -> Result<bool> {
        let Some(line) = self.lines.next() else {
            return Ok(false);
        };
        let line = line.map_err(|e| Error::io("failed reading row", e))?;
        self.current_row += 1;
        let mut count = 0;
        for (position, token) in line.split(self.delimiter).enumerate() {
            match self.positions.get(position) {
                Some(&slot) => {
                    token.clone_into(&mut self.values[slot]);
                }
                None => return Err(self.error("too many columns")),
            }
            count += 1;
        }
        if count < self.positions.len() {
            return Err(self.error("not enough columns"));
        }
        Ok(true)
    }

    /// Raw value for `column` in the current row.
    pub fn get(&self, column: &Column) -> Result<&str> {
        if self.current_row == 0 {
            return Err(self.error("'next_row' must be called before 'get'"));
        }
        match self.slots.get(&column.number()) {
            Some(&slot) => Ok(&self.values[slot]),
            None => Err(self.error(&format!("unrecognized column '{}'", column.name()))),
        }
    }

    pub fn is_empty(&self, column: &Column) -> Result<bool> {
        Ok(self.get(column)?.is_empty())
    }

    pub fn get_usize(&self, column: &Column) -> Result<usize> {
        let value = self.get(column)?;
        value
            .parse()
            .map_err(|_| self.value_error("failed to convert to number", column, value))
    }

    /// `None` for an empty value, otherwise a parsed number.
    pub fn get_opt_usize(&self, column: &Column) -> Result<Option<usize>> {
        let value = self.get(column)?;
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse()
            .map(Some)
            .map_err(|_| self.value_error("failed to convert to number", column, value))
    }

    pub fn get_u8(&self, column: &Column) -> Result<u8> {
        let value = self.get(column)?;
        value
            .parse()
            .map_err(|_| self.value_error("failed to convert to u8", column, value))
    }

    pub fn get_u16(&self, column: &Column) -> Result<u16> {
        let value = self.get(column)?;
        value
            .parse()
            .map_err(|_| self.value_error("failed to convert to u16", column, value))
    }

    pub fn get_opt_u16(&self, column: &Column) -> Result<Option<u16>> {
        let value = self.get(column)?;
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse()
            .map(Some)
            .map_err(|_| self.value_error("failed to convert to u16", column, value))
    }

    /// Y/T are true; N, F and empty are false.
    pub fn get_bool(&self, column: &Column) -> Result<bool> {
        match self.get(column)? {
            "Y" | "T" => Ok(true),
            "N" | "F" | "" => Ok(false),
            value => Err(self.value_error("failed to convert to bool", column, value)),
        }
    }

    /// A code point written as 4 or 5 hex digits.
    pub fn get_char32(&self, column: &Column) -> Result<char> {
        let value = self.get(column)?;
        let parsed = (value.len() == 4 || value.len() == 5)
            .then(|| u32::from_str_radix(value, 16).ok())
            .flatten()
            .and_then(char::from_u32);
        parsed.ok_or_else(|| self.value_error("failed to convert to char32", column, value))
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Final component of the file path, as used in error messages.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Build a domain error for the current row.
    pub fn error(&self, msg: &str) -> Error {
        Error::domain(msg, self.context())
    }

    /// Build a domain error naming a column and its offending value.
    pub fn value_error(&self, msg: &str, column: &Column, value: &str) -> Error {
        Error::domain(msg, self.context().with_column(column.name(), value))
    }

    fn context(&self) -> Context {
        if self.current_row == 0 {
            Context::file(&self.path)
        } else {
            Context::line(&self.path, self.current_row)
        }
    }
}

//! Error types shared by all loaders and lookup operations.

use core::fmt;
use std::io;
use std::path::Path;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Location info attached to loader errors.
///
/// Everything is optional so the same type can describe a malformed header
/// (file only), a bad row (file and line) or a bad field (file, line, column
/// and value).
#[derive(Debug, Default, Clone)]
pub struct Context {
    pub file: Option<String>,
    pub line: Option<usize>,
    pub column: Option<String>,
    pub value: Option<String>,
}

impl Context {
    pub fn file(path: &Path) -> Self {
        Context {
            file: Some(name_of(path)),
            ..Context::default()
        }
    }

    pub fn line(path: &Path, line: usize) -> Self {
        Context {
            file: Some(name_of(path)),
            line: Some(line),
            ..Context::default()
        }
    }

    pub fn with_column(mut self, column: &str, value: &str) -> Self {
        self.column = Some(column.to_owned());
        self.value = Some(value.to_owned());
        self
    }
}

/// Use the final path component the way loaders report it.
fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, " - file: {file}")?;
        }
        if let Some(line) = self.line {
            write!(f, ", row: {line}")?;
        }
        if let Some(column) = &self.column {
            write!(f, ", column: '{column}'")?;
        }
        if let Some(value) = &self.value {
            write!(f, ", value: '{value}'")?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed rows, headers, numeric fields and UTF-8 tokens.
    #[error("{msg}{context}")]
    Format { msg: String, context: Context },
    /// Valid syntax with invalid content (duplicates, unknown names, bad
    /// references between files).
    #[error("{msg}{context}")]
    Domain { msg: String, context: Context },
    /// Numeric values outside their documented bounds.
    #[error("{msg}{context}")]
    Range { msg: String, context: Context },
    /// Lookup on missing or not-yet-loaded data.
    #[error("{0}")]
    Lookup(String),
    #[error("{msg}: {source}")]
    Io {
        msg: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn format(msg: impl Into<String>, context: Context) -> Self {
        Error::Format {
            msg: msg.into(),
            context,
        }
    }

    pub fn domain(msg: impl Into<String>, context: Context) -> Self {
        Error::Domain {
            msg: msg.into(),
            context,
        }
    }

    pub fn range(msg: impl Into<String>, context: Context) -> Self {
        Error::Range {
            msg: msg.into(),
            context,
        }
    }

    pub fn lookup(msg: impl Into<String>) -> Self {
        Error::Lookup(msg.into())
    }

    pub fn io(msg: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            msg: msg.into(),
            source,
        }
    }
}

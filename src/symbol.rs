//! Small interned string handles.
//!
//! UCD rows repeat the same short strings (block names, Unicode versions,
//! pinyin) tens of thousands of times. `Symbol` stores each distinct
//! string once in a process-wide table and hands out a two-byte handle.

use core::fmt;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

struct Table {
    ids: HashMap<&'static str, u16>,
    names: Vec<&'static str>,
}

fn table() -> &'static Mutex<Table> {
    static TABLE: OnceLock<Mutex<Table>> = OnceLock::new();
    TABLE.get_or_init(|| {
        Mutex::new(Table {
            ids: HashMap::new(),
            names: vec![""],
        })
    })
}

/// Interned string handle. The empty string is always symbol zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u16);

impl Symbol {
    pub const EMPTY: Symbol = Symbol(0);

    /// Intern `s`, returning the existing handle when it was seen before.
    pub fn new(s: &str) -> Symbol {
        if s.is_empty() {
            return Symbol::EMPTY;
        }
        let mut table = table().lock().unwrap_or_else(|e| e.into_inner());
        if let Some(&id) = table.ids.get(s) {
            return Symbol(id);
        }
        let id = table.names.len();
        assert!(id <= usize::from(u16::MAX), "symbol table overflow");
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        table.names.push(leaked);
        table.ids.insert(leaked, id as u16);
        Symbol(id as u16)
    }

    pub fn as_str(self) -> &'static str {
        let table = table().lock().unwrap_or_else(|e| e.into_inner());
        table.names[usize::from(self.0)]
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

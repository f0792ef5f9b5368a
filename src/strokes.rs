//! Validated stroke counts.

use core::fmt;

use crate::error::{Context, Error, Result};

/// A stroke count with an optional variant count (a few kanji have two
/// accepted ways of writing them). Bounds come from the current UCD data:
/// 龘 has 48 strokes and one extension-B kanji has 53.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strokes {
    value: u8,
    /// zero means no variant
    variant: u8,
}

impl Strokes {
    pub const MAX: u8 = 53;
    pub const MAX_VARIANT: u8 = 33;

    /// A plain stroke count, 1..=53.
    pub fn new(value: u8) -> Result<Self> {
        if value == 0 || value > Self::MAX {
            return Err(range_error(value, ""));
        }
        Ok(Strokes { value, variant: 0 })
    }

    /// A stroke count with a differing variant count, 3..=33.
    pub fn with_variant(value: u8, variant: u8) -> Result<Self> {
        if value < 2 || value > Self::MAX {
            return Err(range_error(value, ""));
        }
        if variant < 3 || variant > Self::MAX_VARIANT {
            return Err(range_error(variant, "variant "));
        }
        if value == variant {
            return Err(Error::domain(
                format!("strokes and variant strokes are the same '{value}'"),
                Context::default(),
            ));
        }
        Ok(Strokes { value, variant })
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn variant(&self) -> Option<u8> {
        (self.variant != 0).then_some(self.variant)
    }

    pub fn has_variant(&self) -> bool {
        self.variant != 0
    }

    /// "9" or, with the variant included, "9/8".
    pub fn to_string_with_variant(&self) -> String {
        match self.variant() {
            Some(variant) => format!("{}/{variant}", self.value),
            None => self.value.to_string(),
        }
    }
}

fn range_error(value: u8, kind: &str) -> Error {
    Error::range(
        format!("{kind}strokes '{value}' out of range"),
        Context::default(),
    )
}

impl fmt::Display for Strokes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_values() {
        assert_eq!(Strokes::new(1).unwrap().value(), 1);
        assert_eq!(Strokes::new(53).unwrap().value(), 53);
        assert!(Strokes::new(1).unwrap().variant().is_none());
        let s = Strokes::with_variant(9, 8).unwrap();
        assert_eq!(s.value(), 9);
        assert_eq!(s.variant(), Some(8));
        assert!(s.has_variant());
    }

    #[test]
    fn out_of_range() {
        assert!(Strokes::new(0).is_err());
        assert!(Strokes::new(54).is_err());
        assert!(Strokes::with_variant(1, 3).is_err());
        assert!(Strokes::with_variant(5, 2).is_err());
        assert!(Strokes::with_variant(5, 34).is_err());
        let err = Strokes::with_variant(5, 5).unwrap_err().to_string();
        assert!(err.contains("are the same '5'"), "{err}");
    }

    #[test]
    fn display() {
        assert_eq!(Strokes::new(10).unwrap().to_string(), "10");
        let s = Strokes::with_variant(9, 8).unwrap();
        assert_eq!(s.to_string(), "9");
        assert_eq!(s.to_string_with_variant(), "9/8");
        assert_eq!(Strokes::new(4).unwrap().to_string_with_variant(), "4");
    }

    #[test]
    fn ordering() {
        assert!(Strokes::new(3).unwrap() < Strokes::new(4).unwrap());
    }
}

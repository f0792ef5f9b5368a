//! Morohashi (Dai Kan-Wa Jiten) entry ids.

use core::fmt;
use core::str::FromStr;

use crate::error::{Context, Error, Result};

/// Most entries are plain numbers; a few hundred carry a Prime (') or
/// DoublePrime ('') suffix and the supplemental volume is marked with a
/// leading 'H' (補巻). The UCD writes primes as trailing `P` characters,
/// and both forms are accepted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdType {
    #[default]
    Plain,
    Prime,
    DoublePrime,
    Supplemental,
}

/// A Morohashi id; the default (zero) value means "no id". A zero id with
/// a suffix or prefix is rejected, but a bare zero is accepted since UCD
/// data contains a few all-zero entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MorohashiId {
    id: u16,
    kind: IdType,
}

impl MorohashiId {
    pub const MAX_ID: u16 = u16::MAX;

    pub fn new(id: u16, kind: IdType) -> MorohashiId {
        MorohashiId { id, kind }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn kind(&self) -> IdType {
        self.kind
    }

    /// True when there is no id at all.
    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

impl FromStr for MorohashiId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, digits) = if let Some(rest) = s.strip_suffix("PP").or(s.strip_suffix("''")) {
            (IdType::DoublePrime, rest)
        } else if let Some(rest) = s.strip_suffix('P').or(s.strip_suffix('\'')) {
            (IdType::Prime, rest)
        } else if let Some(rest) = s.strip_prefix('H') {
            (IdType::Supplemental, rest)
        } else {
            (IdType::Plain, s)
        };
        if s.is_empty() {
            return Ok(MorohashiId::default());
        }
        let error = |msg: &str| {
            Error::domain(
                format!("Morohashi ID '{s}' {msg}"),
                Context::default(),
            )
        };
        if digits.is_empty() {
            return Err(error("is invalid"));
        }
        let mut id: u16 = 0;
        for c in digits.chars() {
            let digit = c.to_digit(10).ok_or_else(|| error("is non-numeric"))?;
            id = id
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit as u16))
                .ok_or_else(|| error("exceeds max"))?;
        }
        if id == 0 && kind != IdType::Plain {
            return Err(error("can't be zero"));
        }
        Ok(MorohashiId { id, kind })
    }
}

impl fmt::Display for MorohashiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        match self.kind {
            IdType::Plain => write!(f, "{}", self.id),
            IdType::Prime => write!(f, "{}P", self.id),
            IdType::DoublePrime => write!(f, "{}PP", self.id),
            IdType::Supplemental => write!(f, "H{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> MorohashiId {
        s.parse().unwrap()
    }

    #[test]
    fn plain_ids() {
        assert_eq!(parse("1234").id(), 1234);
        assert_eq!(parse("1234").kind(), IdType::Plain);
        assert_eq!(parse("00123").id(), 123);
        // all-zero ids appear in UCD data and act as empty
        assert!(parse("0").is_empty());
        assert!(parse("").is_empty());
        assert_eq!(parse("65535").id(), u16::MAX);
    }

    #[test]
    fn prime_and_supplemental() {
        assert_eq!(parse("123P").kind(), IdType::Prime);
        assert_eq!(parse("123'").kind(), IdType::Prime);
        assert_eq!(parse("123PP").kind(), IdType::DoublePrime);
        assert_eq!(parse("123''").kind(), IdType::DoublePrime);
        assert_eq!(parse("H123").kind(), IdType::Supplemental);
        assert_eq!(parse("H123").id(), 123);
    }

    #[test]
    fn invalid_ids() {
        for bad in ["x", "12x", "65536", "0P", "0''", "H0", "P", "H"] {
            assert!(bad.parse::<MorohashiId>().is_err(), "{bad}");
        }
        let err = "65536".parse::<MorohashiId>().unwrap_err().to_string();
        assert!(err.contains("exceeds max"), "{err}");
        let err = "0P".parse::<MorohashiId>().unwrap_err().to_string();
        assert!(err.contains("can't be zero"), "{err}");
    }

    #[test]
    fn display_round_trip() {
        for s in ["1234", "123P", "123PP", "H123"] {
            assert_eq!(parse(s).to_string(), s);
        }
        assert_eq!(parse("123'").to_string(), "123P");
        assert_eq!(MorohashiId::default().to_string(), "");
    }

    #[test]
    fn ordering_by_id_then_kind() {
        assert!(parse("3") < parse("4"));
        assert!(parse("3") < parse("3P"));
    }
}

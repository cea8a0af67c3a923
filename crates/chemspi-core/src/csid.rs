//! # ChemSpider identifiers
//!
//! A [`Csid`] is the stable integer key of a remote record. It can be built
//! from integers or from numeric strings; see [`IntoCsid`].

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ChemSpider ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Csid(pub i64);

impl Csid {
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Csid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Csid {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for Csid {
    type Err = Error;

    /// Parse a signed decimal identifier. Surrounding whitespace is trimmed
    /// and single underscores between digits are accepted as separators.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCsid(s.to_string());
        let digits = strip_separators(s.trim()).ok_or_else(invalid)?;
        digits.parse::<i64>().map(Self).map_err(|_| invalid())
    }
}

/// Remove `_` separators, each of which must sit between two digits.
fn strip_separators(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        match (before, after) {
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(out)
}

/// Anything a [`Compound`](crate::Compound) can be identified by.
pub trait IntoCsid {
    fn into_csid(self) -> Result<Csid>;
}

impl IntoCsid for Csid {
    fn into_csid(self) -> Result<Csid> {
        Ok(self)
    }
}

impl IntoCsid for &str {
    fn into_csid(self) -> Result<Csid> {
        self.parse()
    }
}

impl IntoCsid for String {
    fn into_csid(self) -> Result<Csid> {
        self.as_str().parse()
    }
}

impl IntoCsid for &String {
    fn into_csid(self) -> Result<Csid> {
        self.as_str().parse()
    }
}

macro_rules! lossless_into_csid {
    ($($ty:ty),*) => {
        $(impl IntoCsid for $ty {
            fn into_csid(self) -> Result<Csid> {
                Ok(Csid(i64::from(self)))
            }
        })*
    };
}

// Values above `i64::MAX` have no identifier.
macro_rules! checked_into_csid {
    ($($ty:ty),*) => {
        $(impl IntoCsid for $ty {
            fn into_csid(self) -> Result<Csid> {
                i64::try_from(self)
                    .map(Csid)
                    .map_err(|_| Error::InvalidCsid(self.to_string()))
            }
        })*
    };
}

lossless_into_csid!(i8, i16, i32, i64, u8, u16, u32);
checked_into_csid!(isize, u64, usize);

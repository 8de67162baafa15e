//! The `Letter` value object: the key that routes a line to its group.
//!
//! # Key derivation
//!
//! A line's key is the first character of the line after trimming
//! surrounding whitespace, mapped to uppercase. Only `A..=Z` are keys;
//! everything else (digits, punctuation, non-Latin scripts, blank lines)
//! has no key and is dropped by the categorizer.
//!
//! Whitespace here is Unicode whitespace plus the ASCII information
//! separators `U+001C..=U+001F`, which word lists exported from older
//! tools sometimes carry as record markers.

use std::fmt;

use serde::{Serialize, Serializer};

/// One of the 26 uppercase ASCII letters.
///
/// Ordering is alphabetical, so a `BTreeMap<Letter, _>` iterates in the
/// order the summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Derive the key of an input line, or `None` when the line does not
    /// qualify (blank after trimming, or not starting with a letter).
    ///
    /// The first character is uppercased with full Unicode case mapping and
    /// only the first resulting character is considered, so `ß` keys to `S`
    /// and `ı` keys to `I`.
    pub fn from_line(line: &str) -> Option<Self> {
        let first = line.trim_start_matches(is_separator).chars().next()?;
        let upper = first.to_uppercase().next()?;
        if upper.is_ascii_uppercase() {
            Some(Self(upper as u8))
        } else {
            None
        }
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Name of the file this letter's group is written to, e.g. `A.txt`.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.as_char())
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

//! # ISBN Module
//!
//! The `Isbn` value object: the one and only identity of a book edition.
//!
//! ## Identity Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Isbn("9780451524935")                           │
//! │                                                                         │
//! │  Construction   exactly 13 chars, ASCII digits only, no checksum       │
//! │  Equality       ASCII case-insensitive string comparison               │
//! │  Hash           lowercased bytes (consistent with equality)            │
//! │  Mutability     none - the inner String is never exposed mutably       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shelf_core::Isbn;
//!
//! let isbn: Isbn = "9780451524935".parse().unwrap();
//! assert_eq!(isbn.as_str(), "9780451524935");
//! assert!(Isbn::new("not-an-isbn").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};
use crate::validation::validate_isbn;

/// A validated 13-digit ISBN.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    /// Validates and wraps a raw ISBN string.
    ///
    /// ## Errors
    /// - `Required` if the input is empty
    /// - `InvalidLength` if it is not exactly 13 characters
    /// - `InvalidFormat` if any character is not an ASCII digit
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        validate_isbn(&raw)?;
        Ok(Isbn(raw))
    }

    /// Builds an ISBN from a value that may be absent.
    ///
    /// `None` fails the same way an empty string does.
    pub fn from_optional(raw: Option<&str>) -> ValidationResult<Self> {
        match raw {
            Some(raw) => Isbn::new(raw),
            None => Err(ValidationError::required("isbn")),
        }
    }

    /// Returns the ISBN digits.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Isbn {}

impl Hash for Isbn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl PartialOrd for Isbn {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Isbn {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let lhs = self.0.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.0.bytes().map(|b| b.to_ascii_lowercase());
        lhs.cmp(rhs)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Isbn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Isbn::new(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Isbn::new(value)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Isbn::new(value)
    }
}

impl From<Isbn> for String {
    fn from(isbn: Isbn) -> Self {
        isbn.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_isbns_keep_their_value() {
        for raw in ["0000000000000", "1234567890123", "9789966566003"] {
            let isbn = Isbn::new(raw).unwrap();
            assert_eq!(isbn.as_str(), raw);
            assert_eq!(isbn.to_string(), raw);
        }
    }

    #[test]
    fn test_every_digit_position_is_checked() {
        for position in 0..13 {
            let mut raw: Vec<char> = "1234567890123".chars().collect();
            raw[position] = 'a';
            let raw: String = raw.into_iter().collect();
            assert!(Isbn::new(raw).is_err(), "position {position} not checked");
        }
    }

    #[test]
    fn test_wrong_lengths_fail() {
        for length in [0usize, 1, 12, 14, 26] {
            let raw = "7".repeat(length);
            assert!(Isbn::new(raw).is_err(), "length {length} accepted");
        }
    }

    #[test]
    fn test_absent_input_fails() {
        assert_eq!(
            Isbn::from_optional(None),
            Err(ValidationError::required("isbn"))
        );
        assert!(Isbn::from_optional(Some("1234567890123")).is_ok());
    }

    #[test]
    fn test_value_equality_and_hash() {
        let a = Isbn::new("1234567890123").unwrap();
        let b: Isbn = "1234567890123".parse().unwrap();
        let c = Isbn::try_from("3210987654321").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Isbn> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_round_trip_revalidates() {
        let isbn = Isbn::new("9781460251584").unwrap();
        let json = serde_json::to_string(&isbn).unwrap();
        assert_eq!(json, "\"9781460251584\"");

        let back: Isbn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, isbn);

        assert!(serde_json::from_str::<Isbn>("\"12345\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_thirteen_digits_are_accepted(raw in "[0-9]{13}") {
            let isbn = Isbn::new(raw.as_str()).unwrap();
            prop_assert_eq!(isbn.as_str(), raw.as_str());
        }

        #[test]
        fn prop_other_lengths_are_rejected(
            raw in "[0-9]{0,40}".prop_filter("thirteen digits are valid", |s| s.len() != 13)
        ) {
            prop_assert!(Isbn::new(raw).is_err());
        }

        #[test]
        fn prop_any_non_digit_is_rejected(
            raw in "[0-9]{13}",
            position in 0usize..13,
            intruder in any::<char>().prop_filter("must not be an ASCII digit", |c| !c.is_ascii_digit()),
        ) {
            let mut chars: Vec<char> = raw.chars().collect();
            chars[position] = intruder;
            let raw: String = chars.into_iter().collect();
            prop_assert!(Isbn::new(raw).is_err());
        }
    }
}

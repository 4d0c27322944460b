//! # Book Module
//!
//! The `Book` entity: descriptive fields plus the [`Isbn`] that identifies it.
//!
//! ## Identity-by-ISBN
//! ```text
//! Book { "1984",        "George Orwell", 1234567890123 }
//! Book { "Nineteen 84", "G. Orwell",     1234567890123 }
//!                           │
//!                           ▼
//!              equal, same hash: ONE stored entry
//! ```
//! Name and author are descriptive. Two books with the same ISBN are the same
//! book for storage, lookup and removal purposes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValidationResult;
use crate::isbn::Isbn;
use crate::validation::validate_required;

/// An immutable catalogue record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BookRecord")]
pub struct Book {
    name: String,
    author: String,
    isbn: Isbn,
}

impl Book {
    /// Creates a book from an already validated ISBN.
    ///
    /// ## Errors
    /// `Required` if `name` or `author` is blank after trimming.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        isbn: Isbn,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let author = author.into();

        validate_required("name", &name)?;
        validate_required("author", &author)?;

        Ok(Book { name, author, isbn })
    }

    /// Creates a book from a raw ISBN string.
    ///
    /// Name and author are checked first; ISBN errors propagate unchanged.
    pub fn from_raw_isbn(
        name: impl Into<String>,
        author: impl Into<String>,
        raw_isbn: &str,
    ) -> ValidationResult<Self> {
        let name = name.into();
        let author = author.into();

        validate_required("name", &name)?;
        validate_required("author", &author)?;
        let isbn = Isbn::new(raw_isbn)?;

        Ok(Book { name, author, isbn })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[inline]
    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.isbn == other.isbn
    }
}

impl Eq for Book {}

impl Hash for Book {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.isbn.hash(state);
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.name, self.author, self.isbn)
    }
}

/// Unvalidated wire shape; deserialization goes through [`Book::new`].
#[derive(Deserialize)]
struct BookRecord {
    name: String,
    author: String,
    isbn: Isbn,
}

impl TryFrom<BookRecord> for Book {
    type Error = crate::error::ValidationError;

    fn try_from(record: BookRecord) -> Result<Self, Self::Error> {
        Book::new(record.name, record.author, record.isbn)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

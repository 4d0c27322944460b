//! # Inventory Store
//!
//! The set of books the library owns, keyed uniquely by ISBN.
//!
//! ## Key Operations
//! - Add a book (refused if the ISBN is already stored)
//! - Remove by ISBN, or by any `Book` carrying that ISBN
//! - Existence checks (always succeed)
//!
//! ## Identity Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  remove_book(&Book { "Other title", "Other author", 0123456789123 })   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find(&0123456789123) ← explicit lookup by key, other fields ignored    │
//! │       │                                                                 │
//! │       ├── None       → Failure("Book does not exist in the library.")  │
//! │       └── Some(book) → remove exactly that entry                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use shelf_core::{Book, FailureReason, Isbn, Outcome, ValidationResult};
use tracing::{debug, warn};

use crate::availability::AvailabilityChecker;

/// In-memory inventory of books.
///
/// ## Invariants
/// - At most one book per ISBN
/// - Only mutated through `add_book` / `remove_*`
///
/// Books are kept ordered by ISBN so iteration is deterministic.
///
/// ## Usage
/// ```rust
/// use shelf_lending::InventoryStore;
///
/// let mut store = InventoryStore::new();
/// let added = store.add("1984", "George Orwell", "1234567890123").unwrap();
/// assert!(added.is_success());
/// assert_eq!(store.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    books: BTreeMap<Isbn, Book>,
}

impl InventoryStore {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        InventoryStore {
            books: BTreeMap::new(),
        }
    }

    /// Creates an inventory seeded with `books`.
    ///
    /// When several books share an ISBN, the first one wins.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut store = InventoryStore::new();
        for book in books {
            store.books.entry(book.isbn().clone()).or_insert(book);
        }
        store
    }

    /// Adds a book.
    ///
    /// ## Returns
    /// - `Success` if no stored book has the same ISBN
    /// - `Failure("Book already exists in the library.")` otherwise; the
    ///   stored book is left untouched
    pub fn add_book(&mut self, book: Book) -> Outcome {
        match self.books.entry(book.isbn().clone()) {
            Entry::Occupied(_) => {
                warn!(isbn = %book.isbn(), "Rejecting duplicate book");
                FailureReason::AlreadyExists.into()
            }
            Entry::Vacant(slot) => {
                debug!(isbn = %book.isbn(), name = %book.name(), "Adding book");
                slot.insert(book);
                Outcome::completed()
            }
        }
    }

    /// Builds a book from raw parts and adds it.
    ///
    /// ## Errors
    /// Returns `Err` only when the parts cannot form a `Book`. A duplicate
    /// ISBN is an `Ok(Outcome::Failure(..))`.
    pub fn add(&mut self, name: &str, author: &str, isbn: &str) -> ValidationResult<Outcome> {
        let book = Book::from_raw_isbn(name, author, isbn)?;
        Ok(self.add_book(book))
    }

    /// Removes the stored book that has the same ISBN as `book`.
    pub fn remove_book(&mut self, book: &Book) -> Outcome {
        self.remove_by_isbn(book.isbn())
    }

    /// Removes the stored book with this ISBN.
    pub fn remove_by_isbn(&mut self, isbn: &Isbn) -> Outcome {
        let Some(key) = self.find(isbn).map(|book| book.isbn().clone()) else {
            warn!(isbn = %isbn, "Cannot remove unknown book");
            return FailureReason::DoesNotExist.into();
        };

        self.books.remove(&key);
        debug!(isbn = %key, remaining = self.books.len(), "Removed book");
        Outcome::completed()
    }

    /// Looks a book up by ISBN.
    pub fn find(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Whether a book with the same ISBN is stored. Always succeeds.
    pub fn book_exists(&self, book: &Book) -> Outcome<bool> {
        self.isbn_exists(book.isbn())
    }

    /// Whether a book with this ISBN is stored. Always succeeds.
    pub fn isbn_exists(&self, isbn: &Isbn) -> Outcome<bool> {
        Outcome::success(self.find(isbn).is_some())
    }

    /// Number of stored books.
    #[inline]
    pub fn count(&self) -> usize {
        self.books.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterates over stored books in ISBN order.
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }
}

impl AvailabilityChecker for InventoryStore {
    fn isbn_exists(&self, isbn: &Isbn) -> Outcome<bool> {
        InventoryStore::isbn_exists(self, isbn)
    }
}

impl FromIterator<Book> for InventoryStore {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        InventoryStore::from_books(iter)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Borrowing Ledger
//!
//! Tracks which ISBNs are checked out and enforces the borrow/return
//! transitions.
//!
//! ## Borrow / Return Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  borrow_book(isbn)                     return_book(isbn)                │
//! │       │                                     │                           │
//! │       ▼                                     ▼                           │
//! │  checker.isbn_exists(isbn)            checker.isbn_exists(isbn)         │
//! │       │                                     │                           │
//! │       ├── Failure(e) → "Failed to borrow    ├── Failure(e) → "Failed to │
//! │       │                 book: {e}"          │          return book: {e}"│
//! │       ├── false → DoesNotExist              ├── false → DoesNotExist    │
//! │       ├── borrowed → AlreadyBorrowed        ├── not borrowed →          │
//! │       │                                     │          NotBorrowed      │
//! │       └── record(isbn, now)                 └── forget(isbn)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every failure leaves the ledger unchanged.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shelf_core::{FailureReason, Isbn, Outcome};
use tracing::{debug, warn};

use crate::availability::AvailabilityChecker;

const BORROW_CONTEXT: &str = "Failed to borrow book: ";
const RETURN_CONTEXT: &str = "Failed to return book: ";
const AVAILABILITY_CONTEXT: &str = "Failed to check availability: ";

/// One checked-out book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub isbn: Isbn,
    pub borrowed_at: DateTime<Utc>,
}

/// The set of borrowed ISBNs, checked against an inventory capability.
///
/// ## Invariants
/// - An ISBN is recorded at most once
/// - Entries are only added by a successful borrow and removed by a
///   successful return (or an explicit [`release`](Self::release))
#[derive(Debug)]
pub struct BorrowingLedger<C> {
    checker: C,
    borrowed: HashMap<Isbn, DateTime<Utc>>,
}

impl<C: AvailabilityChecker> BorrowingLedger<C> {
    /// Creates an empty ledger that consults `checker` for existence.
    pub fn new(checker: C) -> Self {
        BorrowingLedger {
            checker,
            borrowed: HashMap::new(),
        }
    }

    /// Checks a book out.
    pub fn borrow_book(&mut self, isbn: &Isbn) -> Outcome {
        if let Err(refused) = self.require_in_inventory(isbn, BORROW_CONTEXT) {
            return refused;
        }

        match self.borrowed.entry(isbn.clone()) {
            Entry::Occupied(_) => {
                warn!(isbn = %isbn, "Book already borrowed");
                FailureReason::AlreadyBorrowed.into()
            }
            Entry::Vacant(slot) => {
                slot.insert(Utc::now());
                debug!(isbn = %isbn, total = self.borrowed.len(), "Book borrowed");
                Outcome::completed()
            }
        }
    }

    /// Checks a book back in.
    pub fn return_book(&mut self, isbn: &Isbn) -> Outcome {
        if let Err(refused) = self.require_in_inventory(isbn, RETURN_CONTEXT) {
            return refused;
        }

        if self.borrowed.remove(isbn).is_none() {
            warn!(isbn = %isbn, "Book was not borrowed");
            return FailureReason::NotBorrowed.into();
        }

        debug!(isbn = %isbn, total = self.borrowed.len(), "Book returned");
        Outcome::completed()
    }

    /// Whether the book can be borrowed right now.
    ///
    /// An ISBN unknown to the inventory is reported as `Success(false)`.
    pub fn is_available(&self, isbn: &Isbn) -> Outcome<bool> {
        match self.checker.isbn_exists(isbn) {
            Outcome::Success(exists) => Outcome::success(exists && !self.is_borrowed(isbn)),
            Outcome::Failure(message) => {
                Outcome::<bool>::Failure(message).with_context(AVAILABILITY_CONTEXT)
            }
        }
    }

    /// Number of books currently checked out.
    #[inline]
    pub fn total_borrowed(&self) -> usize {
        self.borrowed.len()
    }

    #[inline]
    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Asks the checker whether `isbn` exists, mapping the two refusal
    /// cases to the outcome the caller should return.
    fn require_in_inventory(&self, isbn: &Isbn, context: &str) -> Result<(), Outcome> {
        match self.checker.isbn_exists(isbn) {
            Outcome::Success(true) => Ok(()),
            Outcome::Success(false) => {
                warn!(isbn = %isbn, "Book not in inventory");
                Err(FailureReason::DoesNotExist.into())
            }
            Outcome::Failure(message) => {
                warn!(isbn = %isbn, error = %message, "Inventory query failed");
                Err(Outcome::Failure(message).with_context(context))
            }
        }
    }
}

impl<C> BorrowingLedger<C> {
    /// Whether `isbn` is recorded as borrowed. Does not consult the inventory.
    #[inline]
    pub fn is_borrowed(&self, isbn: &Isbn) -> bool {
        self.borrowed.contains_key(isbn)
    }

    /// When `isbn` was borrowed, if it is currently out.
    pub fn borrowed_since(&self, isbn: &Isbn) -> Option<DateTime<Utc>> {
        self.borrowed.get(isbn).copied()
    }

    /// Iterates over borrowed ISBNs in no particular order.
    pub fn borrowed(&self) -> impl Iterator<Item = &Isbn> + '_ {
        self.borrowed.keys()
    }

    /// Snapshot of current loans, ordered by ISBN.
    pub fn loans(&self) -> Vec<Loan> {
        let mut loans: Vec<Loan> = self
            .borrowed
            .iter()
            .map(|(isbn, borrowed_at)| Loan {
                isbn: isbn.clone(),
                borrowed_at: *borrowed_at,
            })
            .collect();
        loans.sort_by(|a, b| a.isbn.cmp(&b.isbn));
        loans
    }

    /// Drops a ledger entry without consulting the inventory.
    ///
    /// Returns whether an entry was removed.
    pub fn release(&mut self, isbn: &Isbn) -> bool {
        let released = self.borrowed.remove(isbn).is_some();
        if released {
            debug!(isbn = %isbn, "Released ledger entry");
        }
        released
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

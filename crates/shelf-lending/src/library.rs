//! # Library
//!
//! Composition root that owns one inventory and one ledger wired to it.
//!
//! ## Why a Composition Root?
//! Neither store can see the other's state: the inventory does not know what
//! is borrowed, and the ledger only reads the inventory. `Library` is the one
//! place that holds both, so it is where "do not remove a borrowed book" is
//! enforced.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Library                                                                │
//! │  ├── inventory: SharedInventory  (Arc<Mutex<InventoryStore>>)          │
//! │  └── ledger:    Mutex<BorrowingLedger<SharedInventory>>                │
//! │                                                                         │
//! │  Lock order is always: ledger → inventory                              │
//! │                                                                         │
//! │  borrow_book / return_book / remove_*  ── ledger lock, then inventory  │
//! │  add_book / count / with_inventory     ── inventory lock only          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, MutexGuard};

use shelf_core::{Book, BookState, FailureReason, Isbn, Outcome};
use tracing::{error, info, warn};

use crate::shared::SharedInventory;
use crate::store::inventory::InventoryStore;
use crate::store::ledger::{BorrowingLedger, Loan};

/// Thread-safe lending library.
///
/// ## Usage
/// ```rust
/// use shelf_core::Book;
/// use shelf_lending::Library;
///
/// let library = Library::new();
/// let book = Book::from_raw_isbn("1984", "George Orwell", "1234567890123").unwrap();
/// let isbn = book.isbn().clone();
///
/// assert!(library.add_book(book).is_success());
/// assert!(library.borrow_book(&isbn).is_success());
/// assert!(library.remove_by_isbn(&isbn).is_failure());
/// ```
#[derive(Debug)]
pub struct Library {
    inventory: SharedInventory,
    ledger: Mutex<BorrowingLedger<SharedInventory>>,
}

impl Library {
    /// Creates a library with an empty inventory.
    pub fn new() -> Self {
        Library::from_store(InventoryStore::new())
    }

    /// Creates a library around an existing inventory. Nothing is borrowed.
    pub fn from_store(store: InventoryStore) -> Self {
        let inventory = SharedInventory::new(store);
        let ledger = BorrowingLedger::new(inventory.clone());
        Library {
            inventory,
            ledger: Mutex::new(ledger),
        }
    }

    /// Executes a function with read access to the inventory.
    ///
    /// Mutation goes through `add_book` and the `remove_*` methods only, so a
    /// borrowed book cannot leave the inventory behind the ledger's back.
    pub fn with_inventory<F, R>(&self, f: F) -> Result<R, FailureReason>
    where
        F: FnOnce(&InventoryStore) -> R,
    {
        self.inventory.with_inventory(f)
    }

    pub fn add_book(&self, book: Book) -> Outcome {
        self.inventory
            .with_inventory_mut(|store| store.add_book(book))
            .unwrap_or_else(|reason| reason.into())
    }

    pub fn remove_book(&self, book: &Book) -> Outcome {
        self.remove_by_isbn(book.isbn())
    }

    /// Removes a book unless it is currently borrowed.
    pub fn remove_by_isbn(&self, isbn: &Isbn) -> Outcome {
        let ledger = match self.lock_ledger() {
            Ok(ledger) => ledger,
            Err(reason) => return reason.into(),
        };

        if ledger.is_borrowed(isbn) {
            warn!(isbn = %isbn, "Refusing to remove a borrowed book");
            return FailureReason::CurrentlyBorrowed.into();
        }

        let removed = self
            .inventory
            .with_inventory_mut(|store| store.remove_by_isbn(isbn))
            .unwrap_or_else(|reason| reason.into());
        drop(ledger);

        if removed.is_success() {
            info!(isbn = %isbn, "Book withdrawn from library");
        }
        removed
    }

    pub fn borrow_book(&self, isbn: &Isbn) -> Outcome {
        self.with_ledger(|ledger| ledger.borrow_book(isbn))
            .unwrap_or_else(|reason| reason.into())
    }

    pub fn return_book(&self, isbn: &Isbn) -> Outcome {
        self.with_ledger(|ledger| ledger.return_book(isbn))
            .unwrap_or_else(|reason| reason.into())
    }

    pub fn is_available(&self, isbn: &Isbn) -> Outcome<bool> {
        self.with_ledger(|ledger| ledger.is_available(isbn))
            .unwrap_or_else(|reason| reason.into())
    }

    /// Number of books in the inventory.
    pub fn count(&self) -> Outcome<usize> {
        self.inventory
            .with_inventory(InventoryStore::count)
            .map_or_else(|reason| reason.into(), Outcome::success)
    }

    /// Number of books currently borrowed.
    pub fn total_borrowed(&self) -> Outcome<usize> {
        self.with_ledger(|ledger| ledger.total_borrowed())
            .map_or_else(|reason| reason.into(), Outcome::success)
    }

    /// Where `isbn` sits in the lending lifecycle.
    pub fn state_of(&self, isbn: &Isbn) -> Outcome<BookState> {
        let ledger = match self.lock_ledger() {
            Ok(ledger) => ledger,
            Err(reason) => return reason.into(),
        };

        let borrowed = ledger.is_borrowed(isbn);
        self.inventory
            .with_inventory(|store| store.find(isbn).is_some())
            .map_or_else(|reason| reason.into(), |in_inventory| {
                Outcome::success(BookState::from_flags(in_inventory, borrowed))
            })
    }

    /// Snapshot of current loans, ordered by ISBN.
    pub fn loans(&self) -> Outcome<Vec<Loan>> {
        self.with_ledger(|ledger| ledger.loans())
            .map_or_else(|reason| reason.into(), Outcome::success)
    }

    fn with_ledger<F, R>(&self, f: F) -> Result<R, FailureReason>
    where
        F: FnOnce(&mut BorrowingLedger<SharedInventory>) -> R,
    {
        let mut ledger = self.lock_ledger()?;
        Ok(f(&mut ledger))
    }

    fn lock_ledger(&self) -> Result<MutexGuard<'_, BorrowingLedger<SharedInventory>>, FailureReason> {
        self.ledger.lock().map_err(|_| {
            error!("Ledger mutex poisoned");
            FailureReason::LockPoisoned {
                resource: "Ledger".to_string(),
            }
        })
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(name: &str, isbn: &str) -> Book {
        Book::from_raw_isbn(name, "Tester", isbn).unwrap()
    }

    fn isbn(raw: &str) -> Isbn {
        Isbn::new(raw).unwrap()
    }

    #[test]
    fn test_state_machine_walk() {
        let library = Library::new();
        let id = isbn("0123456789123");

        assert_eq!(library.state_of(&id), Outcome::Success(BookState::NotInLibrary));

        assert!(library.add_book(book("Test", "0123456789123")).is_success());
        assert_eq!(library.state_of(&id), Outcome::Success(BookState::Available));

        assert!(library.borrow_book(&id).is_success());
        assert_eq!(library.state_of(&id), Outcome::Success(BookState::Borrowed));

        assert!(library.return_book(&id).is_success());
        assert_eq!(library.state_of(&id), Outcome::Success(BookState::Available));

        assert!(library.remove_by_isbn(&id).is_success());
        assert_eq!(library.state_of(&id), Outcome::Success(BookState::NotInLibrary));
    }

    #[test]
    fn test_borrowed_book_cannot_be_removed() {
        let library = Library::new();
        let test_book = book("Test", "1234567890123");
        let id = test_book.isbn().clone();
        assert!(library.add_book(test_book.clone()).is_success());
        assert!(library.borrow_book(&id).is_success());

        let refused = library.remove_book(&test_book);

        assert_eq!(refused.error_message(), Some("Book is currently borrowed."));
        assert_eq!(library.count(), Outcome::Success(1));
        assert_eq!(library.total_borrowed(), Outcome::Success(1));

        assert!(library.return_book(&id).is_success());
        assert!(library.remove_book(&test_book).is_success());
        assert_eq!(library.count(), Outcome::Success(0));
    }

    #[test]
    fn test_seeded_library_starts_with_nothing_borrowed() {
        let store = InventoryStore::from_books(vec![
            book("1984", "1234567890123"),
            book("Brave New World", "9876543210987"),
        ]);
        let library = Library::from_store(store);

        assert_eq!(library.count(), Outcome::Success(2));
        assert_eq!(library.total_borrowed(), Outcome::Success(0));
        assert_eq!(library.loans(), Outcome::Success(Vec::new()));
        assert_eq!(
            library.is_available(&isbn("9876543210987")),
            Outcome::Success(true)
        );
    }

    #[test]
    fn test_inventory_reads_see_library_writes() {
        let library = Library::default();
        assert!(library.add_book(book("Dune", "9780441013593")).is_success());

        let names: Vec<String> = library
            .with_inventory(|store| store.books().map(|b| b.name().to_string()).collect())
            .unwrap();
        assert_eq!(names, vec!["Dune".to_string()]);

        assert!(library.borrow_book(&isbn("9780441013593")).is_success());
    }

    #[test]
    fn test_no_removal_path_drops_a_borrowed_book() {
        let library = Library::new();
        let original = book("Test", "1234567890123");
        let lookalike = Book::from_raw_isbn("Other", "Someone Else", "1234567890123").unwrap();
        let id = original.isbn().clone();
        assert!(library.add_book(original.clone()).is_success());
        assert!(library.borrow_book(&id).is_success());

        for refused in [
            library.remove_book(&original),
            library.remove_book(&lookalike),
            library.remove_by_isbn(&id),
        ] {
            assert_eq!(refused.error_message(), Some("Book is currently borrowed."));
        }

        assert_eq!(
            library.with_inventory(|store| store.book_exists(&original)),
            Ok(Outcome::Success(true))
        );
        assert_eq!(library.state_of(&id), Outcome::Success(BookState::Borrowed));

        assert!(library.return_book(&id).is_success());
        assert_eq!(library.state_of(&id), Outcome::Success(BookState::Available));
        assert_eq!(library.total_borrowed(), Outcome::Success(0));
    }

    #[test]
    fn test_poisoned_ledger_lock_reports_failure() {
        let library = Library::new();
        let id = isbn("1234567890123");
        assert!(library.add_book(book("Test", "1234567890123")).is_success());

        std::thread::scope(|scope| {
            let holder = scope.spawn(|| library.with_ledger(|_| panic!("holder panicked")));
            assert!(holder.join().is_err());
        });

        let poisoned = Some("Ledger lock poisoned");
        assert_eq!(library.borrow_book(&id).error_message(), poisoned);
        assert_eq!(library.return_book(&id).error_message(), poisoned);
        assert_eq!(library.remove_by_isbn(&id).error_message(), poisoned);
        assert_eq!(library.is_available(&id).error_message(), poisoned);
        assert_eq!(library.total_borrowed().error_message(), poisoned);
        assert_eq!(library.state_of(&id).error_message(), poisoned);

        // The inventory has its own lock and stays usable.
        assert_eq!(library.count(), Outcome::Success(1));
        assert!(library.add_book(book("Dune", "9780441013593")).is_success());
    }
}

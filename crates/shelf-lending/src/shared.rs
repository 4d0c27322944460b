//! # Shared Inventory
//!
//! A cloneable, thread-safe handle to one [`InventoryStore`].
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>`:
//! 1. Several owners need the same inventory (the host and a ledger)
//! 2. Only one caller may touch the collection at a time
//!
//! One mutex guards the whole collection; there is no finer-grained locking.

use std::sync::{Arc, Mutex, MutexGuard};

use shelf_core::{FailureReason, Isbn, Outcome};
use tracing::error;

use crate::availability::AvailabilityChecker;
use crate::store::inventory::InventoryStore;

/// Lock-guarded inventory, usable as a ledger's [`AvailabilityChecker`].
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    store: Arc<Mutex<InventoryStore>>,
}

impl SharedInventory {
    pub fn new(store: InventoryStore) -> Self {
        SharedInventory {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the inventory.
    ///
    /// ## Usage
    /// ```rust
    /// use shelf_lending::{InventoryStore, SharedInventory};
    ///
    /// let shared = SharedInventory::new(InventoryStore::new());
    /// assert_eq!(shared.with_inventory(|store| store.count()), Ok(0));
    /// ```
    pub fn with_inventory<F, R>(&self, f: F) -> Result<R, FailureReason>
    where
        F: FnOnce(&InventoryStore) -> R,
    {
        let store = self.lock()?;
        Ok(f(&store))
    }

    /// Executes a function with write access to the inventory.
    pub fn with_inventory_mut<F, R>(&self, f: F) -> Result<R, FailureReason>
    where
        F: FnOnce(&mut InventoryStore) -> R,
    {
        let mut store = self.lock()?;
        Ok(f(&mut store))
    }

    fn lock(&self) -> Result<MutexGuard<'_, InventoryStore>, FailureReason> {
        self.store.lock().map_err(|_| {
            error!("Inventory mutex poisoned");
            FailureReason::LockPoisoned {
                resource: "Inventory".to_string(),
            }
        })
    }
}

impl AvailabilityChecker for SharedInventory {
    fn isbn_exists(&self, isbn: &Isbn) -> Outcome<bool> {
        self.with_inventory(|store| store.isbn_exists(isbn))
            .unwrap_or_else(|reason| reason.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ledger::BorrowingLedger;
    use shelf_core::Book;
    use std::thread;

    fn isbn(raw: &str) -> Isbn {
        Isbn::new(raw).unwrap()
    }

    fn poison(shared: &SharedInventory) {
        let handle = shared.clone();
        let result = thread::spawn(move || {
            let _ = handle.with_inventory_mut(|_| panic!("holder panicked"));
        })
        .join();
        assert!(result.is_err());
    }

    #[test]
    fn test_clones_share_one_store() {
        let shared = SharedInventory::default();
        let other = shared.clone();

        let added = other
            .with_inventory_mut(|store| store.add("1984", "George Orwell", "1234567890123"))
            .unwrap()
            .unwrap();
        assert!(added.is_success());

        assert_eq!(shared.with_inventory(InventoryStore::count), Ok(1));
        assert_eq!(
            shared.isbn_exists(&isbn("1234567890123")),
            Outcome::Success(true)
        );
    }

    #[test]
    fn test_ledger_sees_books_added_later() {
        let shared = SharedInventory::default();
        let mut ledger = BorrowingLedger::new(shared.clone());
        let id = isbn("9876543210987");

        assert!(ledger.borrow_book(&id).is_failure());

        let book = Book::new("Brave New World", "Aldous Huxley", id.clone()).unwrap();
        assert!(shared
            .with_inventory_mut(|store| store.add_book(book))
            .unwrap()
            .is_success());

        assert!(ledger.borrow_book(&id).is_success());
    }

    #[test]
    fn test_poisoned_lock_reports_failure() {
        let shared = SharedInventory::default();
        poison(&shared);

        assert_eq!(
            shared.with_inventory(InventoryStore::count),
            Err(FailureReason::LockPoisoned {
                resource: "Inventory".to_string()
            })
        );

        let mut ledger = BorrowingLedger::new(shared);
        assert_eq!(
            ledger.borrow_book(&isbn("1234567890123")).error_message(),
            Some("Failed to borrow book: Inventory lock poisoned")
        );
    }
}

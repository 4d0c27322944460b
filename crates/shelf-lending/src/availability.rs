//! # Availability Capability
//!
//! The narrow surface the borrowing ledger needs from an inventory.
//!
//! ## Capability Boundary
//! ```text
//! ┌──────────────────────┐   isbn_exists(&Isbn)   ┌──────────────────────┐
//! │   BorrowingLedger    │ ─────────────────────► │  AvailabilityChecker │
//! │  (owns borrowed set) │ ◄───────────────────── │  InventoryStore,     │
//! └──────────────────────┘     Outcome<bool>      │  SharedInventory,    │
//!                                                 │  test fakes...       │
//!                                                 └──────────────────────┘
//! ```
//! The ledger only reads through this trait and never mutates the inventory.

use std::sync::Arc;

use shelf_core::{Isbn, Outcome};

/// Answers whether an ISBN is present in some inventory.
///
/// A failed query (store unavailable, lock poisoned, ...) is reported as an
/// `Outcome::Failure`; a successful query reports presence as the value.
pub trait AvailabilityChecker {
    fn isbn_exists(&self, isbn: &Isbn) -> Outcome<bool>;
}

impl<T: AvailabilityChecker + ?Sized> AvailabilityChecker for &T {
    fn isbn_exists(&self, isbn: &Isbn) -> Outcome<bool> {
        (**self).isbn_exists(isbn)
    }
}

impl<T: AvailabilityChecker + ?Sized> AvailabilityChecker for Box<T> {
    fn isbn_exists(&self, isbn: &Isbn) -> Outcome<bool> {
        (**self).isbn_exists(isbn)
    }
}

impl<T: AvailabilityChecker + ?Sized> AvailabilityChecker for Arc<T> {
    fn isbn_exists(&self, isbn: &Isbn) -> Outcome<bool> {
        (**self).isbn_exists(isbn)
    }
}

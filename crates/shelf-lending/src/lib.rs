//! # shelf-lending: Inventory and Borrowing Layer for Shelf
//!
//! This crate owns the mutable state of a single-site lending library:
//! which books exist, and which of them are checked out. Everything is kept
//! in memory.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Data Flow                                  │
//! │                                                                         │
//! │  Host (shelf-demo, tests, ...)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shelf-lending (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐  capability  ┌──────────────────────┐     │   │
//! │  │   │ InventoryStore │◄─────────────│ BorrowingLedger<C>   │     │   │
//! │  │   │ (store/)       │  isbn_exists │ (store/)             │     │   │
//! │  │   └───────┬────────┘              └──────────┬───────────┘     │   │
//! │  │           │ Arc<Mutex<..>>                   │ Mutex<..>       │   │
//! │  │   ┌───────▼────────┐              ┌──────────▼───────────┐     │   │
//! │  │   │SharedInventory │◄─────────────│      Library         │     │   │
//! │  │   │ (shared.rs)    │              │   (library.rs)       │     │   │
//! │  │   └────────────────┘              └──────────────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  shelf-core (Isbn, Book, Outcome)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`availability`] - The `AvailabilityChecker` capability trait
//! - [`store`] - `InventoryStore` and `BorrowingLedger`
//! - [`shared`] - Lock-guarded inventory handle
//! - [`library`] - Composition root for concurrent hosts
//!
//! ## Usage
//!
//! ```rust
//! use shelf_core::Isbn;
//! use shelf_lending::{BorrowingLedger, InventoryStore};
//!
//! let mut store = InventoryStore::new();
//! assert!(store.add("1984", "George Orwell", "1234567890123").unwrap().is_success());
//!
//! let mut ledger = BorrowingLedger::new(&store);
//! let isbn = Isbn::new("1234567890123").unwrap();
//!
//! assert!(ledger.borrow_book(&isbn).is_success());
//! assert!(ledger.borrow_book(&isbn).is_failure());
//! assert_eq!(ledger.total_borrowed(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod library;
pub mod shared;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use availability::AvailabilityChecker;
pub use library::Library;
pub use shared::SharedInventory;

// Store re-exports for convenience
pub use store::inventory::InventoryStore;
pub use store::ledger::{BorrowingLedger, Loan};

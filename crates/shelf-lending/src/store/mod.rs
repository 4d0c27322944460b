//! # Store Module
//!
//! The two single-owner stores of the lending layer.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  InventoryStore                       BorrowingLedger<C>               │
//! │  ├── owns: BTreeMap<Isbn, Book>       ├── owns: HashMap<Isbn, When>    │
//! │  ├── add_book / add                   ├── borrow_book                  │
//! │  ├── remove_book / remove_by_isbn     ├── return_book                  │
//! │  ├── book_exists / isbn_exists        ├── is_available                 │
//! │  └── count                            └── total_borrowed               │
//! │         ▲                                      │                       │
//! │         └──── AvailabilityChecker (read only) ─┘                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Stores
//!
//! - [`InventoryStore`](inventory::InventoryStore) - Books keyed by ISBN
//! - [`BorrowingLedger`](ledger::BorrowingLedger) - Borrowed ISBNs

pub mod inventory;
pub mod ledger;

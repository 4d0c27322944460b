//! # shelf-core: Value Model for Shelf
//!
//! This crate holds the values every other Shelf crate speaks in. It has
//! zero I/O dependencies and does not log.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shelf Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shelf-demo (console)                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            shelf-lending (InventoryStore, BorrowingLedger)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shelf-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │   isbn   │  │   book   │  │ outcome  │  │ error/valid. │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`isbn`] - The 13-digit identifier
//! - [`book`] - The catalogue entity, identified by its ISBN
//! - [`outcome`] - Success/failure envelope for expected failures
//! - [`state`] - Per-ISBN lifecycle states
//! - [`error`] - Construction errors and failure reasons
//! - [`validation`] - Input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::{Book, Isbn};
//!
//! let book = Book::from_raw_isbn("1984", "George Orwell", "1234567890123").unwrap();
//! let same = Book::new("Nineteen Eighty-Four", "Orwell", Isbn::new("1234567890123").unwrap()).unwrap();
//!
//! // Identity is the ISBN alone
//! assert_eq!(book, same);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod book;
pub mod error;
pub mod isbn;
pub mod outcome;
pub mod state;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use book::Book;
pub use error::{
    CoreError, CoreResult, FailureReason, OperationFailure, ValidationError, ValidationResult,
};
pub use isbn::Isbn;
pub use outcome::Outcome;
pub use state::BookState;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of characters in a valid ISBN.
pub const ISBN_LENGTH: usize = 13;

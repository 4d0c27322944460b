//! # Error Types
//!
//! Error vocabulary for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Construction (returned as Err)                                        │
//! │  └── ValidationError  - Isbn / Book input that cannot become a value   │
//! │                                                                         │
//! │  Operations (carried inside Outcome::Failure, never Err)               │
//! │  └── FailureReason    - duplicate add, missing book, double borrow...  │
//! │                                                                         │
//! │  Host boundary                                                         │
//! │  ├── OperationFailure - Outcome::into_result() error, for `?`          │
//! │  └── CoreError        - umbrella over both taxonomies                  │
//! │                                                                         │
//! │  Flow: FailureReason → Outcome → OperationFailure → CoreError → Host   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, expected length, etc.)
//! 3. The `Display` text of a [`FailureReason`] IS the user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while constructing an [`Isbn`](crate::Isbn)
/// or a [`Book`](crate::Book).
///
/// These abort construction: malformed input never becomes a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value does not have the exact required length.
    #[error("{field} is malformed: expected {expected} characters, got {actual}")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid format (e.g. non-digit characters in an ISBN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Failure Reason
// =============================================================================

/// Expected failures of inventory and ledger operations.
///
/// A `FailureReason` is converted into an [`Outcome`](crate::Outcome) failure;
/// its `Display` text becomes the outcome's error message.
///
/// ## State Machine Context
/// ```text
///                 add_book                 borrow_book
///  NotInLibrary ───────────► Available ───────────────► Borrowed
///       ▲                     │    ▲                       │
///       └─────────────────────┘    └───────────────────────┘
///          remove_by_isbn                return_book
///
///  AlreadyExists     add_book on Available
///  DoesNotExist      remove / borrow / return on NotInLibrary
///  AlreadyBorrowed   borrow_book on Borrowed
///  NotBorrowed       return_book on Available
///  CurrentlyBorrowed remove on Borrowed (Library only)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("Book already exists in the library.")]
    AlreadyExists,

    #[error("Book does not exist in the library.")]
    DoesNotExist,

    #[error("Book was already borrowed.")]
    AlreadyBorrowed,

    #[error("Book was not borrowed.")]
    NotBorrowed,

    /// Removal refused because the book is checked out.
    #[error("Book is currently borrowed.")]
    CurrentlyBorrowed,

    /// A shared store's mutex was poisoned by a panicking holder.
    #[error("{resource} lock poisoned")]
    LockPoisoned { resource: String },
}

// =============================================================================
// Operation Failure
// =============================================================================

/// A failed [`Outcome`](crate::Outcome) turned into a standard error.
///
/// Produced by [`Outcome::into_result`](crate::Outcome::into_result) so hosts
/// can bubble expected failures with `?` when they choose to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct OperationFailure {
    pub message: String,
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for hosts that handle both taxonomies in one place.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An operation reported a failure outcome.
    #[error("Operation failed: {0}")]
    Operation(#[from] OperationFailure),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for construction and validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Outcome Module
//!
//! The success/failure envelope returned by every inventory and ledger
//! operation.
//!
//! ## Why Not `Result`?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two kinds of "no"                                                      │
//! │                                                                         │
//! │  Isbn::new("12ab")        → Err(ValidationError)                       │
//! │     the input can never become a value                                 │
//! │                                                                         │
//! │  ledger.borrow_book(id)   → Outcome::Failure("Book was already ...")   │
//! │     a normal answer about the current state; callers branch on it      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! A failure never carries a value, and there is no implicit conversion to
//! `bool`: use [`Outcome::is_success`].
//!
//! ## Usage
//! ```rust
//! use shelf_core::{FailureReason, Outcome};
//!
//! let ok: Outcome<bool> = Outcome::success(true);
//! assert_eq!(ok.value(), Some(&true));
//!
//! let failed: Outcome = FailureReason::NotBorrowed.into();
//! assert!(failed.is_failure());
//! assert_eq!(failed.error_message(), Some("Book was not borrowed."));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FailureReason, OperationFailure};

/// Result of an operation whose failure is an expected, reportable condition.
#[must_use = "an Outcome may be a failure that should be reported"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome<T = ()> {
    /// The operation succeeded and produced a value.
    Success(T),
    /// The operation was refused; the message is human-readable.
    Failure(String),
}

impl Outcome {
    /// A unit success for operations that produce no value.
    #[inline]
    pub const fn completed() -> Self {
        Outcome::Success(())
    }
}

impl<T> Outcome<T> {
    #[inline]
    pub const fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The value of a success; `None` for a failure.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The message of a failure; `None` for a success.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }

    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Prefixes a failure message with caller context. Successes pass through.
    ///
    /// The inner message is kept verbatim after the prefix.
    pub fn with_context(self, prefix: &str) -> Self {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(message) => Outcome::Failure(format!("{prefix}{message}")),
        }
    }

    /// Converts into a standard `Result` so hosts can use `?`.
    pub fn into_result(self) -> Result<T, OperationFailure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(OperationFailure { message }),
        }
    }
}

impl<T> From<FailureReason> for Outcome<T> {
    fn from(reason: FailureReason) -> Self {
        Outcome::Failure(reason.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_value() {
        let outcome = Outcome::success(42);
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&42));
        assert_eq!(outcome.error_message(), None);
        assert_eq!(outcome.into_value(), Some(42));
    }

    #[test]
    fn test_failure_never_carries_value() {
        let outcome: Outcome<bool> = Outcome::failure("nope");
        assert!(outcome.is_failure());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.error_message(), Some("nope"));
    }

    #[test]
    fn test_completed_is_unit_success() {
        assert_eq!(Outcome::completed(), Outcome::Success(()));
    }

    #[test]
    fn test_with_context_prefixes_failures_only() {
        let failed: Outcome<bool> = Outcome::failure("store offline");
        assert_eq!(
            failed.with_context("Failed to borrow book: ").error_message(),
            Some("Failed to borrow book: store offline")
        );

        let ok = Outcome::success(true).with_context("ignored: ");
        assert_eq!(ok, Outcome::Success(true));
    }

    #[test]
    fn test_map_and_into_result() {
        let doubled = Outcome::success(2).map(|n| n * 2);
        assert_eq!(doubled.into_result(), Ok(4));

        let failed: Outcome<i32> = FailureReason::AlreadyBorrowed.into();
        let err = failed.map(|n| n * 2).into_result().unwrap_err();
        assert_eq!(err.to_string(), "Book was already borrowed.");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Outcome::success(true)).unwrap();
        assert_eq!(json, r#"{"success":true}"#);

        let failed: Outcome = FailureReason::DoesNotExist.into();
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(json, r#"{"failure":"Book does not exist in the library."}"#);
    }
}

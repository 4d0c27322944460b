//! # Validation Module
//!
//! Input validation rules shared by [`Isbn`](crate::Isbn) and
//! [`Book`](crate::Book) construction.
//!
//! ## Usage
//! ```rust
//! use shelf_core::validation::{validate_isbn, validate_required};
//!
//! assert!(validate_isbn("9780451524935").is_ok());
//! assert!(validate_required("author", "   ").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::ISBN_LENGTH;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a descriptive field is not blank.
///
/// ## Rules
/// - Must not be empty after trimming whitespace
///
/// The value itself is not modified; callers store it as given.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(())
}

/// Validates a raw ISBN string.
///
/// ## Rules
/// - Must not be empty
/// - Must be exactly 13 characters
/// - Must contain only ASCII digits `0`-`9`
///
/// No checksum is verified.
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_isbn;
///
/// assert!(validate_isbn("1234567890123").is_ok());
/// assert!(validate_isbn("123456789012").is_err());
/// assert!(validate_isbn("123456789012X").is_err());
/// ```
pub fn validate_isbn(raw: &str) -> ValidationResult<()> {
    if raw.is_empty() {
        return Err(ValidationError::required("isbn"));
    }

    let length = raw.chars().count();
    if length != ISBN_LENGTH {
        return Err(ValidationError::InvalidLength {
            field: "isbn".to_string(),
            expected: ISBN_LENGTH,
            actual: length,
        });
    }

    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: format!("contains non-numerical characters: {raw}"),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required("name", "1984").is_ok());
        assert!(validate_required("name", "  padded  ").is_ok());

        assert!(validate_required("name", "").is_err());
        assert!(validate_required("name", "   ").is_err());
        assert!(validate_required("name", "\t\n").is_err());
    }

    #[test]
    fn test_validate_isbn() {
        assert!(validate_isbn("0000000000000").is_ok());
        assert!(validate_isbn("9781728353227").is_ok());

        assert_eq!(
            validate_isbn(""),
            Err(ValidationError::required("isbn"))
        );
        assert!(matches!(
            validate_isbn("97817283532"),
            Err(ValidationError::InvalidLength { actual: 11, .. })
        ));
        assert!(matches!(
            validate_isbn("97817283532270"),
            Err(ValidationError::InvalidLength { actual: 14, .. })
        ));
        assert!(matches!(
            validate_isbn("978-172835322"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_isbn("978172835322 "),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_isbn_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        let raw = "١٢٣٤٥٦٧٨٩٠١٢٣";
        assert_eq!(raw.chars().count(), 13);
        assert!(matches!(
            validate_isbn(raw),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}

//! # Error Types
//!
//! Domain-specific error types for spark-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  spark-core errors (this file)                                      │
//! │  ├── CoreError        - Cart business-rule violations               │
//! │  └── ValidationError  - Product intake validation failures          │
//! │                                                                     │
//! │  spark-store errors (separate crate)                                │
//! │  └── StoreError       - Storage medium failures                     │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → Notice/UI         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Removing or re-quantifying an unknown line id is a silent no-op, not an
//! error: the cart still recomputes and persists, and no signal fires. Only
//! checkout on an empty cart produces a user-visible rejection.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart business-rule errors.
///
/// These should be caught and translated to user-friendly notices.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with zero items.
    ///
    /// ## When This Occurs
    /// - User clicks the checkout button while the cart panel shows the
    ///   empty-state placeholder
    ///
    /// ## User Workflow
    /// ```text
    /// Checkout click (cart empty)
    ///      │
    ///      ▼
    /// EmptyCheckout
    ///      │
    ///      ▼
    /// UI shows: "Your cart is empty!" (no state change, nothing persisted)
    /// ```
    #[error("Your cart is empty!")]
    EmptyCheckout,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product intake validation errors.
///
/// These occur when the page scraper hands the cart a malformed product.
/// Used for early validation before any cart mutation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_checkout_message() {
        // The error message doubles as the user-facing rejection text.
        assert_eq!(CoreError::EmptyCheckout.to_string(), "Your cart is empty!");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

//! # Error Types
//!
//! Domain-specific error types for bookstall-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstall-core errors (this file)                                      │
//! │  ├── CoreError        - Rule violations of the store operations         │
//! │  └── ValidationError  - Missing or malformed operator input             │
//! │                                                                         │
//! │  Terminal app errors                                                    │
//! │  └── ApiError         - What the operator sees (code + message)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → blocking notice         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. The operator corrects the input and retries.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the inventory, sales and loan operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input was missing or malformed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A sale referenced a book id the inventory does not hold.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Requested more copies than are on hand. No partial sale is made.
    ///
    /// ## User Workflow
    /// ```text
    /// Sell "Nosso Lar" (qty: 20)
    ///      │
    ///      ▼
    /// Check stock: available=15
    ///      │
    ///      ▼
    /// InsufficientStock { title: "Nosso Lar", available: 15, requested: 20 }
    /// ```
    #[error("Insufficient stock for {title}: available {available}, requested {requested}")]
    InsufficientStock {
        title: String,
        available: u32,
        requested: u32,
    },

    /// A loan was requested for a book that is missing or out of stock.
    #[error("Book {book_id} is not available for loan")]
    Unavailable { book_id: String },

    /// A return referenced a loan id that was never recorded.
    #[error("Loan not found: {0}")]
    LoanNotFound(String),

    /// The loan was already returned. Returning it again would put a
    /// phantom copy back on the shelf.
    #[error("Loan {loan_id} was already returned")]
    AlreadyReturned { loan_id: String },

    /// A total or stock count would not fit its integer type.
    #[error("{what} is too large to record")]
    Overflow { what: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Text does not parse as the expected kind of value.
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

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

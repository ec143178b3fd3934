//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bookstall                              │
//! │                                                                         │
//! │  Shell line "sell 1 40"                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  → Result<T, ApiError>                         │  │
//! │  │         │                                                        │  │
//! │  │  Store rule broken? ── CoreError::InsufficientStock ──┐          │  │
//! │  │         │                                             ▼          │  │
//! │  │  Bad input?  ───────── CoreError::Validation ─────► ApiError     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  "Error: Insufficient stock for Nosso Lar: 15 available, 40 requested"  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The error is a blocking notice; the shell keeps running.

use bookstall_core::CoreError;
use serde::Serialize;

/// Error returned from commands: a machine-readable code plus the message
/// shown to the operator.
///
/// ```json
/// { "code": "INSUFFICIENT_STOCK", "message": "Insufficient stock for ..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Book or loan id unknown
    NotFound,

    /// Missing or malformed field
    ValidationError,

    /// Sale quantity exceeds stock
    InsufficientStock,

    /// Loan requested for a missing or sold-out book
    Unavailable,

    /// Loan already returned
    AlreadyReturned,

    /// Anything else (I/O, serialization)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::BookNotFound(id) => ApiError::not_found("Book", &id),
            CoreError::LoanNotFound(id) => ApiError::not_found("Loan", &id),
            CoreError::InsufficientStock {
                title,
                available,
                requested,
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Insufficient stock for {}: {} available, {} requested",
                    title, available, requested
                ),
            ),
            CoreError::Unavailable { .. } => {
                ApiError::new(ErrorCode::Unavailable, "Book is not available in stock")
            }
            CoreError::AlreadyReturned { .. } => {
                ApiError::new(ErrorCode::AlreadyReturned, "This loan was already returned")
            }
            CoreError::Overflow { what } => {
                ApiError::validation(format!("The {} is too large to record", what))
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization failed: {}", err);
        ApiError::internal("Could not serialize data")
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::internal(format!("I/O error: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

//! # bookstall-core: Pure Domain Logic for Bookstall
//!
//! This crate holds the domain model of a small bookstore that also lends
//! books: the records it keeps and the rules for reading operator input.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstall Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal front end                           │   │
//! │  │        Inventory view ──► Sales view ──► Loans view             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bookstall-store                              │   │
//! │  │      add_book, sell, create_loan, return_loan, queries          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookstall-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │   Book    │  │   Money   │  │ CoreError │  │  parsing  │  │   │
//! │  │   │ Sale Loan │  │           │  │           │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Book, Sale, Loan)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Parsing and validation of operator input
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstall_core::money::Money;
//! use bookstall_core::validation::parse_price;
//!
//! let price = parse_price("25.00").unwrap();
//! assert_eq!(price, Money::from_cents(2500));
//!
//! let total = price.checked_mul_quantity(3).unwrap();
//! assert_eq!(total.to_string(), "75.00");
//! ```

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

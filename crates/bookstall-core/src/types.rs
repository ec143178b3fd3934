//! # Domain Types
//!
//! The three records the store keeps.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │      Sale       │   │      Loan       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  book_id        │   │  book_id        │──►    │
//! │  │  title, author  │   │  title_snapshot │   │  title_snapshot │       │
//! │  │  price_cents    │   │  quantity       │   │  borrower_*     │       │
//! │  │  quantity       │   │  total_cents    │   │  returned_at?   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Sale: immutable once created                                           │
//! │  Loan: Active ──return──► Returned (terminal)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Sales and loans copy the book title at transaction time. History keeps
//! showing what was sold or lent even if the catalog entry changes later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Book
// =============================================================================

/// A title held in inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Book {
    /// Unique identifier, assigned when the book is stocked.
    pub id: String,

    pub title: String,

    pub author: String,

    /// Unit price in cents. Never negative.
    pub price_cents: i64,

    /// Copies on hand. Sales and loans take from it, returns give back.
    pub quantity: u32,

    /// When the book was stocked.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Book {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if at least one copy is on hand.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Checks if `quantity` copies can be taken without going negative.
    #[inline]
    pub fn can_supply(&self, quantity: u32) -> bool {
        quantity <= self.quantity
    }
}

// =============================================================================
// Sale
// =============================================================================

/// An immutable record of a completed sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: String,
    pub book_id: String,
    /// Book title at time of sale (frozen).
    pub title_snapshot: String,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Copies sold. Always > 0.
    pub quantity: u32,
    /// unit_price × quantity, computed once.
    pub total_cents: i64,
    #[ts(as = "String")]
    pub sold_at: DateTime<Utc>,
}

impl Sale {
    /// Freezes the book's title and price into a new sale record.
    ///
    /// Stock checks are the caller's job; this only builds the record.
    /// Fails with `Overflow` when `price × quantity` does not fit in cents.
    pub fn from_book(
        id: String,
        book: &Book,
        quantity: u32,
        sold_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        let total = book
            .price()
            .checked_mul_quantity(quantity)
            .ok_or_else(|| CoreError::Overflow {
                what: "sale total".to_string(),
            })?;

        Ok(Sale {
            id,
            book_id: book.id.clone(),
            title_snapshot: book.title.clone(),
            unit_price_cents: book.price_cents,
            quantity,
            total_cents: total.cents(),
            sold_at,
        })
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Loan
// =============================================================================

/// Where a loan is in its lifecycle.
///
/// ```text
///   create_loan            return_loan
///  ────────────► Active ──────────────► Returned
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// The copy is with the borrower.
    Active,
    /// The copy is back on the shelf. Terminal.
    Returned,
}

/// One physical copy lent to a customer.
///
/// The returned flag is not stored separately: a loan is returned exactly
/// when `returned_at` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Loan {
    pub id: String,
    pub book_id: String,
    /// Book title at time of lending (frozen).
    pub title_snapshot: String,
    pub borrower_name: String,
    pub borrower_phone: String,
    #[ts(as = "String")]
    pub loaned_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// Starts a new active loan of one copy of `book`.
    pub fn lend(
        id: String,
        book: &Book,
        borrower_name: String,
        borrower_phone: String,
        loaned_at: DateTime<Utc>,
    ) -> Self {
        Loan {
            id,
            book_id: book.id.clone(),
            title_snapshot: book.title.clone(),
            borrower_name,
            borrower_phone,
            loaned_at,
            returned_at: None,
        }
    }

    #[inline]
    pub fn is_returned(&self) -> bool {
        self.returned_at.is_some()
    }

    #[inline]
    pub fn status(&self) -> LoanStatus {
        if self.is_returned() {
            LoanStatus::Returned
        } else {
            LoanStatus::Active
        }
    }

    /// Moves the loan from Active to Returned.
    ///
    /// ## Errors
    /// `AlreadyReturned` if the loan is already in its terminal state; the
    /// original return date is kept.
    pub fn mark_returned(&mut self, at: DateTime<Utc>) -> CoreResult<()> {
        if self.is_returned() {
            return Err(CoreError::AlreadyReturned {
                loan_id: self.id.clone(),
            });
        }
        self.returned_at = Some(at);
        Ok(())
    }
}

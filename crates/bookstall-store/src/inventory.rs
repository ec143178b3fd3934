//! # Inventory Ledger
//!
//! Stocking new titles and answering "what can be sold or lent right now".
//!
//! ## Add Book Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NewBook { title, author, price: "25.00", quantity: "10" }              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  required_text(title), required_text(author)                            │
//! │  parse_price(price), parse_stock_quantity(quantity)                     │
//! │       │                                                                 │
//! │       ├── any failure → ValidationError, collection untouched           │
//! │       ▼                                                                 │
//! │  Book { id: next_id(), ... } appended                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use bookstall_core::validation::{parse_price, parse_stock_quantity, required_text};
use bookstall_core::{Book, CoreResult};

use crate::store::Store;

/// The raw stocking form, as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: String,
    pub quantity: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        NewBook {
            title: title.into(),
            author: author.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

impl Store {
    /// Stocks a new title.
    ///
    /// ## Errors
    /// `Validation` when any field is empty, or when price or quantity do
    /// not parse as non-negative numbers. The collection is left unchanged.
    pub fn add_book(&mut self, form: NewBook) -> CoreResult<Book> {
        debug!(title = %form.title, "Adding book");

        let title = required_text("title", &form.title)?;
        let author = required_text("author", &form.author)?;
        let price = parse_price(&form.price)?;
        let quantity = parse_stock_quantity(&form.quantity)?;

        let book = Book {
            id: self.next_id(),
            title,
            author,
            price_cents: price.cents(),
            quantity,
            created_at: Utc::now(),
        };

        Arc::make_mut(&mut self.state.books).push(book.clone());

        info!(book_id = %book.id, title = %book.title, price = %price, quantity, "Book stocked");
        Ok(book)
    }

    /// Books with at least one copy on hand, in stocking order.
    pub fn list_available(&self) -> impl Iterator<Item = &Book> + '_ {
        self.state.available_books()
    }
}

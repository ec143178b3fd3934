//! # Inventory Commands
//!
//! Stocking new titles and listing what is on the shelves.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bookstall_core::{Book, Money};
use bookstall_store::NewBook;

use crate::error::ApiError;
use crate::state::StoreState;

/// Book DTO for the views and the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price_cents: i64,
    pub quantity: u32,
    /// At least one copy on hand
    pub available: bool,
}

impl BookDto {
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

impl From<&Book> for BookDto {
    fn from(b: &Book) -> Self {
        BookDto {
            id: b.id.clone(),
            title: b.title.clone(),
            author: b.author.clone(),
            price_cents: b.price_cents,
            quantity: b.quantity,
            available: b.is_available(),
        }
    }
}

/// Stocks a new title from the raw add-form fields.
///
/// ## Arguments
/// * `title`, `author` - Required, trimmed
/// * `price` - Decimal text such as `25.00` or `25,5`
/// * `quantity` - Whole number of copies, `0` allowed
///
/// On any validation error the inventory is left untouched.
pub fn add_book(
    store: &StoreState,
    title: &str,
    author: &str,
    price: &str,
    quantity: &str,
) -> Result<BookDto, ApiError> {
    debug!(title = %title, price = %price, quantity = %quantity, "add_book");

    let form = NewBook::new(title, author, price, quantity);
    match store.with_store_mut(|s| s.add_book(form)) {
        Ok(book) => {
            info!(book_id = %book.id, title = %book.title, "Book stocked from shell");
            Ok(BookDto::from(&book))
        }
        Err(e) => {
            warn!(error = %e, "add_book rejected");
            Err(e.into())
        }
    }
}

/// All books in the order they were stocked, sold-out titles included.
pub fn list_books(store: &StoreState) -> Vec<BookDto> {
    store.snapshot().books().iter().map(BookDto::from).collect()
}

/// Books with at least one copy on hand, in stocking order.
///
/// The sales and loans screens number their selection lists from this.
pub fn list_available_books(store: &StoreState) -> Vec<BookDto> {
    store
        .snapshot()
        .available_books()
        .map(BookDto::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use bookstall_store::{SequentialIds, Store};

    fn empty_state() -> StoreState {
        StoreState::new(Store::with_ids(SequentialIds::new("t")))
    }

    #[test]
    fn test_add_book_returns_dto() {
        let state = empty_state();
        let book = add_book(&state, "  Nosso Lar ", "André Luiz", "20,00", "15").unwrap();

        assert_eq!(book.id, "t-1");
        assert_eq!(book.title, "Nosso Lar");
        assert_eq!(book.price(), Money::from_cents(2000));
        assert!(book.available);
        assert_eq!(list_books(&state), vec![book]);
    }

    #[test]
    fn test_add_book_rejects_bad_price() {
        let state = empty_state();
        let err = add_book(&state, "X", "Y", "abc", "1").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list_books(&state).is_empty());
    }

    #[test]
    fn test_add_book_accepts_any_non_negative_number() {
        let state = empty_state();

        let rounded = add_book(&state, "X", "Y", "12.345", "1").unwrap();
        assert_eq!(rounded.price_cents, 1235);

        let many = add_book(&state, "X", "Y", "10", "200000").unwrap();
        assert_eq!(many.quantity, 200_000);

        let pricey = add_book(&state, "X", "Y", "2000000", "1").unwrap();
        assert_eq!(pricey.price(), Money::from_cents(200_000_000));

        let long_title = "T".repeat(500);
        let long = add_book(&state, &long_title, "Y", "1", "1").unwrap();
        assert_eq!(long.title, long_title);
    }

    #[test]
    fn test_list_available_skips_sold_out() {
        let state = empty_state();
        add_book(&state, "A", "Author", "10", "0").unwrap();
        let b = add_book(&state, "B", "Author", "10", "2").unwrap();

        assert_eq!(list_books(&state).len(), 2);
        let available = list_available_books(&state);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, b.id);
    }
}

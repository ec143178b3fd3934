//! # Sales Engine
//!
//! Converts a quantity request against a book into a sale record and takes
//! the copies out of inventory in the same operation.
//!
//! ## Sell Flow
//! ```text
//! sell(book_id, 3)
//!      │
//!      ├── quantity == 0?           → Validation(MustBePositive)
//!      ├── unknown book?            → BookNotFound
//!      ├── 3 > quantity on hand?    → InsufficientStock (nothing changes)
//!      ├── price × 3 overflows?     → Overflow (nothing changes)
//!      ▼
//! Sale { total = price × 3 } appended to history
//! book.quantity -= 3
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use bookstall_core::validation::validate_sale_quantity;
use bookstall_core::{CoreError, CoreResult, Sale};

use crate::store::Store;

impl Store {
    /// Sells `quantity` copies of a book. No partial sale is ever made.
    ///
    /// Returns the recorded sale so the caller can confirm the total.
    pub fn sell(&mut self, book_id: &str, quantity: u32) -> CoreResult<Sale> {
        debug!(book_id = %book_id, quantity, "Selling book");

        validate_sale_quantity(quantity)?;

        let index = self
            .book_index(book_id)
            .ok_or_else(|| CoreError::BookNotFound(book_id.to_string()))?;
        let book = &self.state.books[index];

        if !book.can_supply(quantity) {
            return Err(CoreError::InsufficientStock {
                title: book.title.clone(),
                available: book.quantity,
                requested: quantity,
            });
        }

        let id = self.next_id();
        let sale = Sale::from_book(id, &self.state.books[index], quantity, Utc::now())?;

        Arc::make_mut(&mut self.state.books)[index].quantity -= quantity;
        Arc::make_mut(&mut self.state.sales).push(sale.clone());

        info!(
            sale_id = %sale.id,
            book_id = %sale.book_id,
            quantity,
            total = %sale.total(),
            "Sale recorded"
        );
        Ok(sale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NewBook, SequentialIds};
    use bookstall_core::{Money, ValidationError};

    fn store_with_book(quantity: &str) -> (Store, String) {
        let mut store = Store::with_ids(SequentialIds::new("rec"));
        let book = store
            .add_book(NewBook::new("O Evangelho", "Allan Kardec", "25.00", quantity))
            .unwrap();
        (store, book.id)
    }

    #[test]
    fn test_sell_decrements_stock_and_records_sale() {
        let (mut store, book_id) = store_with_book("10");

        let sale = store.sell(&book_id, 3).unwrap();

        assert_eq!(sale.total(), Money::from_cents(7500));
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.book_id, book_id);
        assert_eq!(sale.title_snapshot, "O Evangelho");
        assert_eq!(store.book(&book_id).unwrap().quantity, 7);
        assert_eq!(store.sales(), &[sale]);
    }

    #[test]
    fn test_sell_entire_stock() {
        let (mut store, book_id) = store_with_book("2");
        store.sell(&book_id, 2).unwrap();

        assert_eq!(store.book(&book_id).unwrap().quantity, 0);
        assert_eq!(store.list_available().count(), 0);
    }

    #[test]
    fn test_sell_more_than_stock_fails_without_changes() {
        let (mut store, book_id) = store_with_book("2");

        let err = store.sell(&book_id, 3).unwrap_err();

        assert_eq!(
            err,
            CoreError::InsufficientStock {
                title: "O Evangelho".to_string(),
                available: 2,
                requested: 3,
            }
        );
        assert_eq!(store.book(&book_id).unwrap().quantity, 2);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_sell_any_count_above_stock_is_insufficient() {
        let (mut store, book_id) = store_with_book("10");

        for requested in [11, 100_001, u32::MAX] {
            let err = store.sell(&book_id, requested).unwrap_err();
            assert_eq!(
                err,
                CoreError::InsufficientStock {
                    title: "O Evangelho".to_string(),
                    available: 10,
                    requested,
                }
            );
        }
        assert_eq!(store.book(&book_id).unwrap().quantity, 10);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_sell_large_stock_at_large_price() {
        let mut store = Store::with_ids(SequentialIds::new("rec"));
        let book = store
            .add_book(NewBook::new("Atlas", "Someone", "2000000", "4294967295"))
            .unwrap();

        let sale = store.sell(&book.id, u32::MAX).unwrap();

        assert_eq!(sale.total_cents, 200_000_000 * u32::MAX as i64);
        assert_eq!(store.book(&book.id).unwrap().quantity, 0);
    }

    #[test]
    fn test_sell_with_overflowing_total_changes_nothing() {
        let mut store = Store::with_ids(SequentialIds::new("rec"));
        let book = store
            .add_book(NewBook::new("Atlas", "Someone", "90000000000000000", "10"))
            .unwrap();

        let err = store.sell(&book.id, 2).unwrap_err();

        assert!(matches!(err, CoreError::Overflow { .. }));
        assert_eq!(store.book(&book.id).unwrap().quantity, 10);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_sell_zero_is_a_validation_error() {
        let (mut store, book_id) = store_with_book("2");
        let err = store.sell(&book_id, 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_sell_unknown_book() {
        let (mut store, _) = store_with_book("2");
        let err = store.sell("missing", 1).unwrap_err();
        assert_eq!(err, CoreError::BookNotFound("missing".to_string()));
    }

    #[test]
    fn test_sales_history_is_chronological() {
        let (mut store, book_id) = store_with_book("10");
        let first = store.sell(&book_id, 1).unwrap();
        let second = store.sell(&book_id, 4).unwrap();

        let ids: Vec<&str> = store.sales().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, [first.id.as_str(), second.id.as_str()]);
        assert_eq!(store.book(&book_id).unwrap().quantity, 5);
    }
}

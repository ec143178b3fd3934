//! # Sale Commands
//!
//! ## Sell Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "sell 2 3"                                                             │
//! │       │   shell resolves #2 against the available-books list            │
//! │       ▼                                                                 │
//! │  sell_book(store, book_id, "3")                                         │
//! │       │                                                                 │
//! │       ├─ parse quantity ── "0", "-1", "abc" ──► VALIDATION_ERROR        │
//! │       ├─ unknown book ─────────────────────────► NOT_FOUND              │
//! │       ├─ 3 > on hand ──────────────────────────► INSUFFICIENT_STOCK     │
//! │       ▼                                                                 │
//! │  stock -= 3, Sale appended                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Sale completed! Total: R$ 75.00"                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bookstall_core::validation::parse_sale_quantity;
use bookstall_core::{CoreError, Money, Sale};

use crate::error::ApiError;
use crate::state::StoreState;

/// Sale DTO. `title` is the snapshot taken at sale time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: String,
    pub book_id: String,
    pub title: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
    pub total_cents: i64,
    pub sold_at: DateTime<Utc>,
}

impl SaleDto {
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

impl From<&Sale> for SaleDto {
    fn from(s: &Sale) -> Self {
        SaleDto {
            id: s.id.clone(),
            book_id: s.book_id.clone(),
            title: s.title_snapshot.clone(),
            unit_price_cents: s.unit_price_cents,
            quantity: s.quantity,
            total_cents: s.total_cents,
            sold_at: s.sold_at,
        }
    }
}

/// Sells `quantity_text` copies of a book.
///
/// The quantity arrives as operator text and is parsed here; the store
/// itself only ever sees a positive count.
pub fn sell_book(
    store: &StoreState,
    book_id: &str,
    quantity_text: &str,
) -> Result<SaleDto, ApiError> {
    debug!(book_id = %book_id, quantity = %quantity_text, "sell_book");

    let quantity = parse_sale_quantity(quantity_text).map_err(|e| {
        warn!(error = %e, "sell_book rejected: bad quantity");
        ApiError::from(CoreError::from(e))
    })?;

    match store.with_store_mut(|s| s.sell(book_id, quantity)) {
        Ok(sale) => {
            info!(
                sale_id = %sale.id,
                total = %sale.total(),
                "Sale recorded from shell"
            );
            Ok(SaleDto::from(&sale))
        }
        Err(e) => {
            warn!(error = %e, "sell_book rejected");
            Err(e.into())
        }
    }
}

/// Sale history, oldest first.
pub fn list_sales(store: &StoreState) -> Vec<SaleDto> {
    store.snapshot().sales().iter().map(SaleDto::from).collect()
}

//! # Starter Catalog
//!
//! The three titles a fresh store opens with. Seeding goes through
//! [`Store::add_book`] so it obeys the same rules as operator input.

use tracing::info;

use bookstall_core::CoreResult;

use crate::inventory::NewBook;
use crate::store::Store;

/// (title, author, price, quantity)
pub const STARTER_CATALOG: &[(&str, &str, &str, &str)] = &[
    (
        "O Evangelho Segundo o Espiritismo",
        "Allan Kardec",
        "25.00",
        "10",
    ),
    ("O Livro dos Espíritos", "Allan Kardec", "30.00", "8"),
    ("Nosso Lar", "André Luiz / Chico Xavier", "20.00", "15"),
];

impl Store {
    /// Stocks [`STARTER_CATALOG`]. Returns how many books were added.
    pub fn seed_starter_catalog(&mut self) -> CoreResult<usize> {
        for (title, author, price, quantity) in STARTER_CATALOG {
            self.add_book(NewBook::new(*title, *author, *price, *quantity))?;
        }

        info!(count = STARTER_CATALOG.len(), "Starter catalog seeded");
        Ok(STARTER_CATALOG.len())
    }
}

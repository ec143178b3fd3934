//! # bookstall-store: In-Memory Store for Bookstall
//!
//! A single store owns the Books, Sales and Loans collections and exposes
//! the four operations that change them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstall Data Flow                              │
//! │                                                                         │
//! │  Terminal command (sell_book)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  bookstall-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │  inventory    │  │    sales      │  │    loans      │      │   │
//! │  │   │  add_book     │  │    sell       │  │  create_loan  │      │   │
//! │  │   │  available    │  │               │  │  return_loan  │      │   │
//! │  │   └───────┬───────┘  └───────┬───────┘  └───────┬───────┘      │   │
//! │  │           └──────────────────┼──────────────────┘              │   │
//! │  │                              ▼                                  │   │
//! │  │               Store { Snapshot, IdGenerator }                   │   │
//! │  │        Arc<Vec<Book>>  Arc<Vec<Sale>>  Arc<Vec<Loan>>           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Views read a Snapshot (pre- or post-operation, never in between)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `Store` and its read-only `Snapshot`
//! - [`ids`] - Identifier generators
//! - [`inventory`] - Inventory ledger: stocking books, availability
//! - [`sales`] - Sales engine
//! - [`loans`] - Loan engine
//! - [`seed`] - Starter catalog
//!
//! ## Usage
//!
//! ```rust
//! use bookstall_store::{NewBook, NewLoan, Store};
//!
//! let mut store = Store::new();
//! let book = store
//!     .add_book(NewBook::new("Nosso Lar", "André Luiz", "20.00", "15"))
//!     .unwrap();
//!
//! let sale = store.sell(&book.id, 3).unwrap();
//! assert_eq!(sale.total().cents(), 6000);
//!
//! let loan = store
//!     .create_loan(NewLoan::new(&book.id, "Alice", "555-1234"))
//!     .unwrap();
//! store.return_loan(&loan.id).unwrap();
//!
//! assert_eq!(store.book(&book.id).unwrap().quantity, 12);
//! ```

pub mod ids;
pub mod inventory;
pub mod loans;
pub mod sales;
pub mod seed;
pub mod store;

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use inventory::NewBook;
pub use loans::NewLoan;
pub use store::{Snapshot, Store};

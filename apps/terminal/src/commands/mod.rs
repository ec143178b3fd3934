//! # Commands Module
//!
//! Every operation the shell can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── inventory.rs  ◄─── Stock a book, list books
//! ├── sale.rs       ◄─── Sell, sale history
//! ├── loan.rs       ◄─── Lend, return, loan partitions
//! └── export.rs     ◄─── JSON dump of all collections
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell line "sell 1 3"                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  sell_book(&StoreState, book_id, "3") -> Result<SaleDto, ApiError>      │
//! │         │                                                               │
//! │         │  store_state.with_store_mut(|s| s.sell(...))                  │
//! │         ▼                                                               │
//! │  View renders SaleDto or "Error: ..."                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take the state they need by reference. Reads go through a
//! snapshot so a view never observes a half-applied operation.

pub mod export;
pub mod inventory;
pub mod loan;
pub mod sale;

pub use export::*;
pub use inventory::*;
pub use loan::*;
pub use sale::*;

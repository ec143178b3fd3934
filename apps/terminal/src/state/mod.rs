//! # State Module
//!
//! Application state owned by the shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────┐                 ┌──────────────────┐              │
//! │  │   StoreState     │                 │   ConfigState    │              │
//! │  │                  │                 │                  │              │
//! │  │  Arc<Mutex<      │                 │  store_name      │              │
//! │  │    Store         │                 │  currency_symbol │              │
//! │  │  >>              │                 │  date_format     │              │
//! │  └──────────────────┘                 └──────────────────┘              │
//! │                                                                         │
//! │  • StoreState: one writer at a time, readers take snapshots             │
//! │  • ConfigState: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigState, IdStrategy};
pub use store::{build_store, StoreState};

//! # Store State
//!
//! Wraps the [`Store`] so the shell and commands share one handle to it.
//! No ambient globals: the application root builds it and passes it down.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use bookstall_store::{SequentialIds, Snapshot, Store, UuidIds};

use crate::error::ApiError;
use crate::state::config::{ConfigState, IdStrategy};

/// Shared handle to the application's single store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let sale = store_state.with_store_mut(|store| store.sell(&book_id, 3))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    /// Current contents for rendering. Unaffected by later writes.
    pub fn snapshot(&self) -> Snapshot {
        self.with_store(Store::snapshot)
    }
}

/// Builds the store described by the configuration.
pub fn build_store(config: &ConfigState) -> Result<Store, ApiError> {
    let mut store = match config.id_strategy {
        IdStrategy::Uuid => Store::with_ids(UuidIds),
        IdStrategy::Sequential => Store::with_ids(SequentialIds::new("rec")),
    };

    if config.seed_starter_catalog {
        let count = store.seed_starter_catalog()?;
        info!(count, "Store opened with starter catalog");
    }

    Ok(store)
}

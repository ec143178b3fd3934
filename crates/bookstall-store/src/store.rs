//! # Store and Snapshots
//!
//! ## Copy-on-Write Collections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  view holds snapshot S1 ──► books_v1 (Arc)                              │
//! │                                                                         │
//! │  store.sell(...)                                                        │
//! │    1. validate everything (no writes yet)                               │
//! │    2. Arc::make_mut(books)  → books_v1 is shared, so clone → books_v2   │
//! │    3. write books_v2 and sales_v2                                       │
//! │                                                                         │
//! │  S1 still reads books_v1 in full; a fresh snapshot reads books_v2       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations take `&mut Store`, so there is exactly one writer and no
//! reader can see a half-applied operation.

use std::sync::Arc;

use bookstall_core::{Book, Loan, Sale};

use crate::ids::{IdGenerator, UuidIds};

/// An immutable view of all three collections at one point in time.
///
/// Cloning is cheap (three reference-count bumps).
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub(crate) books: Arc<Vec<Book>>,
    pub(crate) sales: Arc<Vec<Sale>>,
    pub(crate) loans: Arc<Vec<Loan>>,
}

impl Snapshot {
    /// All books, in the order they were stocked.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Sale history, in the order sales were made.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Every loan ever made, in creation order.
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn loan(&self, id: &str) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    /// Books with at least one copy on hand, original order preserved.
    ///
    /// Lazy and recomputed on every call.
    pub fn available_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.iter().filter(|b| b.is_available())
    }

    /// Loans whose copy is still out.
    pub fn active_loans(&self) -> impl Iterator<Item = &Loan> + '_ {
        self.loans.iter().filter(|l| !l.is_returned())
    }

    /// Loans that have been returned.
    pub fn loan_history(&self) -> impl Iterator<Item = &Loan> + '_ {
        self.loans.iter().filter(|l| l.is_returned())
    }
}

/// The single in-process owner of Books, Sales and Loans.
///
/// ## Usage
/// ```rust
/// use bookstall_store::{SequentialIds, Store};
///
/// let store = Store::with_ids(SequentialIds::new("rec"));
/// assert!(store.books().is_empty());
/// ```
#[derive(Debug)]
pub struct Store {
    pub(crate) state: Snapshot,
    pub(crate) ids: Box<dyn IdGenerator>,
}

impl Store {
    /// Creates an empty store with UUID v4 identifiers.
    pub fn new() -> Self {
        Store::with_ids(UuidIds)
    }

    /// Creates an empty store with the given identifier generator.
    pub fn with_ids(ids: impl IdGenerator + 'static) -> Self {
        Store {
            state: Snapshot::default(),
            ids: Box::new(ids),
        }
    }

    /// Returns the current state for readers. Later writes do not affect it.
    pub fn snapshot(&self) -> Snapshot {
        self.state.clone()
    }

    pub fn books(&self) -> &[Book] {
        self.state.books()
    }

    pub fn sales(&self) -> &[Sale] {
        self.state.sales()
    }

    pub fn loans(&self) -> &[Loan] {
        self.state.loans()
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.state.book(id)
    }

    pub fn loan(&self, id: &str) -> Option<&Loan> {
        self.state.loan(id)
    }

    pub(crate) fn book_index(&self, id: &str) -> Option<usize> {
        self.state.books.iter().position(|b| b.id == id)
    }

    pub(crate) fn loan_index(&self, id: &str) -> Option<usize> {
        self.state.loans.iter().position(|l| l.id == id)
    }

    pub(crate) fn next_id(&mut self) -> String {
        self.ids.next_id()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

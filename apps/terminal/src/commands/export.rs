//! # Export Command
//!
//! Dumps the three collections as one JSON document. Everything is taken
//! from a single snapshot so the books, sales and loans agree.

use serde::Serialize;
use tracing::debug;

use bookstall_core::{Book, Loan, Sale};

use crate::error::ApiError;
use crate::state::StoreState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    books: &'a [Book],
    sales: &'a [Sale],
    loans: &'a [Loan],
}

/// Pretty-printed JSON of every book, sale and loan.
pub fn export_json(store: &StoreState) -> Result<String, ApiError> {
    let snapshot = store.snapshot();
    debug!(
        books = snapshot.books().len(),
        sales = snapshot.sales().len(),
        loans = snapshot.loans().len(),
        "export_json"
    );

    let document = ExportDocument {
        books: snapshot.books(),
        sales: snapshot.sales(),
        loans: snapshot.loans(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

//! # Loan Commands
//!
//! Lending a copy out, taking it back, and the Active / History lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bookstall_core::{Loan, LoanStatus};
use bookstall_store::NewLoan;

use crate::error::ApiError;
use crate::state::StoreState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDto {
    pub id: String,
    pub book_id: String,
    pub title: String,
    pub borrower_name: String,
    pub borrower_phone: String,
    pub loaned_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub status: LoanStatus,
}

impl From<&Loan> for LoanDto {
    fn from(l: &Loan) -> Self {
        LoanDto {
            id: l.id.clone(),
            book_id: l.book_id.clone(),
            title: l.title_snapshot.clone(),
            borrower_name: l.borrower_name.clone(),
            borrower_phone: l.borrower_phone.clone(),
            loaned_at: l.loaned_at,
            returned_at: l.returned_at,
            status: l.status(),
        }
    }
}

/// Lends one copy of `book_id` to a borrower.
///
/// ## Errors
/// - `VALIDATION_ERROR` when a field is blank
/// - `UNAVAILABLE` when the book is unknown or sold out
pub fn create_loan(
    store: &StoreState,
    book_id: &str,
    borrower_name: &str,
    borrower_phone: &str,
) -> Result<LoanDto, ApiError> {
    debug!(book_id = %book_id, "create_loan");

    let form = NewLoan::new(book_id, borrower_name, borrower_phone);
    match store.with_store_mut(|s| s.create_loan(form)) {
        Ok(loan) => {
            info!(loan_id = %loan.id, book_id = %loan.book_id, "Loan opened from shell");
            Ok(LoanDto::from(&loan))
        }
        Err(e) => {
            warn!(error = %e, "create_loan rejected");
            Err(e.into())
        }
    }
}

/// Marks a loan returned and puts its copy back on the shelf.
pub fn return_loan(store: &StoreState, loan_id: &str) -> Result<LoanDto, ApiError> {
    debug!(loan_id = %loan_id, "return_loan");

    match store.with_store_mut(|s| s.return_loan(loan_id)) {
        Ok(loan) => {
            info!(loan_id = %loan.id, "Loan closed from shell");
            Ok(LoanDto::from(&loan))
        }
        Err(e) => {
            warn!(error = %e, "return_loan rejected");
            Err(e.into())
        }
    }
}

/// Loans still out, oldest first.
pub fn list_active_loans(store: &StoreState) -> Vec<LoanDto> {
    store.snapshot().active_loans().map(LoanDto::from).collect()
}

/// Returned loans, in the order they were opened.
pub fn list_loan_history(store: &StoreState) -> Vec<LoanDto> {
    store.snapshot().loan_history().map(LoanDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_book, list_available_books};
    use crate::error::ErrorCode;
    use bookstall_store::{SequentialIds, Store};

    fn state_with_book(copies: &str) -> (StoreState, String) {
        let state = StoreState::new(Store::with_ids(SequentialIds::new("t")));
        let book = add_book(&state, "Nosso Lar", "André Luiz", "20", copies).unwrap();
        (state, book.id)
    }

    #[test]
    fn test_lend_and_return() {
        let (state, id) = state_with_book("1");

        let loan = create_loan(&state, &id, "Alice", "555-1234").unwrap();
        assert_eq!(loan.status, LoanStatus::Active);
        assert_eq!(loan.title, "Nosso Lar");
        assert!(list_available_books(&state).is_empty());
        assert_eq!(list_active_loans(&state), vec![loan.clone()]);

        let returned = return_loan(&state, &loan.id).unwrap();
        assert_eq!(returned.status, LoanStatus::Returned);
        assert!(returned.returned_at.is_some());
        assert!(list_active_loans(&state).is_empty());
        assert_eq!(list_loan_history(&state), vec![returned]);
        assert_eq!(list_available_books(&state).len(), 1);
    }

    #[test]
    fn test_lend_requires_borrower() {
        let (state, id) = state_with_book("3");
        let err = create_loan(&state, &id, "  ", "555-1234").unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(list_active_loans(&state).is_empty());
    }

    #[test]
    fn test_lend_sold_out_book() {
        let (state, id) = state_with_book("0");
        let err = create_loan(&state, &id, "Alice", "555-1234").unwrap_err();

        assert_eq!(err.code, ErrorCode::Unavailable);
        assert_eq!(err.message, "Book is not available in stock");
    }

    #[test]
    fn test_return_twice() {
        let (state, id) = state_with_book("2");
        let loan = create_loan(&state, &id, "Alice", "555-1234").unwrap();
        return_loan(&state, &loan.id).unwrap();

        let err = return_loan(&state, &loan.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyReturned);
        assert_eq!(state.snapshot().book(&id).unwrap().quantity, 2);
    }

    #[test]
    fn test_return_unknown_loan() {
        let (state, _) = state_with_book("1");
        let err = return_loan(&state, "nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}

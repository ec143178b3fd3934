//! # Loan Engine
//!
//! One loan is one physical copy lent to one customer.
//!
//! ## Loan State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   create_loan ──► Active ──return_loan──► Returned                      │
//! │   stock - 1                               stock + 1                     │
//! │                                                                         │
//! │   Returned is terminal: returning again fails with AlreadyReturned      │
//! │   and stock is not touched. Lending the same book again creates a       │
//! │   new Loan record.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use bookstall_core::validation::required_text;
use bookstall_core::{CoreError, CoreResult, Loan};

use crate::store::Store;

/// The raw loan form, as typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLoan {
    pub book_id: String,
    pub borrower_name: String,
    pub borrower_phone: String,
}

impl NewLoan {
    pub fn new(
        book_id: impl Into<String>,
        borrower_name: impl Into<String>,
        borrower_phone: impl Into<String>,
    ) -> Self {
        NewLoan {
            book_id: book_id.into(),
            borrower_name: borrower_name.into(),
            borrower_phone: borrower_phone.into(),
        }
    }
}

impl Store {
    /// Lends one copy of a book.
    ///
    /// ## Errors
    /// - `Validation` when the book, borrower name or phone is empty
    /// - `Unavailable` when the book does not exist or has no copy on hand
    pub fn create_loan(&mut self, form: NewLoan) -> CoreResult<Loan> {
        debug!(book_id = %form.book_id, "Creating loan");

        let book_id = required_text("book", &form.book_id)?;
        let borrower_name = required_text("borrower name", &form.borrower_name)?;
        let borrower_phone = required_text("borrower phone", &form.borrower_phone)?;

        let index = self
            .book_index(&book_id)
            .filter(|&i| self.state.books[i].is_available())
            .ok_or_else(|| CoreError::Unavailable {
                book_id: book_id.clone(),
            })?;

        let id = self.next_id();
        let loan = Loan::lend(
            id,
            &self.state.books[index],
            borrower_name,
            borrower_phone,
            Utc::now(),
        );

        Arc::make_mut(&mut self.state.books)[index].quantity -= 1;
        Arc::make_mut(&mut self.state.loans).push(loan.clone());

        info!(loan_id = %loan.id, book_id = %loan.book_id, "Loan created");
        Ok(loan)
    }

    /// Takes a lent copy back and puts it on the shelf.
    ///
    /// ## Errors
    /// - `LoanNotFound` for an id this store never issued
    /// - `AlreadyReturned` when the loan is no longer active
    /// - `Overflow` when the shelf count cannot grow by one
    pub fn return_loan(&mut self, loan_id: &str) -> CoreResult<Loan> {
        debug!(loan_id = %loan_id, "Returning loan");

        let loan_index = self
            .loan_index(loan_id)
            .ok_or_else(|| CoreError::LoanNotFound(loan_id.to_string()))?;

        let mut loan = self.state.loans[loan_index].clone();
        loan.mark_returned(Utc::now())?;

        let restock = match self.book_index(&loan.book_id) {
            Some(i) => {
                let quantity = self.state.books[i].quantity.checked_add(1).ok_or_else(|| {
                    CoreError::Overflow {
                        what: "stock".to_string(),
                    }
                })?;
                Some((i, quantity))
            }
            None => None,
        };

        if let Some((i, quantity)) = restock {
            Arc::make_mut(&mut self.state.books)[i].quantity = quantity;
        }
        Arc::make_mut(&mut self.state.loans)[loan_index] = loan.clone();

        info!(loan_id = %loan.id, book_id = %loan.book_id, "Loan returned");
        Ok(loan)
    }

    /// Loans whose copy is still out, in creation order.
    pub fn active_loans(&self) -> impl Iterator<Item = &Loan> + '_ {
        self.state.active_loans()
    }

    /// Returned loans, in creation order.
    pub fn loan_history(&self) -> impl Iterator<Item = &Loan> + '_ {
        self.state.loan_history()
    }
}

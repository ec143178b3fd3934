//! End-to-end walks through the store the way the operator uses it.

use bookstall_core::{CoreError, LoanStatus, Money, ValidationError};
use bookstall_store::{NewBook, NewLoan, SequentialIds, Store};

#[test]
fn sell_lend_and_return_one_title() {
    let mut store = Store::with_ids(SequentialIds::new("rec"));
    let x = store
        .add_book(NewBook::new("X", "Someone", "25.00", "10"))
        .unwrap();

    let sale = store.sell(&x.id, 3).unwrap();
    assert_eq!(sale.total(), Money::from_cents(7500));
    assert_eq!(store.book(&x.id).unwrap().quantity, 7);

    let loan = store
        .create_loan(NewLoan::new(&x.id, "Alice", "555-1234"))
        .unwrap();
    assert_eq!(store.book(&x.id).unwrap().quantity, 6);
    assert_eq!(store.active_loans().count(), 1);
    assert_eq!(store.active_loans().next().unwrap().id, loan.id);

    let returned = store.return_loan(&loan.id).unwrap();
    assert_eq!(returned.status(), LoanStatus::Returned);
    assert_eq!(store.book(&x.id).unwrap().quantity, 7);
    assert_eq!(store.active_loans().count(), 0);
    assert_eq!(store.loan_history().next().unwrap().id, loan.id);
}

#[test]
fn empty_title_is_rejected_and_inventory_unchanged() {
    let mut store = Store::new();
    store.seed_starter_catalog().unwrap();
    let before = store.snapshot();

    let err = store
        .add_book(NewBook::new("", "Author", "10", "5"))
        .unwrap_err();

    assert_eq!(err, CoreError::Validation(ValidationError::required("title")));
    assert_eq!(store.books(), before.books());
}

#[test]
fn sold_out_title_disappears_from_available_and_cannot_be_lent() {
    let mut store = Store::with_ids(SequentialIds::new("rec"));
    store.seed_starter_catalog().unwrap();
    let livro = store.books()[1].clone();

    store.sell(&livro.id, livro.quantity).unwrap();

    assert!(store.list_available().all(|b| b.id != livro.id));
    assert_eq!(store.list_available().count(), 2);
    assert!(matches!(
        store.create_loan(NewLoan::new(&livro.id, "Bob", "555-0000")),
        Err(CoreError::Unavailable { .. })
    ));
}

#[test]
fn history_keeps_title_snapshots() {
    let mut store = Store::with_ids(SequentialIds::new("rec"));
    store.seed_starter_catalog().unwrap();
    let nosso_lar = store.books()[2].clone();

    store.sell(&nosso_lar.id, 1).unwrap();
    let loan = store
        .create_loan(NewLoan::new(&nosso_lar.id, "Carla", "555-4321"))
        .unwrap();

    assert_eq!(store.sales()[0].title_snapshot, "Nosso Lar");
    assert_eq!(store.sales()[0].total(), Money::from_cents(2000));
    assert_eq!(loan.title_snapshot, "Nosso Lar");
    assert_eq!(store.book(&nosso_lar.id).unwrap().quantity, 13);
}

#[test]
fn snapshot_taken_mid_session_sees_whole_operations_only() {
    let mut store = Store::with_ids(SequentialIds::new("rec"));
    let book = store
        .add_book(NewBook::new("X", "Someone", "10", "2"))
        .unwrap();
    let loan = store
        .create_loan(NewLoan::new(&book.id, "Alice", "555-1234"))
        .unwrap();

    let during = store.snapshot();
    store.return_loan(&loan.id).unwrap();
    let after = store.snapshot();

    assert_eq!(during.book(&book.id).unwrap().quantity, 1);
    assert_eq!(during.active_loans().count(), 1);
    assert_eq!(after.book(&book.id).unwrap().quantity, 2);
    assert_eq!(after.loan_history().count(), 1);
}

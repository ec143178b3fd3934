//! # Views
//!
//! Plain-text rendering of the Inventory, Sales and Loans screens.
//!
//! Renderers take already-fetched DTOs and return a `String`; they never
//! touch the store, so the shell decides when data is read.

use bookstall_core::Money;

use crate::commands::{BookDto, LoanDto, SaleDto};
use crate::error::ApiError;
use crate::state::ConfigState;

fn heading(config: &ConfigState, title: &str) -> String {
    format!("== {} | {} ==", config.store_name, title)
}

fn book_selection(lines: &mut Vec<String>, config: &ConfigState, available: &[BookDto]) {
    lines.push("Available books:".to_string());
    if available.is_empty() {
        lines.push("  (none in stock)".to_string());
    }
    lines.extend(available.iter().enumerate().map(|(i, book)| {
        format!(
            "  {}. {} | {} | {} in stock",
            i + 1,
            book.title,
            config.format_currency(book.price()),
            book.quantity
        )
    }));
}

/// Every book, sold-out titles included, plus the add-form hint.
pub fn render_inventory(config: &ConfigState, books: &[BookDto]) -> String {
    let mut lines = vec![heading(config, "Inventory")];

    if books.is_empty() {
        lines.push("  (no books yet)".to_string());
    }
    lines.extend(books.iter().enumerate().map(|(i, book)| {
        let stock = if book.available {
            format!("{} in stock", book.quantity)
        } else {
            "sold out".to_string()
        };
        format!(
            "  {}. {} | {} | {} | {}",
            i + 1,
            book.title,
            book.author,
            config.format_currency(book.price()),
            stock
        )
    }));

    lines.push("Add: add <title> | <author> | <price> | <qty>".to_string());
    lines.join("\n")
}

/// Numbered available books, the sell hint and the sale history.
pub fn render_sales(config: &ConfigState, available: &[BookDto], sales: &[SaleDto]) -> String {
    let mut lines = vec![heading(config, "Sales")];
    book_selection(&mut lines, config, available);
    lines.push("Sell: sell <n> [qty]".to_string());

    lines.push("History:".to_string());
    if sales.is_empty() {
        lines.push("  (no sales yet)".to_string());
    }
    lines.extend(sales.iter().map(|sale| {
        format!(
            "  {}  {} x{}  {}",
            config.format_date(sale.sold_at),
            sale.title,
            sale.quantity,
            config.format_currency(sale.total())
        )
    }));

    let revenue: Money = sales.iter().map(SaleDto::total).sum();
    lines.push(format!("Revenue: {}", config.format_currency(revenue)));
    lines.join("\n")
}

/// Numbered available books, numbered active loans and the return history.
pub fn render_loans(
    config: &ConfigState,
    available: &[BookDto],
    active: &[LoanDto],
    history: &[LoanDto],
) -> String {
    let mut lines = vec![heading(config, "Loans")];
    book_selection(&mut lines, config, available);
    lines.push("Lend: lend <n> | <name> | <phone>".to_string());

    lines.push("Active loans:".to_string());
    if active.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(active.iter().enumerate().map(|(i, loan)| {
        format!(
            "  {}. {} -> {} ({}) since {}",
            i + 1,
            loan.title,
            loan.borrower_name,
            loan.borrower_phone,
            config.format_date(loan.loaned_at)
        )
    }));
    lines.push("Return: return <n>".to_string());

    lines.push("History:".to_string());
    if history.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(history.iter().map(|loan| {
        let returned = loan
            .returned_at
            .map(|at| config.format_date(at))
            .unwrap_or_default();
        format!(
            "  {} -> {}, {} to {}",
            loan.title,
            loan.borrower_name,
            config.format_date(loan.loaned_at),
            returned
        )
    }));
    lines.join("\n")
}

/// The confirmation shown after a successful sale.
pub fn sale_confirmation(config: &ConfigState, sale: &SaleDto) -> String {
    format!(
        "Sale completed! Total: {}",
        config.format_currency(sale.total())
    )
}

/// Blocking error notice.
pub fn render_error(err: &ApiError) -> String {
    format!("Error: {}", err.message)
}

pub fn help() -> String {
    [
        "Screens:  inventory | sales | loans",
        "Stock:    add <title> | <author> | <price> | <qty>",
        "Sell:     sell <n> [qty]            (n from Available books)",
        "Lend:     lend <n> | <name> | <phone>",
        "Return:   return <n>                (n from Active loans)",
        "Other:    export | help | quit",
    ]
    .join("\n")
}

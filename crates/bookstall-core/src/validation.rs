//! # Validation Module
//!
//! Turns the text the operator typed into checked domain values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell                                                         │
//! │  └── Splits the input line into fields                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Presence (trimmed, non-empty)                                      │
//! │  └── Numeric parsing (price, quantity)                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store operations                                              │
//! │  └── Stock and loan-state rules                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstall_core::validation::{parse_price, parse_stock_quantity, required_text};
//!
//! assert_eq!(required_text("title", "  Nosso Lar ").unwrap(), "Nosso Lar");
//! assert_eq!(parse_price("25,50").unwrap().cents(), 2550);
//! assert_eq!(parse_stock_quantity("0").unwrap(), 0);
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text Fields
// =============================================================================

/// Validates a required free-text field and returns it trimmed.
pub fn required_text(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Fields
// =============================================================================

/// Parses a unit price.
///
/// ## Rules
/// - Digits with an optional `.` or `,` separator: `25`, `25.5`, `25,50`
/// - An optional leading `+`; negative is rejected
/// - Any number of decimals, rounded half-up to whole cents (`12.345` → 12.35)
/// - Must fit in `i64` cents
///
/// ## Example
/// ```rust
/// use bookstall_core::validation::parse_price;
///
/// assert_eq!(parse_price("25.00").unwrap().cents(), 2500);
/// assert_eq!(parse_price("12.345").unwrap().cents(), 1235);
/// assert!(parse_price("").is_err());
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("abc").is_err());
/// ```
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::required("price"));
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: "price".to_string(),
        min: 0,
        max: i64::MAX / 100,
    };

    if let Some(rest) = text.strip_prefix('-') {
        if is_decimal(rest) {
            return Err(out_of_range());
        }
    }

    let digits = text.strip_prefix('+').unwrap_or(text);
    if !is_decimal(digits) {
        return Err(ValidationError::invalid_format(
            "price",
            "expected a number like 25.00",
        ));
    }

    decimal_to_cents(digits)
        .map(Money::from_cents)
        .ok_or_else(out_of_range)
}

/// Parses the number of copies being stocked. Zero is allowed.
pub fn parse_stock_quantity(text: &str) -> ValidationResult<u32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::required("quantity"));
    }

    let out_of_range = || ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 0,
        max: u32::MAX as i64,
    };

    if let Some(rest) = text.strip_prefix('-') {
        if is_digits(rest) {
            return Err(out_of_range());
        }
    }

    let qty = unsigned(text).ok_or_else(|| {
        ValidationError::invalid_format("quantity", "expected a whole number")
    })?;

    u32::try_from(qty).map_err(|_| out_of_range())
}

/// Parses the number of copies being sold.
///
/// ## User Workflow
/// ```text
/// Operator enters quantity: "3"
///      │
///      ▼
/// parse_sale_quantity("3") ← THIS FUNCTION
///      │
///      ├── not a whole number? → InvalidFormat
///      ├── zero or negative?   → MustBePositive
///      └── OK → store.sell(book_id, 3)
/// ```
///
/// Counts beyond `u32` become `u32::MAX`, which no shelf can supply, so
/// the store reports them as insufficient stock.
pub fn parse_sale_quantity(text: &str) -> ValidationResult<u32> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::required("quantity"));
    }

    if let Some(rest) = text.strip_prefix('-') {
        if is_digits(rest) {
            return Err(must_be_positive());
        }
    }

    let qty = unsigned(text).ok_or_else(|| {
        ValidationError::invalid_format("quantity", "expected a whole number")
    })?;

    let qty = u32::try_from(qty).unwrap_or(u32::MAX);
    validate_sale_quantity(qty)?;
    Ok(qty)
}

/// Validates an already-numeric sale quantity: it must be positive.
pub fn validate_sale_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(must_be_positive());
    }
    Ok(())
}

fn must_be_positive() -> ValidationError {
    ValidationError::MustBePositive {
        field: "quantity".to_string(),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Unsigned parse with an optional `+`. Saturates on huge input so it
/// still lands in the range check.
fn unsigned(text: &str) -> Option<u64> {
    let text = text.strip_prefix('+').unwrap_or(text);
    if !is_digits(text) {
        return None;
    }
    Some(text.parse::<u64>().unwrap_or(u64::MAX))
}

fn split_decimal(text: &str) -> (&str, &str) {
    match text.find(|c: char| c == '.' || c == ',') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    }
}

/// Digits with at most one separator and at least one digit.
fn is_decimal(text: &str) -> bool {
    let (whole, frac) = split_decimal(text);
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && frac.is_empty()) && all_digits(whole) && all_digits(frac)
}

/// `"25"` → 2500, `"25.5"` → 2550, `"0,05"` → 5, `"0.005"` → 1.
///
/// Expects input already accepted by [`is_decimal`]. `None` on overflow.
fn decimal_to_cents(text: &str) -> Option<i64> {
    let (whole, frac) = split_decimal(text);

    let whole = whole.trim_start_matches('0');
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
    let round_up = i64::from(digit(2) >= 5);
    let frac_cents = digit(0) * 10 + digit(1) + round_up;

    whole.checked_mul(100)?.checked_add(frac_cents)
}

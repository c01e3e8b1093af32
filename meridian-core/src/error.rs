//! Core error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the order total calculator.
///
/// Missing data is deliberately *not* represented here: an order with no
/// reported total and no items resolves to zero totals (see
/// [`crate::totals::TotalsSource::Empty`]) so the UI can still render.
/// These variants are reserved for data that must never flow into a total.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TotalsError {
    /// A line item carries a negative quantity
    #[error("line {line} ({item}): quantity must be non-negative, got {quantity}")]
    NegativeQuantity {
        line: usize,
        item: String,
        quantity: i64,
    },

    /// A line item carries a negative unit price
    #[error("line {line} ({item}): unit price must be non-negative, got {price}")]
    NegativePrice {
        line: usize,
        item: String,
        price: Decimal,
    },

    /// A tax configuration rate is negative
    #[error("{rate} must be non-negative, got {value}")]
    InvalidRate { rate: &'static str, value: Decimal },
}

/// Result type for total computations
pub type TotalsResult<T> = Result<T, TotalsError>;

/// Errors raised by cart operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// Checkout was attempted on an empty cart
    #[error("cannot place an order from an empty cart")]
    EmptyCart,

    /// The referenced cart line does not exist
    #[error("no cart line for menu item {0}")]
    LineNotFound(i64),
}

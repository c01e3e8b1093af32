//! Money helpers using rust_decimal for precision
//!
//! All monetary computation happens in `Decimal`; rounding to 2 decimal
//! places occurs only at the display step, never between intermediate
//! steps, so accumulation error stays below a cent over realistic orders.

use rust_decimal::prelude::*;

/// Display precision for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round a monetary value for display (2 decimal places, half-up)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary value as a dollar string, e.g. `$70.74`
pub fn format_money(value: Decimal) -> String {
    format!("${:.2}", round_money(value))
}

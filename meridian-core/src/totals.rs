//! Order total reconciliation
//!
//! Produces a single consistent {subtotal, vat, service fee, total}
//! breakdown for an order, tolerating partial or missing backend data.
//!
//! Priority order (first matching rule wins):
//! 1. a positive backend-reported total is trusted verbatim — after
//!    payment the backend is the source of truth;
//! 2. otherwise the breakdown is recomputed from line items — the backend
//!    is known to return `total: 0` or null for in-progress orders and the
//!    cashier still needs a sane estimate;
//! 3. otherwise everything is zero.
//!
//! The calculator is a pure read-only projection: no I/O, no mutation,
//! recomputed on every call from current order data.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{TotalsError, TotalsResult};
use crate::models::Order;
use crate::money::{format_money, round_money};

/// Tax configuration
///
/// Rates are explicit configuration rather than per-view constants so
/// every call site reconciles to the same breakdown. Rates above 100% are
/// permitted (a caller-side sanity concern); negative rates are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxConfig {
    vat_rate: Decimal,
    service_fee_rate: Decimal,
}

impl TaxConfig {
    /// Create a tax configuration, rejecting negative rates
    pub fn new(vat_rate: Decimal, service_fee_rate: Decimal) -> TotalsResult<Self> {
        if vat_rate < Decimal::ZERO {
            return Err(TotalsError::InvalidRate {
                rate: "vat_rate",
                value: vat_rate,
            });
        }
        if service_fee_rate < Decimal::ZERO {
            return Err(TotalsError::InvalidRate {
                rate: "service_fee_rate",
                value: service_fee_rate,
            });
        }
        Ok(Self {
            vat_rate,
            service_fee_rate,
        })
    }

    pub fn vat_rate(&self) -> Decimal {
        self.vat_rate
    }

    pub fn service_fee_rate(&self) -> Decimal {
        self.service_fee_rate
    }

    /// `1 + vat_rate + service_fee_rate`, the subtotal-to-total multiplier
    pub fn total_multiplier(&self) -> Decimal {
        Decimal::ONE + self.vat_rate + self.service_fee_rate
    }
}

impl Default for TaxConfig {
    /// 12% VAT, 10% service fee
    fn default() -> Self {
        Self {
            vat_rate: Decimal::new(12, 2),
            service_fee_rate: Decimal::new(10, 2),
        }
    }
}

/// Which rule produced a breakdown
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TotalsSource {
    /// Backend-reported total trusted verbatim
    Reported,
    /// Recomputed from line items
    ItemSum,
    /// No reported total and no items; all fields zero
    Empty,
}

/// A consistent order total breakdown
///
/// Values carry full precision; call [`TotalBreakdown::rounded`] at the
/// display step. Rounding between intermediate steps would compound error.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TotalBreakdown {
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
    pub source: TotalsSource,
}

impl TotalBreakdown {
    fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            vat: Decimal::ZERO,
            service_fee: Decimal::ZERO,
            total: Decimal::ZERO,
            source: TotalsSource::Empty,
        }
    }

    /// Breakdown rounded to 2 decimal places for display
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_money(self.subtotal),
            vat: round_money(self.vat),
            service_fee: round_money(self.service_fee),
            total: round_money(self.total),
            source: self.source,
        }
    }

    /// The total as a display string, e.g. `$70.74`
    pub fn display_total(&self) -> String {
        format_money(self.total)
    }
}

/// Compute a consistent total breakdown for an order
///
/// Fails with a [`TotalsError`] naming the offending line when any item
/// carries a negative quantity or price; malformed money must surface as
/// an explicit error state, never as a silently wrong total.
pub fn compute_order_totals(order: &Order, tax: &TaxConfig) -> TotalsResult<TotalBreakdown> {
    // Validate line data up front, regardless of which rule fires
    for (line, item) in order.items.iter().enumerate() {
        if item.quantity < 0 {
            return Err(TotalsError::NegativeQuantity {
                line,
                item: item.display_name().to_string(),
                quantity: item.quantity,
            });
        }
        if let Some(price) = item.price {
            if price < Decimal::ZERO {
                return Err(TotalsError::NegativePrice {
                    line,
                    item: item.display_name().to_string(),
                    price,
                });
            }
        }
    }

    // Rule 1: trust a committed backend total verbatim
    if let Some(total) = order.reported_total() {
        if total > Decimal::ZERO {
            return Ok(reported_breakdown(order, total, tax));
        }
    }

    // Rule 2: recompute from line items
    if !order.items.is_empty() {
        let subtotal: Decimal = order
            .items
            .iter()
            .map(|item| match item.subtotal {
                Some(line_total) if line_total > Decimal::ZERO => line_total,
                _ => item.price.unwrap_or(Decimal::ZERO) * Decimal::from(item.quantity),
            })
            .sum();
        let vat = subtotal * tax.vat_rate;
        let service_fee = subtotal * tax.service_fee_rate;
        return Ok(TotalBreakdown {
            subtotal,
            vat,
            service_fee,
            total: subtotal + vat + service_fee,
            source: TotalsSource::ItemSum,
        });
    }

    // Rule 3: nothing to go on; zero so the UI can still render
    tracing::debug!(order_id = order.id, "no reported total and no items; totals default to zero");
    Ok(TotalBreakdown::zero())
}

/// Breakdown for a trusted reported total
///
/// The reported component fields are used only when all three are present;
/// mixing reported and derived components could display a breakdown that
/// does not sum to the total. Otherwise the subtotal is back-derived from
/// the total.
fn reported_breakdown(order: &Order, total: Decimal, tax: &TaxConfig) -> TotalBreakdown {
    if let (Some(subtotal), Some(vat), Some(service_fee)) = (
        order.reported_subtotal(),
        order.reported_vat(),
        order.reported_service_fee(),
    ) {
        return TotalBreakdown {
            subtotal,
            vat,
            service_fee,
            total,
            source: TotalsSource::Reported,
        };
    }

    let subtotal = total / tax.total_multiplier();
    TotalBreakdown {
        subtotal,
        vat: subtotal * tax.vat_rate,
        service_fee: subtotal * tax.service_fee_rate,
        total,
        source: TotalsSource::Reported,
    }
}

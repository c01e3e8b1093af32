//! Order model - wire shape of the order-fetch endpoint
//!
//! Money fields come back from the backend under two spellings depending on
//! the endpoint revision (`total` vs `calculated_total`, etc.), and some
//! revisions send both on the same order. Both spellings are kept as
//! separate fields; the `reported_*` accessors resolve the precedence.
//! All monetary fields deserialize from either JSON numbers or decimal
//! strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// `Preparing` and `Ready` are kitchen-side refinements of an in-progress
/// order; for settlement purposes they behave like `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order is still open for changes and payment
    pub fn is_active(&self) -> bool {
        !matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether the recorded transaction values are authoritative
    pub fn is_settled(&self) -> bool {
        !self.is_active()
    }

    /// Wire name, as used in the `?status=` query filter
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// A line item within an order
///
/// `price` is the unit price at the time the order was placed, not the
/// current menu price. `subtotal` is the backend-computed line total and
/// may be absent on older endpoint revisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Line ID (assigned by the backend)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Menu item ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_item: Option<i64>,
    /// Display name snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Quantity ordered
    pub quantity: i64,
    /// Unit price at time of order
    #[serde(default, alias = "price_at_time", alias = "unit_price")]
    pub price: Option<Decimal>,
    /// Backend-computed `quantity * price`, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    /// Line note (e.g. "no onions")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    /// Name for display and error messages
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed item")
    }
}

/// A guest's placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order ID (assigned by the backend)
    pub id: i64,
    /// Table the order belongs to
    #[serde(default)]
    pub table_number: i32,
    /// Waiter display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiter_name: Option<String>,
    /// Order status
    #[serde(default)]
    pub status: OrderStatus,
    /// Line items, in add-to-cart order
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Backend-reported total, legacy spelling; may be absent, zero, or
    /// stale for in-progress orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    /// Backend-reported total, newer spelling; wins over `total` when
    /// both come back on the same order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_total: Option<Decimal>,
    /// Backend-reported subtotal, legacy spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_subtotal: Option<Decimal>,
    /// Backend-reported VAT amount, legacy spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_vat: Option<Decimal>,
    /// Backend-reported service fee amount, legacy spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_service_fee: Option<Decimal>,
    /// Order note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Whether the order is still open for changes and payment
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// The backend-reported total, newer spelling first; a zeroed newer
    /// field falls through to the legacy one
    pub fn reported_total(&self) -> Option<Decimal> {
        self.calculated_total
            .filter(|v| !v.is_zero())
            .or(self.total)
    }

    /// The backend-reported subtotal, newer spelling first
    pub fn reported_subtotal(&self) -> Option<Decimal> {
        self.calculated_subtotal
            .filter(|v| !v.is_zero())
            .or(self.subtotal)
    }

    /// The backend-reported VAT amount, newer spelling first
    pub fn reported_vat(&self) -> Option<Decimal> {
        self.calculated_vat.filter(|v| !v.is_zero()).or(self.vat)
    }

    /// The backend-reported service fee, newer spelling first
    pub fn reported_service_fee(&self) -> Option<Decimal> {
        self.calculated_service_fee
            .filter(|v| !v.is_zero())
            .or(self.service_fee)
    }
}

/// Request body for placing a new order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceOrderRequest {
    pub table_number: i32,
    pub items: Vec<OrderItemRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One requested line within [`PlaceOrderRequest`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemRequest {
    pub menu_item: i64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

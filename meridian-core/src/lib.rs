//! Shared types for the Meridian POS client
//!
//! Domain models, the order total calculator, money helpers and the
//! session/cart context used by the role-specific views (manager, cashier,
//! waiter, guest).

pub mod auth;
pub mod error;
pub mod models;
pub mod money;
pub mod receipt;
pub mod session;
pub mod totals;

// Re-exports
pub use auth::{LoginRequest, LoginResponse, Role, UserInfo};
pub use error::{CartError, TotalsError};
pub use models::{
    MenuItem, Order, OrderItem, OrderItemRequest, OrderStatus, PaymentMethod, PaymentRequest,
    PlaceOrderRequest, Transaction,
};
pub use session::{Cart, CartLine, Session};
pub use totals::{TaxConfig, TotalBreakdown, TotalsSource, compute_order_totals};

//! Domain models mirroring the backend wire shapes

pub mod menu_item;
pub mod order;
pub mod transaction;

pub use menu_item::MenuItem;
pub use order::{Order, OrderItem, OrderItemRequest, OrderStatus, PlaceOrderRequest};
pub use transaction::{PaymentMethod, PaymentRequest, Transaction};

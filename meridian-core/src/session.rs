//! Explicit session and cart context
//!
//! The original client kept auth and cart state in ambient globals; here
//! they are explicit values with a clear lifecycle: a [`Session`] starts
//! on login, is passed by reference to the views that need it, and is torn
//! down on logout. Nothing about it is a singleton.
//!
//! Checkout drains the cart into an immutable [`PlaceOrderRequest`], so a
//! placed order can never be recomputed from mutable cart state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::{LoginResponse, UserInfo};
use crate::error::CartError;
use crate::models::{MenuItem, OrderItemRequest, PlaceOrderRequest};

/// One line in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub menu_item: i64,
    pub name: String,
    /// Unit price snapshotted from the menu when the line was added
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The current cart, in add order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu item; merges into an existing line for the same item
    pub fn add(&mut self, item: &MenuItem, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.menu_item == item.id) {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            menu_item: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity,
            notes: None,
        });
    }

    /// Set the quantity for a line; zero removes it
    pub fn set_quantity(&mut self, menu_item: i64, quantity: u32) -> Result<(), CartError> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.menu_item == menu_item)
            .ok_or(CartError::LineNotFound(menu_item))?;
        if quantity == 0 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity = quantity;
        }
        Ok(())
    }

    /// Remove a line entirely
    pub fn remove(&mut self, menu_item: i64) -> Result<(), CartError> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.menu_item == menu_item)
            .ok_or(CartError::LineNotFound(menu_item))?;
        self.lines.remove(idx);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart subtotal before VAT and service fee
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Drain the cart into an order request
    ///
    /// The cart is emptied on success; the placed order's lines are from
    /// then on owned by the backend, not by this context.
    pub fn checkout(
        &mut self,
        table_number: i32,
        notes: Option<String>,
    ) -> Result<PlaceOrderRequest, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let items = self
            .lines
            .drain(..)
            .map(|line| OrderItemRequest {
                menu_item: line.menu_item,
                quantity: line.quantity,
                notes: line.notes,
            })
            .collect();
        Ok(PlaceOrderRequest {
            table_number,
            items,
            notes,
        })
    }
}

/// A logged-in user's session
///
/// Created on login, passed by reference to the views that need it,
/// consumed by [`Session::end`] on logout.
#[derive(Debug, Clone)]
pub struct Session {
    user: UserInfo,
    token: String,
    cart: Cart,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Start a session from a successful login
    pub fn start(login: LoginResponse) -> Self {
        tracing::info!(user = %login.user.username, "session started");
        Self {
            user: login.user,
            token: login.token,
            cart: Cart::new(),
            started_at: Utc::now(),
        }
    }

    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Tear the session down, discarding the cart and the token
    pub fn end(self) {
        tracing::info!(user = %self.user.username, "session ended");
    }
}

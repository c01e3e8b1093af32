//! Plain-text receipt rendering
//!
//! Renders the cashier receipt from an order and a computed total
//! breakdown. Layout is line-oriented with left/right columns; hardware
//! printer encoding is out of scope.

use crate::models::{Order, Transaction};
use crate::money::format_money;
use crate::totals::TotalBreakdown;

const DEFAULT_WIDTH: usize = 40;

/// Renders a receipt for a paid (or in-progress, as a pre-bill) order
pub struct ReceiptRenderer<'a> {
    order: &'a Order,
    breakdown: TotalBreakdown,
    transaction: Option<&'a Transaction>,
    store_name: &'a str,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(order: &'a Order, breakdown: &TotalBreakdown) -> Self {
        Self {
            order,
            breakdown: breakdown.rounded(),
            transaction: None,
            store_name: "MERIDIAN",
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_transaction(mut self, transaction: &'a Transaction) -> Self {
        self.transaction = Some(transaction);
        self
    }

    pub fn with_store_name(mut self, name: &'a str) -> Self {
        self.store_name = name;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "-".repeat(self.width);

        out.push_str(&center(self.store_name, self.width));
        out.push('\n');
        out.push_str(&line_lr(
            &format!("Order #{}", self.order.id),
            &format!("Table {}", self.order.table_number),
            self.width,
        ));
        out.push('\n');
        if let Some(waiter) = &self.order.waiter_name {
            out.push_str(&format!("Served by: {}\n", waiter));
        }
        out.push_str(&rule);
        out.push('\n');

        for item in &self.order.items {
            let left = format!("{}x {}", item.quantity, item.display_name());
            let right = match item.subtotal.or_else(|| {
                item.price
                    .map(|p| p * rust_decimal::Decimal::from(item.quantity))
            }) {
                Some(amount) => format_money(amount),
                None => String::new(),
            };
            out.push_str(&line_lr(&left, &right, self.width));
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&line_lr("Subtotal", &format_money(self.breakdown.subtotal), self.width));
        out.push('\n');
        out.push_str(&line_lr("VAT", &format_money(self.breakdown.vat), self.width));
        out.push('\n');
        out.push_str(&line_lr("Service fee", &format_money(self.breakdown.service_fee), self.width));
        out.push('\n');
        out.push_str(&line_lr("TOTAL", &format_money(self.breakdown.total), self.width));
        out.push('\n');

        if let Some(tx) = self.transaction {
            out.push_str(&rule);
            out.push('\n');
            out.push_str(&line_lr("Paid", tx.payment_method.label(), self.width));
            out.push('\n');
            if let Some(reference) = &tx.reference_number {
                out.push_str(&format!("Ref: {}\n", reference));
            }
        }

        out.push_str(&center("Thank you!", self.width));
        out.push('\n');
        out
    }
}

/// Pad `left` and `right` into one line of `width` columns
fn line_lr(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    if used >= width {
        return format!("{} {}", left, right);
    }
    format!("{}{}{}", left, " ".repeat(width - used), right)
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, OrderStatus, PaymentMethod};
    use crate::totals::{TaxConfig, compute_order_totals};
    use rust_decimal::Decimal;

    fn paid_order() -> Order {
        Order {
            id: 7,
            table_number: 4,
            waiter_name: Some("Marco".to_string()),
            status: OrderStatus::Completed,
            items: vec![
                OrderItem {
                    id: Some(1),
                    menu_item: Some(12),
                    name: Some("Sisig".to_string()),
                    quantity: 2,
                    price: Some(Decimal::new(2199, 2)),
                    subtotal: Some(Decimal::new(4398, 2)),
                    notes: None,
                },
                OrderItem {
                    id: Some(2),
                    menu_item: Some(9),
                    name: Some("Halo-halo".to_string()),
                    quantity: 1,
                    price: Some(Decimal::new(1400, 2)),
                    subtotal: None,
                    notes: None,
                },
            ],
            total: None,
            calculated_total: None,
            subtotal: None,
            calculated_subtotal: None,
            vat: None,
            calculated_vat: None,
            service_fee: None,
            calculated_service_fee: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_render_includes_breakdown_rows() {
        let order = paid_order();
        let breakdown = compute_order_totals(&order, &TaxConfig::default()).unwrap();
        let text = ReceiptRenderer::new(&order, &breakdown).render();

        assert!(text.contains("MERIDIAN"));
        assert!(text.contains("Order #7"));
        assert!(text.contains("Table 4"));
        assert!(text.contains("2x Sisig"));
        assert!(text.contains("$43.98"));
        assert!(text.contains("$6.96")); // VAT, rounded for display
        assert!(text.contains("$70.74"));
    }

    #[test]
    fn test_render_with_transaction() {
        let order = paid_order();
        let breakdown = compute_order_totals(&order, &TaxConfig::default()).unwrap();
        let tx = Transaction {
            id: 1,
            order: 7,
            cashier_name: Some("Ana".to_string()),
            amount: Decimal::new(7074, 2),
            payment_method: PaymentMethod::Gcash,
            reference_number: Some("GC-1234".to_string()),
            created_at: None,
        };
        let text = ReceiptRenderer::new(&order, &breakdown)
            .with_transaction(&tx)
            .render();

        assert!(text.contains("Paid"));
        assert!(text.contains("Ref: GC-1234"));
    }

    #[test]
    fn test_line_lr_layout() {
        assert_eq!(line_lr("Subtotal", "$57.98", 20), "Subtotal      $57.98");
        // Overflow degrades to a single space
        assert_eq!(line_lr("a-very-long-label", "$1.00", 10), "a-very-long-label $1.00");
    }
}

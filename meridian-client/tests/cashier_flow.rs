//! Cashier flow over a realistic backend payload: deserialize the order
//! list, reconcile totals, build the payment, render the receipt.

use meridian_core::receipt::ReceiptRenderer;
use meridian_core::totals::{TaxConfig, TotalsSource, compute_order_totals};
use meridian_core::{Order, PaymentMethod, PaymentRequest, Transaction};
use rust_decimal::Decimal;

/// Shape observed from `GET /orders/`: one settled order carrying both
/// total spellings (legacy one zeroed), one in-progress order where the
/// backend reports total 0
const ORDERS_JSON: &str = r#"[
    {
        "id": 41,
        "table_number": 2,
        "waiter_name": "Marco",
        "status": "completed",
        "total": "0.00",
        "calculated_total": "95.97",
        "calculated_subtotal": "78.66",
        "calculated_vat": "9.44",
        "calculated_service_fee": "7.87",
        "items": [
            {"id": 1, "menu_item": 3, "name": "Lechon", "quantity": 1, "price_at_time": "45.50", "subtotal": "45.50"},
            {"id": 2, "menu_item": 8, "name": "Pancit", "quantity": 2, "price_at_time": "16.58", "subtotal": "33.16"}
        ]
    },
    {
        "id": 42,
        "table_number": 4,
        "status": "pending",
        "total": 0,
        "items": [
            {"id": 3, "menu_item": 12, "name": "Sisig", "quantity": 2, "price": "21.99"},
            {"id": 4, "menu_item": 9, "name": "Halo-halo", "quantity": 1, "price": "14.00"}
        ]
    }
]"#;

#[test]
fn settled_order_total_is_trusted_verbatim() {
    let orders: Vec<Order> = serde_json::from_str(ORDERS_JSON).unwrap();
    let breakdown = compute_order_totals(&orders[0], &TaxConfig::default()).unwrap();

    assert_eq!(breakdown.source, TotalsSource::Reported);
    assert_eq!(breakdown.total, Decimal::new(9597, 2));
    assert_eq!(breakdown.subtotal, Decimal::new(7866, 2));
}

#[test]
fn in_progress_order_is_estimated_from_items() {
    let orders: Vec<Order> = serde_json::from_str(ORDERS_JSON).unwrap();
    let breakdown = compute_order_totals(&orders[1], &TaxConfig::default()).unwrap();

    assert_eq!(breakdown.source, TotalsSource::ItemSum);
    assert_eq!(breakdown.subtotal, Decimal::new(5798, 2));
    assert_eq!(breakdown.display_total(), "$70.74");
}

#[test]
fn payment_and_receipt_from_reconciled_total() {
    let orders: Vec<Order> = serde_json::from_str(ORDERS_JSON).unwrap();
    let order = &orders[1];
    let breakdown = compute_order_totals(order, &TaxConfig::default()).unwrap();

    // The cashier charges the rounded display total
    let payment = PaymentRequest {
        order: order.id,
        amount: breakdown.rounded().total,
        payment_method: PaymentMethod::Cash,
        reference_number: None,
    };
    assert_eq!(payment.amount, Decimal::new(7074, 2));

    let transaction = Transaction {
        id: 900,
        order: order.id,
        cashier_name: Some("Ana".to_string()),
        amount: payment.amount,
        payment_method: payment.payment_method,
        reference_number: None,
        created_at: None,
    };
    let receipt = ReceiptRenderer::new(order, &breakdown)
        .with_transaction(&transaction)
        .render();

    assert!(receipt.contains("Order #42"));
    assert!(receipt.contains("2x Sisig"));
    assert!(receipt.contains("$70.74"));
    assert!(receipt.contains("Cash"));
}

#[test]
fn both_views_reconcile_to_the_same_totals() {
    // Manager dashboard and cashier detail view share one calculator and
    // one tax configuration, so their displayed totals can never drift
    let orders: Vec<Order> = serde_json::from_str(ORDERS_JSON).unwrap();
    let tax = TaxConfig::default();

    for order in &orders {
        let manager_view = compute_order_totals(order, &tax).unwrap();
        let cashier_view = compute_order_totals(order, &tax).unwrap();
        assert_eq!(manager_view, cashier_view);
    }
}

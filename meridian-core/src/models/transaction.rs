//! Payment transaction models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accepted payment methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
    DebitCard,
    Gcash,
    Paymaya,
}

impl PaymentMethod {
    /// Whether this method requires an external reference number
    pub fn requires_reference(&self) -> bool {
        !matches!(self, PaymentMethod::Cash)
    }

    /// Human-readable label for receipts and dashboards
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::Gcash => "GCash",
            PaymentMethod::Paymaya => "PayMaya",
        }
    }
}

/// A recorded payment against an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: i64,
    /// The paid order's ID
    #[serde(alias = "order_id")]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier_name: Option<String>,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for processing a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub order: i64,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"credit_card\""
        );
        let m: PaymentMethod = serde_json::from_str("\"gcash\"").unwrap();
        assert_eq!(m, PaymentMethod::Gcash);
    }

    #[test]
    fn test_requires_reference() {
        assert!(!PaymentMethod::Cash.requires_reference());
        assert!(PaymentMethod::Gcash.requires_reference());
        assert!(PaymentMethod::CreditCard.requires_reference());
    }

    #[test]
    fn test_transaction_deserialize() {
        let json = r#"{
            "id": 1,
            "order": 7,
            "cashier_name": "Ana",
            "amount": "70.74",
            "payment_method": "cash"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, Decimal::new(7074, 2));
        assert_eq!(tx.payment_method, PaymentMethod::Cash);
    }
}

#![cfg(test)]

use crate::types::{OrderLine, OrderStatus, PaymentMethod};

#[test]
fn order_status_as_str() {
    assert_eq!(OrderStatus::Pending.as_str(), "pending");
    assert_eq!(OrderStatus::Confirmed.as_str(), "confirmed");
    assert_eq!(OrderStatus::Shipped.as_str(), "shipped");
    assert_eq!(OrderStatus::Delivered.as_str(), "delivered");
    assert_eq!(OrderStatus::Cancelled.as_str(), "cancelled");
}

#[test]
fn order_status_only_moves_forward() {
    assert!(OrderStatus::Pending.can_become(OrderStatus::Confirmed));
    assert!(OrderStatus::Confirmed.can_become(OrderStatus::Cancelled));
    assert!(!OrderStatus::Shipped.can_become(OrderStatus::Cancelled));
    assert!(!OrderStatus::Delivered.can_become(OrderStatus::Pending));
    assert!(OrderStatus::Cancelled.next().is_empty());
}

#[test]
fn payment_method_round_trips_through_form_value() {
    for m in [PaymentMethod::CashOnDelivery, PaymentMethod::BankTransfer] {
        assert_eq!(PaymentMethod::from_str_opt(m.as_str()), Some(m));
    }
    assert_eq!(PaymentMethod::from_str_opt("card"), None);
}

#[test]
fn order_line_total() {
    let line = OrderLine {
        product_id: 1,
        name: "Áo thun".to_string(),
        unit_price: 150_000,
        quantity: 3,
    };
    assert_eq!(line.total(), 450_000);
}

//! Display text for enum values that live in the message tables.

use shop::types::{OrderStatus, PaymentMethod};
use shop::{t, Locale, Role};

pub fn status_label(locale: Locale, status: OrderStatus) -> String {
    t(locale, &format!("status.{}", status.as_str()))
}

pub fn payment_label(locale: Locale, payment: PaymentMethod) -> String {
    t(locale, &format!("payment.{}", payment.as_str()))
}

pub fn role_label(locale: Locale, role: Role) -> String {
    t(locale, &format!("role.{}", role.as_str()))
}

pub fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge_pending",
        OrderStatus::Confirmed | OrderStatus::Shipped => "badge badge_active",
        OrderStatus::Delivered => "badge badge_done",
        OrderStatus::Cancelled => "badge badge_cancelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_and_payment_has_text() {
        for locale in Locale::ALL {
            for status in OrderStatus::ALL {
                let key = format!("status.{}", status.as_str());
                assert_ne!(status_label(locale, status), key);
            }
            for payment in [PaymentMethod::CashOnDelivery, PaymentMethod::BankTransfer] {
                assert!(!payment_label(locale, payment).starts_with("payment."));
            }
            for role in Role::ALL {
                assert!(!role_label(locale, role).starts_with("role."));
            }
        }
    }
}

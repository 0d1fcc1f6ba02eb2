//! Checkout Data

use crate::domain::{
    checkouts::{
        errors::CheckoutValidationError,
        records::{CheckoutUuid, ShippingAddress},
    },
    line_items::{LineItem, MAX_AMOUNT},
};

/// New Checkout Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckout {
    pub uuid: CheckoutUuid,
    pub items: Vec<LineItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: String,
    pub total_price: u64,
}

impl NewCheckout {
    /// # Errors
    ///
    /// Returns the first problem found with the session contents.
    pub fn validate(&self) -> Result<(), CheckoutValidationError> {
        if self.items.is_empty() {
            return Err(CheckoutValidationError::NoItems);
        }

        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(CheckoutValidationError::ZeroQuantity);
        }

        if self.payment_method.trim().is_empty() {
            return Err(CheckoutValidationError::MissingPaymentMethod);
        }

        if self.total_price > MAX_AMOUNT || self.items.iter().any(|item| item.price > MAX_AMOUNT) {
            return Err(CheckoutValidationError::AmountOutOfRange);
        }

        Ok(())
    }
}

/// Payment gateway outcome for a checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentConfirmation {
    pub payment_status: String,
    pub payment_details: Option<serde_json::Value>,
}

impl PaymentConfirmation {
    /// Only an exact `"paid"` status confirms a payment.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.payment_status == "paid"
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{line_items::tests::line, products::records::ProductUuid};

    use super::*;

    fn checkout(items: Vec<LineItem>) -> NewCheckout {
        NewCheckout {
            uuid: CheckoutUuid::new(),
            items,
            shipping_address: ShippingAddress {
                address: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                postal_code: "12345".to_string(),
                country: "US".to_string(),
            },
            payment_method: "card".to_string(),
            total_price: 100,
        }
    }

    #[test]
    fn validate_accepts_non_empty_checkout() {
        let product = ProductUuid::new();

        assert_eq!(checkout(vec![line(product, "M", "Red", 50, 2)]).validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_items() {
        assert_eq!(
            checkout(Vec::new()).validate(),
            Err(CheckoutValidationError::NoItems)
        );
    }

    #[test]
    fn validate_rejects_zero_quantity_lines() {
        let product = ProductUuid::new();

        assert_eq!(
            checkout(vec![line(product, "M", "Red", 50, 0)]).validate(),
            Err(CheckoutValidationError::ZeroQuantity)
        );
    }

    #[test]
    fn validate_rejects_unstorable_amounts() {
        let product = ProductUuid::new();

        let mut oversized_total = checkout(vec![line(product, "M", "Red", 50, 2)]);
        oversized_total.total_price = MAX_AMOUNT + 1;

        assert_eq!(
            oversized_total.validate(),
            Err(CheckoutValidationError::AmountOutOfRange)
        );

        assert_eq!(
            checkout(vec![line(product, "M", "Red", MAX_AMOUNT + 1, 1)]).validate(),
            Err(CheckoutValidationError::AmountOutOfRange)
        );

        let mut largest = checkout(vec![line(product, "M", "Red", MAX_AMOUNT, 1)]);
        largest.total_price = MAX_AMOUNT;

        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn only_exact_paid_confirms() {
        let confirmation = |status: &str| PaymentConfirmation {
            payment_status: status.to_string(),
            payment_details: None,
        };

        assert!(confirmation("paid").is_successful());
        assert!(!confirmation("Paid").is_successful());
        assert!(!confirmation("failed").is_successful());
    }
}

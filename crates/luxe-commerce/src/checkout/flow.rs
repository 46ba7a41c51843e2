//! Checkout flow state machine.

use serde::{Deserialize, Serialize};

use crate::checkout::{PaymentDetails, ShippingDetails};
use crate::CommerceError;

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Shipping address and contact details.
    #[default]
    Shipping,
    /// Card details.
    Payment,
    /// Order review before submission.
    Review,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Review => "Review",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    pub fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Review),
            CheckoutStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => None,
            CheckoutStep::Payment => Some(CheckoutStep::Shipping),
            CheckoutStep::Review => Some(CheckoutStep::Payment),
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    pub shipping: ShippingDetails,
    pub payment: PaymentDetails,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_shipping(&mut self, details: ShippingDetails) {
        self.shipping = details;
    }

    pub fn set_payment(&mut self, details: PaymentDetails) {
        self.payment = details;
    }

    /// What the current step still needs before advancing.
    pub fn missing_for_current_step(&self) -> Vec<&'static str> {
        match self.step {
            CheckoutStep::Shipping => self.shipping.missing_fields(),
            CheckoutStep::Payment => self.payment.missing_fields(),
            CheckoutStep::Review => Vec::new(),
        }
    }

    /// Advance to the next step once the current step's form is complete.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = self
            .step
            .next()
            .ok_or_else(|| CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "none".to_string(),
            })?;

        let missing = self.missing_for_current_step();
        if !missing.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(missing.join(", ")));
        }

        self.step = next;
        Ok(next)
    }

    /// Go back to the previous step. Entered details are kept.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = self
            .step
            .previous()
            .ok_or_else(|| CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "none".to_string(),
            })?;
        self.step = prev;
        Ok(prev)
    }

    pub fn is_ready_to_place(&self) -> bool {
        self.step == CheckoutStep::Review
            && self.shipping.is_complete()
            && self.payment.is_complete()
    }

    /// Steps already completed.
    pub fn progress(&self) -> u8 {
        self.step.number() - 1
    }

    /// Back to an empty shipping step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::details::tests::{payment, shipping};

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step, CheckoutStep::Shipping);
        assert_eq!(flow.progress(), 0);
    }

    #[test]
    fn test_advance_requires_details() {
        let mut flow = CheckoutFlow::new();

        let err = flow.advance().unwrap_err();
        assert!(matches!(
            err,
            CommerceError::CheckoutIncomplete(ref m) if m.starts_with("first name")
        ));
        assert_eq!(flow.step, CheckoutStep::Shipping);

        flow.set_shipping(shipping());
        assert_eq!(flow.advance(), Ok(CheckoutStep::Payment));

        let err = flow.advance().unwrap_err();
        assert_eq!(
            err,
            CommerceError::CheckoutIncomplete("card number, name on card, expiry, cvv".to_string())
        );

        flow.set_payment(payment());
        assert_eq!(flow.advance(), Ok(CheckoutStep::Review));
        assert!(flow.is_ready_to_place());
        assert_eq!(flow.progress(), 2);
    }

    #[test]
    fn test_cannot_advance_past_review() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping());
        flow.set_payment(payment());
        flow.advance().unwrap();
        flow.advance().unwrap();

        assert!(matches!(
            flow.advance(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
    }

    #[test]
    fn test_go_back() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.go_back().is_err());

        flow.set_shipping(shipping());
        flow.advance().unwrap();
        assert_eq!(flow.go_back(), Ok(CheckoutStep::Shipping));
        assert!(flow.shipping.is_complete());
    }

    #[test]
    fn test_reset() {
        let mut flow = CheckoutFlow::new();
        flow.set_shipping(shipping());
        flow.advance().unwrap();
        flow.reset();
        assert_eq!(flow, CheckoutFlow::new());
    }
}

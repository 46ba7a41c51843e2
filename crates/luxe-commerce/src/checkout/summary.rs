//! Order summary: subtotal, shipping, tax and total.

use serde::Serialize;

use crate::cart::CartManager;
use crate::config::StoreConfig;
use crate::money::Money;

/// Price breakdown shown in the cart and on the review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Money,
}

impl OrderSummary {
    pub fn for_cart(cart: &CartManager, config: &StoreConfig) -> Self {
        Self::for_subtotal(cart.get_cart_total(), config)
    }

    pub fn for_subtotal(subtotal: Money, config: &StoreConfig) -> Self {
        let threshold = Money::new(config.free_shipping_threshold_cents, subtotal.currency);
        let shipping = if subtotal.amount_cents > threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            Money::new(config.flat_shipping_rate_cents, subtotal.currency)
        };
        let tax = subtotal.percentage(config.tax_rate_percent);
        let total = subtotal.saturating_add(&shipping).saturating_add(&tax);

        Self {
            subtotal,
            shipping,
            tax,
            total,
            free_shipping_threshold: threshold,
        }
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// How much more the customer must spend to ship free, `None` once they
    /// qualify.
    pub fn amount_to_free_shipping(&self) -> Option<Money> {
        if self.has_free_shipping() {
            return None;
        }
        self.free_shipping_threshold
            .try_subtract(&self.subtotal)
            .filter(|remaining| !remaining.is_negative())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(cents: i64) -> OrderSummary {
        OrderSummary::for_subtotal(Money::usd(cents), &StoreConfig::default())
    }

    #[test]
    fn test_shipping_threshold_is_strict() {
        let at = summary(10_000);
        assert_eq!(at.shipping, Money::usd(1_500));
        assert_eq!(at.amount_to_free_shipping(), Some(Money::usd(0)));

        let above = summary(10_001);
        assert!(above.has_free_shipping());
        assert_eq!(above.amount_to_free_shipping(), None);

        let below = summary(4_550);
        assert_eq!(below.amount_to_free_shipping(), Some(Money::usd(5_450)));
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        // 8% of 189.99 = 15.1992
        let s = summary(18_999);
        assert_eq!(s.tax, Money::usd(1_520));
        assert_eq!(s.total, Money::usd(18_999 + 1_520));
    }

    #[test]
    fn test_total_includes_shipping() {
        let s = summary(4_550);
        assert_eq!(s.tax, Money::usd(364));
        assert_eq!(s.total.display(), "$64.14");
    }

    #[test]
    fn test_empty_cart_still_quotes_shipping() {
        let s = OrderSummary::for_cart(&CartManager::default(), &StoreConfig::default());
        assert_eq!(s.subtotal, Money::usd(0));
        assert_eq!(s.shipping, Money::usd(1_500));
        assert_eq!(s.total, Money::usd(1_500));
    }

    #[test]
    fn test_custom_rates() {
        let config = StoreConfig {
            tax_rate_percent: 0.0,
            flat_shipping_rate_cents: 999,
            free_shipping_threshold_cents: 5_000,
            ..StoreConfig::default()
        };
        let s = OrderSummary::for_subtotal(Money::usd(4_000), &config);
        assert_eq!(s.shipping, Money::usd(999));
        assert_eq!(s.tax, Money::usd(0));
    }
}

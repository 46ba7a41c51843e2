//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit so cart totals add up
//! exactly; `$10.00 x 2 + $25.50` is `4550` cents, never `45.4999..`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Ordering compares currency first, then amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Shorthand for US dollars in cents.
    pub fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a Money value from a decimal amount, rounding to the minor unit.
    ///
    /// ```
    /// use luxe_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(299.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 29999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_per_major() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_major() as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_unsigned())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{}{}", sign, self.display_unsigned())
    }

    fn display_unsigned(&self) -> String {
        let abs = self.amount_cents.unsigned_abs();
        let places = self.currency.decimal_places();
        if places == 0 {
            return abs.to_string();
        }
        let unit = self.currency.minor_per_major() as u64;
        format!(
            "{}.{:0width$}",
            abs / unit,
            abs % unit,
            width = places as usize
        )
    }

    /// Add another Money value, `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Subtract another Money value, `None` on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_sub(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by an integer factor, `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Checked addition reporting why it failed.
    pub fn checked_add(&self, other: &Money) -> Result<Money, CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        self.try_add(other).ok_or(CommerceError::Overflow)
    }

    /// Multiply by an integer, clamping at the `i64` bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Add without currency check, clamping at the `i64` bounds.
    ///
    /// Callers guarantee both sides share a currency.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by a decimal factor, rounding half away from zero.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Sum an iterator of Money values, `None` on mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

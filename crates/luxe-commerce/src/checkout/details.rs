//! Shipping and payment form details.

use serde::{Deserialize, Serialize};

/// Shipping step form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl ShippingDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip.trim(),
            self.country.trim()
        )
    }

    /// Names of the blank fields, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
            ("country", &self.country),
        ])
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Payment step form. Card data is only checked for presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDetails {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("card number", &self.card_number),
            ("name on card", &self.card_name),
            ("expiry", &self.expiry),
            ("cvv", &self.cvv),
        ])
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Card number with all but the last four digits hidden.
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let tail: String = digits.iter().skip(digits.len().saturating_sub(4)).collect();
        format!("•••• {}", tail)
    }
}

fn blank_fields(fields: &[(&'static str, &String)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn shipping() -> ShippingDetails {
        ShippingDetails {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            address: "12 Analytical Way".into(),
            city: "London".into(),
            state: "LDN".into(),
            zip: "N1 9GU".into(),
            country: "United Kingdom".into(),
        }
    }

    pub(crate) fn payment() -> PaymentDetails {
        PaymentDetails {
            card_number: "4242 4242 4242 4242".into(),
            card_name: "Ada Lovelace".into(),
            expiry: "12/28".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let mut details = shipping();
        assert!(details.is_complete());

        details.email = "  ".into();
        details.zip.clear();
        assert_eq!(details.missing_fields(), vec!["email", "zip"]);
        assert_eq!(PaymentDetails::default().missing_fields().len(), 4);
    }

    #[test]
    fn test_formatting() {
        let details = shipping();
        assert_eq!(details.full_name(), "Ada Lovelace");
        assert_eq!(
            details.one_line(),
            "12 Analytical Way, London, LDN N1 9GU, United Kingdom"
        );
        assert_eq!(payment().masked_card_number(), "•••• 4242");
    }
}

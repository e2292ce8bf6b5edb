//! Payment — card details captured at checkout and the resulting receipt.
//!
//! No real gateway is involved; these types only carry what the checkout form
//! collects and what a gateway adapter hands back.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::price::Price;
use crate::time::Timestamp;

/// Card fields from the payment form. All are required.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CardDetails {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cvv: String,
}

impl CardDetails {
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCardField`] naming the first blank
    /// field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("card number", &self.number),
            ("expiry date", &self.expiry),
            ("CVV", &self.cvv),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingCardField(name));
            }
        }
        Ok(())
    }

    /// Last four digits of the card number, ignoring spaces.
    #[must_use]
    pub fn last4(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("last4", &self.last4())
            .finish_non_exhaustive()
    }
}

/// What the checkout asks a gateway to charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub amount: Price,
    pub item_count: usize,
    pub card_last4: String,
}

/// Proof of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub reference: uuid::Uuid,
    pub amount: Price,
    pub card_last4: String,
    pub paid_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str, expiry: &str, cvv: &str) -> CardDetails {
        CardDetails {
            number: number.to_string(),
            expiry: expiry.to_string(),
            cvv: cvv.to_string(),
        }
    }

    #[test]
    fn should_accept_filled_card() {
        assert!(card("1234 5678 9012 3456", "12/28", "123").validate().is_ok());
    }

    #[test]
    fn should_name_first_missing_field() {
        assert_eq!(
            card("1234", " ", "").validate(),
            Err(ValidationError::MissingCardField("expiry date"))
        );
    }

    #[test]
    fn should_treat_missing_fields_as_blank() {
        let card: CardDetails = serde_json::from_str(r#"{"number": "4111"}"#).unwrap();
        assert_eq!(card.expiry, "");
        assert_eq!(
            card.validate(),
            Err(ValidationError::MissingCardField("expiry date"))
        );
    }

    #[test]
    fn should_extract_last_four_digits() {
        assert_eq!(card("1234 5678 9012 3456", "", "").last4(), "3456");
        assert_eq!(card("12", "", "").last4(), "12");
    }

    #[test]
    fn should_not_leak_card_number_in_debug_output() {
        let debug = format!("{:?}", card("1234 5678 9012 3456", "12/28", "123"));
        assert!(!debug.contains("5678"));
        assert!(!debug.contains("123\""));
    }
}

//! Rupee prices parsed from and rendered as formatted currency strings.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Currency symbol used for every price in the marketplace.
pub const CURRENCY_SYMBOL: &str = "₹";

/// A non-negative amount in rupees.
///
/// Parsed from strings such as `"₹299"` or `"₹1,299.50"` and displayed as
/// `₹299` / `₹1299.50` (no grouping, decimals only when there is a fraction).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(Decimal);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Build a price from a whole rupee amount.
    #[must_use]
    pub fn from_rupees(rupees: u64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// Parse a formatted currency string.
    ///
    /// The currency symbol, whitespace and `,` thousands separators are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] when nothing numeric is left,
    /// the number does not parse, or it is negative.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let cleaned: String = raw
            .trim()
            .trim_start_matches(CURRENCY_SYMBOL)
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != ',')
            .collect();

        let amount = Decimal::from_str(&cleaned)
            .map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::InvalidPrice(raw.to_string()));
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// This price multiplied by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalize();
        if normalized.fract().is_zero() {
            write!(f, "{CURRENCY_SYMBOL}{normalized}")
        } else {
            write!(f, "{CURRENCY_SYMBOL}{:.2}", self.0)
        }
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Price {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.to_string()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_rupee_string() {
        let price = Price::parse("₹299").unwrap();
        assert_eq!(price, Price::from_rupees(299));
    }

    #[test]
    fn should_ignore_thousands_separators_and_spaces() {
        let price = Price::parse(" ₹ 1,299 ").unwrap();
        assert_eq!(price, Price::from_rupees(1299));
    }

    #[test]
    fn should_parse_bare_number() {
        assert_eq!(Price::parse("199").unwrap(), Price::from_rupees(199));
    }

    #[test]
    fn should_reject_non_numeric_price() {
        assert_eq!(
            Price::parse("free"),
            Err(ValidationError::InvalidPrice("free".to_string()))
        );
    }

    #[test]
    fn should_reject_empty_price() {
        assert!(Price::parse("₹").is_err());
    }

    #[test]
    fn should_reject_negative_price() {
        assert!(Price::parse("-5").is_err());
    }

    #[test]
    fn should_display_whole_amount_without_decimals() {
        let total = Price::parse("₹299").unwrap() + Price::parse("₹199").unwrap();
        assert_eq!(total.to_string(), "₹498");
    }

    #[test]
    fn should_display_trailing_zero_decimals_as_whole_amount() {
        assert_eq!(Price::parse("₹450.00").unwrap().to_string(), "₹450");
    }

    #[test]
    fn should_display_fraction_with_two_decimals() {
        assert_eq!(Price::parse("₹12.5").unwrap().to_string(), "₹12.50");
    }

    #[test]
    fn should_multiply_by_quantity() {
        assert_eq!(Price::from_rupees(299).times(3), Price::from_rupees(897));
    }

    #[test]
    fn should_sum_prices() {
        let total: Price = [100, 200, 300].into_iter().map(Price::from_rupees).sum();
        assert_eq!(total, Price::from_rupees(600));
    }

    #[test]
    fn should_sum_empty_iterator_to_zero() {
        let total: Price = std::iter::empty().sum();
        assert!(total.is_zero());
        assert_eq!(total.to_string(), "₹0");
    }

    #[test]
    fn should_serialize_as_formatted_string() {
        let json = serde_json::to_string(&Price::from_rupees(299)).unwrap();
        assert_eq!(json, "\"₹299\"");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::from_rupees(299));
    }
}

//! Money type for deal prices.
//!
//! Amounts are held in minor units (pence) so that comparisons and discount
//! arithmetic never go through floating point. Catalog data arrives as plain
//! decimal numbers (`399.99`), which the [`decimal`] serde helpers convert.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "GBP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "£").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GBP => "\u{00a3}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, stored in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (pence, cents).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use deal_catalog::money::{Currency, Money};
    /// let price = Money::from_decimal(399.99, Currency::GBP);
    /// assert_eq!(price.amount_minor, 39999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / 100.0
    }

    /// Format as a display string (e.g., "£49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Whole-number percentage saved going from `original` down to `self`.
    ///
    /// Returns `None` when the currencies differ or `original` is not
    /// strictly greater than `self`.
    pub fn percent_off(&self, original: &Money) -> Option<u32> {
        if self.currency != original.currency || original.amount_minor <= self.amount_minor {
            return None;
        }
        let saved = (original.amount_minor - self.amount_minor) as f64;
        Some((saved / original.amount_minor as f64 * 100.0).round() as u32)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde helpers for prices written as bare decimal numbers in the default
/// currency.
pub mod decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::default()))
    }

    /// Same as the parent module for optional prices.
    pub mod option {
        use super::{Currency, Money};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            money: &Option<Money>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match money {
                Some(m) => serializer.serialize_some(&m.to_decimal()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Money>, D::Error> {
            let amount = Option::<f64>::deserialize(deserializer)?;
            Ok(amount.map(|a| Money::from_decimal(a, Currency::default())))
        }
    }
}

//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes accepted by the catalog.
///
/// The shop trades in Ghanaian cedi only; the enum keeps the wire format
/// honest (`"GHS"`) without falling back to bare strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    GHS,
}

impl CurrencyCode {
    /// The currency code as its wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GHS => "GHS",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A price with currency information.
///
/// Amounts are held as exact decimals; rounding happens only at display
/// boundaries, never mid-computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., cedis, not pesewas).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// The zero price in the given currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Multiply by a whole quantity, e.g. a cart line total.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency)
    }
}

impl fmt::Display for Price {
    /// Formats as `GHS 1250.00`, rounded to two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount.round_dp(2))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_decimals() {
        let price = Price::new(Decimal::from(100), CurrencyCode::GHS);
        assert_eq!(price.to_string(), "GHS 100.00");

        let price = Price::new(Decimal::new(999, 1), CurrencyCode::GHS);
        assert_eq!(price.to_string(), "GHS 99.90");
    }

    #[test]
    fn test_display_rounds_only_at_the_boundary() {
        let price = Price::new(Decimal::new(105, 3), CurrencyCode::GHS);
        assert_eq!(price.amount, Decimal::new(105, 3));
        assert!(price.to_string().starts_with("GHS 0.1"));
    }

    #[test]
    fn test_zero() {
        let price = Price::zero(CurrencyCode::GHS);
        assert_eq!(price.amount, Decimal::ZERO);
        assert_eq!(price.to_string(), "GHS 0.00");
    }

    #[test]
    fn test_times() {
        let price = Price::new(Decimal::new(125, 1), CurrencyCode::GHS);
        assert_eq!(price.times(4).amount, Decimal::from(50));
        assert_eq!(price.times(0).amount, Decimal::ZERO);
    }

    #[test]
    fn test_times_is_exact() {
        // 0.1 * 3 drifts under binary floats; decimals stay exact.
        let price = Price::new(Decimal::new(1, 1), CurrencyCode::GHS);
        assert_eq!(price.times(3).amount, Decimal::new(3, 1));
    }

    #[test]
    fn test_currency_code_wire_format() {
        assert_eq!(serde_json::to_string(&CurrencyCode::GHS).unwrap(), "\"GHS\"");
        let parsed: CurrencyCode = serde_json::from_str("\"GHS\"").unwrap();
        assert_eq!(parsed, CurrencyCode::GHS);
    }
}

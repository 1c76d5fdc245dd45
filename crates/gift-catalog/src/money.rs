//! Money type for displaying gift prices.
//!
//! Prices arrive as JSON floats. They are converted once into an integer
//! count of minor units so that formatting never depends on float printing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display currencies. The symbol is a fixed prefix chosen by
/// configuration; it is never derived from the gift data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    GBP,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "GBP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "£").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::GBP => "\u{00a3}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 2^63: the first magnitude that no longer fits in `amount_minor`.
const MINOR_UNIT_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A monetary value with currency.
///
/// Amounts are stored in minor units (pence, cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in minor currency units.
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

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit. Returns `None` for NaN, infinities, and amounts whose
    /// minor units do not fit in an `i64`.
    ///
    /// ```
    /// use gift_catalog::money::{Currency, Money};
    /// let price = Money::from_decimal(9.5, Currency::GBP).unwrap();
    /// assert_eq!(price.amount_minor, 950);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let minor = (amount * 100.0).round();
        if !(-MINOR_UNIT_LIMIT..MINOR_UNIT_LIMIT).contains(&minor) {
            return None;
        }
        Some(Self::new(minor as i64, currency))
    }

    /// Format as a display string with exactly two decimals (e.g., "£9.50").
    pub fn display(&self) -> String {
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let magnitude = self.amount_minor.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol(),
            magnitude / 100,
            magnitude % 100
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

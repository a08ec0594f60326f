//! Asking-price representation using decimal arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Fixed currency label shown next to every price.
pub const CURRENCY_LABEL: &str = "GHS";

/// A listing's asking price.
///
/// Always non-negative: construction clamps negative, unparseable, and
/// non-finite input to zero rather than carrying the fault into display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount, clamping negatives to zero.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            Self(Decimal::ZERO)
        } else {
            Self(amount)
        }
    }

    /// Parse a price from user input.
    ///
    /// Empty, unparseable, and negative input all become zero.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<Decimal>()
            .map_or(Self::ZERO, Self::new)
    }

    /// Create a price from a float, clamping NaN, infinities, and
    /// negatives to zero.
    #[must_use]
    pub fn from_f64(amount: f64) -> Self {
        Decimal::from_f64_retain(amount).map_or(Self::ZERO, Self::new)
    }

    /// The decimal amount in major units.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount as a float, for wire formats that carry doubles.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Format for display with the fixed currency label and exactly two
    /// fraction digits (e.g., "GHS 150.00").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{CURRENCY_LABEL} {:.2}", self.0.round_dp(2))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

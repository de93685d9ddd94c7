use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rounding scales used by billing amounts
///
/// All rounding is banker's rounding (round half to even), which is what
/// `Decimal::round_dp` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Two decimal places (quote amounts, trade-ins, annuity payments)
    Cents,
    /// No decimal places (service invoice totals)
    WholeUnit,
}

impl Precision {
    /// Returns the decimal scale for this precision
    /// - Cents: 2
    /// - WholeUnit: 0
    pub fn scale(&self) -> u32 {
        match self {
            Precision::Cents => 2,
            Precision::WholeUnit => 0,
        }
    }

    /// Rounds a decimal value to this precision
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        let scale = self.scale();
        if scale == 0 {
            format!("{}", self.round(amount))
        } else {
            format!("{:.width$}", self.round(amount), width = scale as usize)
        }
    }
}

/// Rounds to two decimal places.
pub fn round_cents(amount: Decimal) -> Decimal {
    Precision::Cents.round(amount)
}

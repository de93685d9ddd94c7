use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{BillingError, Result};

/// A tax rate expressed as a decimal fraction in `[0, 1]`
///
/// `0.05` is a 5% tax. The bound is checked on every construction, so a
/// `TaxRate` held anywhere in the crate is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Create a tax rate, rejecting values outside `[0, 1]`
    pub fn new(rate: Decimal) -> Result<Self> {
        Self::for_field("tax_rate", rate)
    }

    /// Create a tax rate, reporting failures against `field`
    pub fn for_field(field: &'static str, rate: Decimal) -> Result<Self> {
        if rate < Decimal::ZERO {
            return Err(BillingError::out_of_range(
                field,
                format!("cannot be less than 0, got {}", rate),
            ));
        }

        if rate > Decimal::ONE {
            return Err(BillingError::out_of_range(
                field,
                format!("cannot be greater than 1, got {}", rate),
            ));
        }

        Ok(Self(rate))
    }

    /// Zero tax rate.
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The rate as a decimal fraction
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Build a rate from basis points for use in constants
    ///
    /// # Panics
    /// If `bps` exceeds 10 000 (100%). In a `const` item that is a compile error.
    pub(crate) const fn from_bps(bps: u32) -> Self {
        assert!(bps <= 10_000, "tax rate cannot exceed 10000 basis points");
        Self(Decimal::from_parts(bps, 0, 0, false, 4))
    }

    /// Unrounded tax on `amount`: `amount × rate`
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount * self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = BillingError;

    fn try_from(rate: Decimal) -> Result<Self> {
        Self::new(rate)
    }
}

impl FromStr for TaxRate {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self> {
        let rate = Decimal::from_str(s.trim())
            .map_err(|_| BillingError::out_of_range("tax_rate", format!("not a decimal: {}", s)))?;
        Self::new(rate)
    }
}

impl<'de> Deserialize<'de> for TaxRate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rate = <Decimal as Deserialize>::deserialize(deserializer)?;
        TaxRate::new(rate).map_err(serde::de::Error::custom)
    }
}

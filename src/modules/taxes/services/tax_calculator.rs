use rust_decimal::Decimal;

use crate::core::{BillingError, Result};
use crate::modules::taxes::models::TaxRate;

/// TaxCalculator computes tax charges and the totals built from them
///
/// A `TaxRate` never exceeds 1, so a single charge is never larger than its
/// base. Sums of a base and its charges can still overflow `Decimal`, which
/// is what the checked helpers here guard.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Unrounded tax on `base`: `base × rate`
    pub fn calculate_tax(&self, base: Decimal, rate: TaxRate) -> Decimal {
        rate.apply(base)
    }

    /// `base + taxes`, or `OutOfRange` on `field` if the sum does not fit
    pub fn checked_total(&self, field: &'static str, base: Decimal, taxes: &[Decimal]) -> Result<Decimal> {
        taxes
            .iter()
            .try_fold(base, |total, tax| total.checked_add(*tax))
            .ok_or_else(|| BillingError::out_of_range(field, format!("total overflows for {}", base)))
    }

    /// Check that `base` can carry `tax_count` charges at the 100% ceiling
    ///
    /// Once this holds, every total built from `base` and that many charges
    /// fits, whatever valid rates are set later.
    pub fn ensure_taxable(&self, field: &'static str, base: Decimal, tax_count: u32) -> Result<()> {
        base.checked_mul(Decimal::from(tax_count + 1))
            .map(|_| ())
            .ok_or_else(|| BillingError::out_of_range(field, format!("{} is too large to tax", base)))
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

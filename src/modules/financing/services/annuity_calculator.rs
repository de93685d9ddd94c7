use rust_decimal::{Decimal, MathematicalOps};
use tracing::debug;

use crate::core::{round_cents, BillingError, Result};

/// Calculator for fixed periodic payments on an ordinary annuity
///
/// Future value is fixed at zero and payments fall at the end of each
/// period. There is no annuity-due or partial-period support.
pub struct AnnuityCalculator;

impl AnnuityCalculator {
    /// Fixed payment that amortizes `present_value` over `number_of_periods`
    ///
    /// `rate × PV × (1 + rate)^n / ((1 + rate)^n − 1)`, or `PV / n` when the
    /// rate is zero. Rounded to cents.
    ///
    /// # Errors
    /// * `OutOfRange` if `rate` is outside `[0, 1]`, `number_of_periods` is 0,
    ///   `present_value <= 0`, or the result does not fit in a `Decimal`
    pub fn payment(rate: Decimal, number_of_periods: u32, present_value: Decimal) -> Result<Decimal> {
        Self::validate(rate, number_of_periods, present_value)?;

        let periods = Decimal::from(number_of_periods);
        let payment = if rate.is_zero() {
            present_value / periods
        } else {
            let growth = (Decimal::ONE + rate)
                .checked_powu(u64::from(number_of_periods))
                .ok_or_else(|| {
                    BillingError::out_of_range(
                        "number_of_periods",
                        format!("(1 + {})^{} overflows", rate, number_of_periods),
                    )
                })?;

            rate.checked_mul(present_value)
                .and_then(|scaled| scaled.checked_mul(growth))
                .and_then(|numerator| numerator.checked_div(growth - Decimal::ONE))
                .ok_or_else(|| {
                    BillingError::out_of_range(
                        "present_value",
                        format!("payment on {} overflows", present_value),
                    )
                })?
        };

        let payment = round_cents(payment);
        debug!(
            rate = %rate,
            number_of_periods,
            present_value = %present_value,
            payment = %payment,
            "annuity payment calculated"
        );

        Ok(payment)
    }

    fn validate(rate: Decimal, number_of_periods: u32, present_value: Decimal) -> Result<()> {
        if rate < Decimal::ZERO {
            return Err(BillingError::out_of_range("rate", "cannot be less than 0"));
        }

        if rate > Decimal::ONE {
            return Err(BillingError::out_of_range("rate", "cannot be greater than 1"));
        }

        if number_of_periods == 0 {
            return Err(BillingError::out_of_range(
                "number_of_periods",
                "cannot be less than or equal to 0",
            ));
        }

        if present_value <= Decimal::ZERO {
            return Err(BillingError::out_of_range(
                "present_value",
                format!("cannot be less than or equal to 0, got {}", present_value),
            ));
        }

        Ok(())
    }
}

/// Shorthand for [`AnnuityCalculator::payment`].
pub fn annuity_payment(rate: Decimal, number_of_periods: u32, present_value: Decimal) -> Result<Decimal> {
    AnnuityCalculator::payment(rate, number_of_periods, present_value)
}

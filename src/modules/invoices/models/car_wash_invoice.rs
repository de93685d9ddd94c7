// Car wash invoice
//
// Charges a wash package plus an optional fragrance. Car washes are exempt
// from provincial sales tax, so only GST is charged.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::TaxDefaults;
use crate::core::{BillingError, Result};
use crate::modules::invoices::models::invoice::{Invoice, InvoiceRates};
use crate::modules::taxes::TaxCalculator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarWashInvoice {
    rates: InvoiceRates,
    package_cost: Decimal,
    fragrance_cost: Decimal,
}

impl CarWashInvoice {
    /// Create a car wash invoice with zero package and fragrance costs
    pub fn new(provincial_sales_tax_rate: Decimal, goods_and_services_tax_rate: Decimal) -> Result<Self> {
        let rates = InvoiceRates::new(provincial_sales_tax_rate, goods_and_services_tax_rate)?;

        Ok(Self {
            rates,
            package_cost: Decimal::ZERO,
            fragrance_cost: Decimal::ZERO,
        })
    }

    /// Create a car wash invoice with its costs
    ///
    /// # Errors
    /// * `OutOfRange` if either rate is outside `[0, 1]`, either cost is negative,
    ///   or the costs are too large to total
    pub fn with_costs(
        provincial_sales_tax_rate: Decimal,
        goods_and_services_tax_rate: Decimal,
        package_cost: Decimal,
        fragrance_cost: Decimal,
    ) -> Result<Self> {
        let rates = InvoiceRates::new(provincial_sales_tax_rate, goods_and_services_tax_rate)?;
        Self::validate_cost("package_cost", package_cost)?;
        Self::validate_cost("fragrance_cost", fragrance_cost)?;
        Self::validate_subtotal("fragrance_cost", package_cost, fragrance_cost)?;

        Ok(Self {
            rates,
            package_cost,
            fragrance_cost,
        })
    }

    /// Create a zero-cost invoice using configured default rates
    pub fn from_config(defaults: &TaxDefaults) -> Self {
        Self {
            rates: InvoiceRates::from_rates(
                defaults.provincial_sales_tax_rate,
                defaults.goods_and_services_tax_rate,
            ),
            package_cost: Decimal::ZERO,
            fragrance_cost: Decimal::ZERO,
        }
    }

    pub fn package_cost(&self) -> Decimal {
        self.package_cost
    }

    pub fn fragrance_cost(&self) -> Decimal {
        self.fragrance_cost
    }

    pub fn set_package_cost(&mut self, cost: Decimal) -> Result<()> {
        Self::validate_cost("package_cost", cost)?;
        Self::validate_subtotal("package_cost", cost, self.fragrance_cost)?;
        self.package_cost = cost;
        debug!(package_cost = %cost, "car wash package cost updated");
        Ok(())
    }

    pub fn set_fragrance_cost(&mut self, cost: Decimal) -> Result<()> {
        Self::validate_cost("fragrance_cost", cost)?;
        Self::validate_subtotal("fragrance_cost", self.package_cost, cost)?;
        self.fragrance_cost = cost;
        debug!(fragrance_cost = %cost, "car wash fragrance cost updated");
        Ok(())
    }

    fn validate_cost(field: &'static str, cost: Decimal) -> Result<()> {
        if cost < Decimal::ZERO {
            return Err(BillingError::out_of_range(
                field,
                format!("cannot be less than 0, got {}", cost),
            ));
        }

        Ok(())
    }

    // GST is the only charge, so the subtotal must leave room for one tax
    fn validate_subtotal(field: &'static str, package_cost: Decimal, fragrance_cost: Decimal) -> Result<()> {
        let subtotal = package_cost
            .checked_add(fragrance_cost)
            .ok_or_else(|| BillingError::out_of_range(field, "subtotal overflows"))?;
        TaxCalculator::new().ensure_taxable(field, subtotal, 1)
    }
}

impl Invoice for CarWashInvoice {
    fn rates(&self) -> &InvoiceRates {
        &self.rates
    }

    fn rates_mut(&mut self) -> &mut InvoiceRates {
        &mut self.rates
    }

    fn subtotal(&self) -> Decimal {
        self.package_cost + self.fragrance_cost
    }

    /// Always zero: car washes are exempt
    fn provincial_sales_tax_charged(&self) -> Decimal {
        Decimal::ZERO
    }

    fn goods_and_services_tax_charged(&self) -> Decimal {
        TaxCalculator::new().calculate_tax(self.subtotal(), self.rates.goods_and_services_tax_rate())
    }
}

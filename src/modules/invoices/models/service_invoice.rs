// Service invoice
//
// Accumulates labour, parts and material charges. Labour is exempt from
// provincial sales tax; GST applies to everything. The total is rounded to
// a whole currency unit.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::TaxDefaults;
use crate::core::{BillingError, Precision, Result};
use crate::modules::invoices::models::cost_type::CostType;
use crate::modules::invoices::models::invoice::{charged_total, Invoice, InvoiceRates};
use crate::modules::taxes::TaxCalculator;

/// Mechanical service invoice
///
/// Costs only grow, through [`ServiceInvoice::add_cost`]. There is no reset.
/// An instance is meant to have a single owner; callers sharing one across
/// threads must provide their own locking around `add_cost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInvoice {
    rates: InvoiceRates,
    labour_cost: Decimal,
    parts_cost: Decimal,
    material_cost: Decimal,
}

impl ServiceInvoice {
    pub fn new(provincial_sales_tax_rate: Decimal, goods_and_services_tax_rate: Decimal) -> Result<Self> {
        let rates = InvoiceRates::new(provincial_sales_tax_rate, goods_and_services_tax_rate)?;
        Ok(Self::with_rates(rates))
    }

    /// Create an empty invoice using configured default rates
    pub fn from_config(defaults: &TaxDefaults) -> Self {
        Self::with_rates(InvoiceRates::from_rates(
            defaults.provincial_sales_tax_rate,
            defaults.goods_and_services_tax_rate,
        ))
    }

    fn with_rates(rates: InvoiceRates) -> Self {
        Self {
            rates,
            labour_cost: Decimal::ZERO,
            parts_cost: Decimal::ZERO,
            material_cost: Decimal::ZERO,
        }
    }

    pub fn labour_cost(&self) -> Decimal {
        self.labour_cost
    }

    pub fn parts_cost(&self) -> Decimal {
        self.parts_cost
    }

    pub fn material_cost(&self) -> Decimal {
        self.material_cost
    }

    /// Accumulated cost for one category
    pub fn cost_of(&self, cost_type: CostType) -> Decimal {
        match cost_type {
            CostType::Labour => self.labour_cost,
            CostType::Material => self.material_cost,
            CostType::Part => self.parts_cost,
        }
    }

    /// Add `amount` to the running cost for `cost_type`
    ///
    /// # Errors
    /// * `OutOfRange` if `amount` is zero or negative, or if the invoice
    ///   could no longer be totalled with it added
    pub fn add_cost(&mut self, cost_type: CostType, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(BillingError::out_of_range(
                "amount",
                format!("cannot be less than or equal to 0, got {}", amount),
            ));
        }

        let too_large = || BillingError::out_of_range("amount", format!("too large to add, got {}", amount));
        let subtotal = self.subtotal().checked_add(amount).ok_or_else(too_large)?;
        // PST and GST are both charged on at most the whole subtotal
        TaxCalculator::new().ensure_taxable("amount", subtotal, 2)?;

        let running = match cost_type {
            CostType::Labour => &mut self.labour_cost,
            CostType::Material => &mut self.material_cost,
            CostType::Part => &mut self.parts_cost,
        };
        *running = running.checked_add(amount).ok_or_else(too_large)?;

        debug!(
            cost_type = %cost_type,
            amount = %amount,
            running_total = %*running,
            "service cost added"
        );

        Ok(())
    }

    /// Portion of the subtotal that carries provincial sales tax
    pub fn provincially_taxable_amount(&self) -> Decimal {
        CostType::ALL
            .iter()
            .filter(|cost_type| cost_type.is_provincially_taxed())
            .map(|cost_type| self.cost_of(*cost_type))
            .sum()
    }
}

impl Invoice for ServiceInvoice {
    fn rates(&self) -> &InvoiceRates {
        &self.rates
    }

    fn rates_mut(&mut self) -> &mut InvoiceRates {
        &mut self.rates
    }

    fn subtotal(&self) -> Decimal {
        self.labour_cost + self.material_cost + self.parts_cost
    }

    /// `(parts + material) × PST rate`; labour is never included
    fn provincial_sales_tax_charged(&self) -> Decimal {
        TaxCalculator::new().calculate_tax(
            self.provincially_taxable_amount(),
            self.rates.provincial_sales_tax_rate(),
        )
    }

    fn goods_and_services_tax_charged(&self) -> Decimal {
        TaxCalculator::new().calculate_tax(self.subtotal(), self.rates.goods_and_services_tax_rate())
    }

    /// Rounded to a whole currency unit
    fn total(&self) -> Decimal {
        Precision::WholeUnit.round(charged_total(self))
    }
}

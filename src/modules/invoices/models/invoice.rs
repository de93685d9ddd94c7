// Shared invoice contract
//
// An invoice carries a provincial sales tax (PST) rate and a goods and
// services tax (GST) rate. Each invoice kind supplies its own subtotal and
// tax charges; the total is derived from those three on every read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Result;
use crate::modules::taxes::TaxRate;

/// The pair of tax rates every invoice holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceRates {
    provincial_sales_tax_rate: TaxRate,
    goods_and_services_tax_rate: TaxRate,
}

impl InvoiceRates {
    /// Validate both raw rates; nothing is built if either is outside `[0, 1]`
    pub fn new(provincial_sales_tax_rate: Decimal, goods_and_services_tax_rate: Decimal) -> Result<Self> {
        let provincial_sales_tax_rate =
            TaxRate::for_field("provincial_sales_tax_rate", provincial_sales_tax_rate)?;
        let goods_and_services_tax_rate =
            TaxRate::for_field("goods_and_services_tax_rate", goods_and_services_tax_rate)?;

        Ok(Self::from_rates(
            provincial_sales_tax_rate,
            goods_and_services_tax_rate,
        ))
    }

    /// Build from already validated rates
    pub fn from_rates(provincial_sales_tax_rate: TaxRate, goods_and_services_tax_rate: TaxRate) -> Self {
        Self {
            provincial_sales_tax_rate,
            goods_and_services_tax_rate,
        }
    }

    pub fn provincial_sales_tax_rate(&self) -> TaxRate {
        self.provincial_sales_tax_rate
    }

    pub fn goods_and_services_tax_rate(&self) -> TaxRate {
        self.goods_and_services_tax_rate
    }

    pub fn set_provincial_sales_tax_rate(&mut self, rate: Decimal) -> Result<()> {
        self.provincial_sales_tax_rate = TaxRate::for_field("provincial_sales_tax_rate", rate)?;
        debug!(rate = %rate, "provincial sales tax rate updated");
        Ok(())
    }

    pub fn set_goods_and_services_tax_rate(&mut self, rate: Decimal) -> Result<()> {
        self.goods_and_services_tax_rate =
            TaxRate::for_field("goods_and_services_tax_rate", rate)?;
        debug!(rate = %rate, "goods and services tax rate updated");
        Ok(())
    }
}

/// Capability set shared by car wash and service invoices
pub trait Invoice {
    fn rates(&self) -> &InvoiceRates;

    fn rates_mut(&mut self) -> &mut InvoiceRates;

    /// Sum of all charges before tax
    fn subtotal(&self) -> Decimal;

    /// PST owed on this invoice
    fn provincial_sales_tax_charged(&self) -> Decimal;

    /// GST owed on this invoice
    fn goods_and_services_tax_charged(&self) -> Decimal;

    /// `subtotal + PST + GST`, unrounded unless the invoice kind says otherwise
    fn total(&self) -> Decimal {
        charged_total(self)
    }

    fn provincial_sales_tax_rate(&self) -> Decimal {
        self.rates().provincial_sales_tax_rate().value()
    }

    fn goods_and_services_tax_rate(&self) -> Decimal {
        self.rates().goods_and_services_tax_rate().value()
    }

    fn set_provincial_sales_tax_rate(&mut self, rate: Decimal) -> Result<()> {
        self.rates_mut().set_provincial_sales_tax_rate(rate)
    }

    fn set_goods_and_services_tax_rate(&mut self, rate: Decimal) -> Result<()> {
        self.rates_mut().set_goods_and_services_tax_rate(rate)
    }

    /// Snapshot of the derived amounts at the current field values
    fn summary(&self) -> InvoiceSummary {
        InvoiceSummary {
            subtotal: self.subtotal(),
            provincial_sales_tax_charged: self.provincial_sales_tax_charged(),
            goods_and_services_tax_charged: self.goods_and_services_tax_charged(),
            total: self.total(),
        }
    }
}

/// `subtotal + provincial_sales_tax_charged + goods_and_services_tax_charged`
pub fn charged_total<I: Invoice + ?Sized>(invoice: &I) -> Decimal {
    invoice.subtotal()
        + invoice.provincial_sales_tax_charged()
        + invoice.goods_and_services_tax_charged()
}

/// Invoice amounts for display or hand-off to a hosting application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub subtotal: Decimal,
    pub provincial_sales_tax_charged: Decimal,
    pub goods_and_services_tax_charged: Decimal,
    pub total: Decimal,
}

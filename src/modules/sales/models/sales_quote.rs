// Vehicle sales quote
//
// Derived chain, each step rounded to cents at its own level:
//   accessories_cost, exterior_finish_cost  (price tables)
//   subtotal   = vehicle_sale_price + accessories_cost + exterior_finish_cost
//   sales_tax  = subtotal × sales_tax_rate
//   total      = subtotal + sales_tax
//   amount_due = total - trade_in_amount
//
// Every step is recomputed from the current fields on each read.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::config::TaxDefaults;
use crate::core::{round_cents, BillingError, Result};
use crate::modules::sales::models::accessories::Accessories;
use crate::modules::sales::models::exterior_finish::ExteriorFinish;
use crate::modules::taxes::{TaxCalculator, TaxRate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesQuote {
    vehicle_sale_price: Decimal,
    trade_in_amount: Decimal,
    sales_tax_rate: TaxRate,
    accessories_chosen: Accessories,
    exterior_finish_chosen: ExteriorFinish,
}

impl SalesQuote {
    /// Create a quote with no accessories and no exterior finish
    ///
    /// # Errors
    /// * `OutOfRange` if `vehicle_sale_price <= 0`, `trade_in_amount < 0`,
    ///   or `sales_tax_rate` is outside `[0, 1]`
    pub fn new(vehicle_sale_price: Decimal, trade_in_amount: Decimal, sales_tax_rate: Decimal) -> Result<Self> {
        Self::with_options(
            vehicle_sale_price,
            trade_in_amount,
            sales_tax_rate,
            Accessories::None,
            ExteriorFinish::None,
        )
    }

    /// Create a quote with chosen accessories and exterior finish
    pub fn with_options(
        vehicle_sale_price: Decimal,
        trade_in_amount: Decimal,
        sales_tax_rate: Decimal,
        accessories_chosen: Accessories,
        exterior_finish_chosen: ExteriorFinish,
    ) -> Result<Self> {
        let sales_tax_rate = TaxRate::for_field("sales_tax_rate", sales_tax_rate)?;
        Self::build(
            vehicle_sale_price,
            trade_in_amount,
            sales_tax_rate,
            accessories_chosen,
            exterior_finish_chosen,
        )
    }

    /// Create a quote taxed at the configured default sales tax rate
    pub fn from_config(
        vehicle_sale_price: Decimal,
        trade_in_amount: Decimal,
        defaults: &TaxDefaults,
    ) -> Result<Self> {
        Self::build(
            vehicle_sale_price,
            trade_in_amount,
            defaults.sales_tax_rate,
            Accessories::None,
            ExteriorFinish::None,
        )
    }

    fn build(
        vehicle_sale_price: Decimal,
        trade_in_amount: Decimal,
        sales_tax_rate: TaxRate,
        accessories_chosen: Accessories,
        exterior_finish_chosen: ExteriorFinish,
    ) -> Result<Self> {
        Self::validate_sale_price(vehicle_sale_price)?;
        Self::validate_trade_in(trade_in_amount)?;

        Ok(Self {
            vehicle_sale_price,
            trade_in_amount: round_cents(trade_in_amount),
            sales_tax_rate,
            accessories_chosen,
            exterior_finish_chosen,
        })
    }

    pub fn vehicle_sale_price(&self) -> Decimal {
        self.vehicle_sale_price
    }

    /// Trade-in credit, always held at two decimal places
    pub fn trade_in_amount(&self) -> Decimal {
        self.trade_in_amount
    }

    pub fn sales_tax_rate(&self) -> Decimal {
        self.sales_tax_rate.value()
    }

    pub fn accessories_chosen(&self) -> Accessories {
        self.accessories_chosen
    }

    pub fn exterior_finish_chosen(&self) -> ExteriorFinish {
        self.exterior_finish_chosen
    }

    pub fn set_vehicle_sale_price(&mut self, price: Decimal) -> Result<()> {
        Self::validate_sale_price(price)?;
        self.vehicle_sale_price = price;
        debug!(vehicle_sale_price = %price, "vehicle sale price updated");
        Ok(())
    }

    /// Stores the trade-in rounded to cents
    pub fn set_trade_in_amount(&mut self, amount: Decimal) -> Result<()> {
        Self::validate_trade_in(amount)?;
        self.trade_in_amount = round_cents(amount);
        debug!(trade_in_amount = %self.trade_in_amount, "trade-in amount updated");
        Ok(())
    }

    pub fn set_sales_tax_rate(&mut self, rate: Decimal) -> Result<()> {
        self.sales_tax_rate = TaxRate::for_field("sales_tax_rate", rate)?;
        debug!(sales_tax_rate = %rate, "sales tax rate updated");
        Ok(())
    }

    /// Any declared tag is accepted, including the unpriced `All`
    pub fn set_accessories_chosen(&mut self, accessories: Accessories) {
        self.accessories_chosen = accessories;
        debug!(accessories = %accessories, "accessories updated");
    }

    pub fn set_exterior_finish_chosen(&mut self, finish: ExteriorFinish) {
        self.exterior_finish_chosen = finish;
        debug!(exterior_finish = %finish, "exterior finish updated");
    }

    /// # Errors
    /// * `InvalidCategory` when the chosen accessories have no price
    pub fn accessories_cost(&self) -> Result<Decimal> {
        Ok(round_cents(self.accessories_chosen.price()?))
    }

    pub fn exterior_finish_cost(&self) -> Decimal {
        round_cents(self.exterior_finish_chosen.price())
    }

    /// # Errors
    /// * `InvalidCategory` when the chosen accessories have no price
    /// * `OutOfRange` when the sale price is too large to add the options to
    pub fn subtotal(&self) -> Result<Decimal> {
        let subtotal = TaxCalculator::new().checked_total(
            "subtotal",
            self.vehicle_sale_price,
            &[self.accessories_cost()?, self.exterior_finish_cost()],
        )?;
        Ok(round_cents(subtotal))
    }

    pub fn sales_tax(&self) -> Result<Decimal> {
        let tax = TaxCalculator::new().calculate_tax(self.subtotal()?, self.sales_tax_rate);
        Ok(round_cents(tax))
    }

    pub fn total(&self) -> Result<Decimal> {
        let total = TaxCalculator::new().checked_total("total", self.subtotal()?, &[self.sales_tax()?])?;
        Ok(round_cents(total))
    }

    /// Total less trade-in; negative when the trade-in exceeds the total
    pub fn amount_due(&self) -> Result<Decimal> {
        let amount_due = self
            .total()?
            .checked_sub(self.trade_in_amount)
            .ok_or_else(|| BillingError::out_of_range("amount_due", "difference overflows"))?;
        Ok(round_cents(amount_due))
    }

    /// Snapshot of the full derived chain
    pub fn summary(&self) -> Result<SalesQuoteSummary> {
        Ok(SalesQuoteSummary {
            vehicle_sale_price: self.vehicle_sale_price,
            accessories_cost: self.accessories_cost()?,
            exterior_finish_cost: self.exterior_finish_cost(),
            subtotal: self.subtotal()?,
            sales_tax: self.sales_tax()?,
            total: self.total()?,
            trade_in_amount: self.trade_in_amount,
            amount_due: self.amount_due()?,
        })
    }

    fn validate_sale_price(price: Decimal) -> Result<()> {
        if price <= Decimal::ZERO {
            return Err(BillingError::out_of_range(
                "vehicle_sale_price",
                format!("cannot be less than or equal to 0, got {}", price),
            ));
        }

        Ok(())
    }

    fn validate_trade_in(amount: Decimal) -> Result<()> {
        if amount < Decimal::ZERO {
            return Err(BillingError::out_of_range(
                "trade_in_amount",
                format!("cannot be less than 0, got {}", amount),
            ));
        }

        Ok(())
    }
}

/// Sales quote amounts for display or hand-off to a hosting application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesQuoteSummary {
    pub vehicle_sale_price: Decimal,
    pub accessories_cost: Decimal,
    pub exterior_finish_cost: Decimal,
    pub subtotal: Decimal,
    pub sales_tax: Decimal,
    pub total: Decimal,
    pub trade_in_amount: Decimal,
    pub amount_due: Decimal,
}

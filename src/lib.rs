//! Automotive billing calculations
//!
//! Car wash and service invoices, vehicle sales quotes, and the annuity
//! payment used to finance a purchase. Every type is a pure, synchronous
//! value calculator over `rust_decimal::Decimal`.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{BillingError, Precision, Result};
pub use modules::financing;
pub use modules::invoices;
pub use modules::sales;
pub use modules::taxes;

pub use modules::financing::{annuity_payment, AnnuityCalculator};
pub use modules::invoices::{
    CarWashInvoice, CostType, Invoice, InvoiceRates, InvoiceSummary, ServiceInvoice,
};
pub use modules::sales::{Accessories, ExteriorFinish, SalesQuote, SalesQuoteSummary};
pub use modules::taxes::{TaxCalculator, TaxRate};

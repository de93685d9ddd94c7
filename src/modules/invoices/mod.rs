pub mod models;

pub use models::{
    charged_total, CarWashInvoice, CostType, Invoice, InvoiceRates, InvoiceSummary, ServiceInvoice,
};

mod car_wash_invoice;
mod cost_type;
mod invoice;
mod service_invoice;

pub use car_wash_invoice::CarWashInvoice;
pub use cost_type::CostType;
pub use invoice::{charged_total, Invoice, InvoiceRates, InvoiceSummary};
pub use service_invoice::ServiceInvoice;

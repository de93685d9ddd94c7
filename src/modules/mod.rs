pub mod financing;
pub mod invoices;
pub mod sales;
pub mod taxes;

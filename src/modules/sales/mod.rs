pub mod models;

pub use models::{Accessories, ExteriorFinish, SalesQuote, SalesQuoteSummary};

mod accessories;
mod exterior_finish;
mod sales_quote;

pub use accessories::Accessories;
pub use exterior_finish::ExteriorFinish;
pub use sales_quote::{SalesQuote, SalesQuoteSummary};

pub mod error;
pub mod money;
pub mod telemetry;

pub use error::{BillingError, Result};
pub use money::{round_cents, Precision};

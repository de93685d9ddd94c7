pub mod services;

pub use services::{annuity_payment, AnnuityCalculator};

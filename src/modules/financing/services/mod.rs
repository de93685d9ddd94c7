mod annuity_calculator;

pub use annuity_calculator::{annuity_payment, AnnuityCalculator};

mod tax_rate;

pub use tax_rate::TaxRate;

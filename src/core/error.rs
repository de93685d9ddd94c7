/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, BillingError>;

/// Main billing error type
///
/// Every failure is raised synchronously at the point of construction,
/// assignment or lookup. Nothing is applied when an error is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A numeric input violates its documented bound
    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },

    /// A category tag is not among the defined set, or has no price
    #[error("{field} has an invalid category: {value}")]
    InvalidCategory { field: &'static str, value: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl BillingError {
    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        BillingError::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_category(field: &'static str, value: impl ToString) -> Self {
        BillingError::InvalidCategory {
            field,
            value: value.to_string(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        BillingError::Configuration(msg.into())
    }

    /// True for the out-of-range error kind
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, BillingError::OutOfRange { .. })
    }

    /// True for the invalid-category error kind
    pub fn is_invalid_category(&self) -> bool {
        matches!(self, BillingError::InvalidCategory { .. })
    }
}

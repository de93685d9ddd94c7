use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{BillingError, Result};
use crate::modules::sales::models::accessories::normalize_tag;

/// Exterior finish chosen on a sales quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExteriorFinish {
    #[default]
    None,
    Standard,
    Pearlized,
    Custom,
}

impl ExteriorFinish {
    pub const ALL_TAGS: [ExteriorFinish; 4] = [
        ExteriorFinish::None,
        ExteriorFinish::Standard,
        ExteriorFinish::Pearlized,
        ExteriorFinish::Custom,
    ];

    /// Every finish has a table entry
    pub fn price(&self) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Standard => Decimal::new(20202, 2),
            Self::Pearlized => Decimal::new(40404, 2),
            Self::Custom => Decimal::new(60606, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Pearlized => "pearlized",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ExteriorFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExteriorFinish {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_tag(s);
        Self::ALL_TAGS
            .iter()
            .copied()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| BillingError::invalid_category("exterior_finish_chosen", s))
    }
}

impl TryFrom<i32> for ExteriorFinish {
    type Error = BillingError;

    fn try_from(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL_TAGS.get(index).copied())
            .ok_or_else(|| BillingError::invalid_category("exterior_finish_chosen", code))
    }
}

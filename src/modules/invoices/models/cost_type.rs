use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{BillingError, Result};

/// Routes an incremental charge on a service invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    /// Mechanic time; exempt from provincial sales tax
    Labour,
    Material,
    Part,
}

impl CostType {
    pub const ALL: [CostType; 3] = [CostType::Labour, CostType::Material, CostType::Part];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Labour => "labour",
            Self::Material => "material",
            Self::Part => "part",
        }
    }

    /// Whether provincial sales tax applies to this kind of charge
    pub fn is_provincially_taxed(&self) -> bool {
        !matches!(self, Self::Labour)
    }
}

impl fmt::Display for CostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CostType {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "labour" | "labor" => Ok(Self::Labour),
            "material" => Ok(Self::Material),
            "part" => Ok(Self::Part),
            _ => Err(BillingError::invalid_category("cost_type", s)),
        }
    }
}

/// Declaration-order codes: 0 = Labour, 1 = Material, 2 = Part
impl TryFrom<i32> for CostType {
    type Error = BillingError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Self::Labour),
            1 => Ok(Self::Material),
            2 => Ok(Self::Part),
            _ => Err(BillingError::invalid_category("cost_type", code)),
        }
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{BillingError, Result};

/// Accessory package chosen on a sales quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessories {
    #[default]
    None,
    StereoSystem,
    LeatherInterior,
    StereoAndLeather,
    ComputerNavigation,
    StereoAndNavigation,
    LeatherAndNavigation,
    /// Declared as a choice but has no price; cost lookups fail
    All,
}

impl Accessories {
    /// Every declared tag, in declaration order
    pub const ALL_TAGS: [Accessories; 8] = [
        Accessories::None,
        Accessories::StereoSystem,
        Accessories::LeatherInterior,
        Accessories::StereoAndLeather,
        Accessories::ComputerNavigation,
        Accessories::StereoAndNavigation,
        Accessories::LeatherAndNavigation,
        Accessories::All,
    ];

    /// Price table entry, or `None` when the tag is unpriced
    pub fn table_price(&self) -> Option<Decimal> {
        match self {
            Self::None => Some(Decimal::ZERO),
            Self::StereoSystem => Some(Decimal::new(50505, 2)),
            Self::LeatherInterior => Some(Decimal::new(101010, 2)),
            Self::ComputerNavigation => Some(Decimal::new(151515, 2)),
            Self::StereoAndLeather => Some(Decimal::new(151515, 2)),
            Self::StereoAndNavigation => Some(Decimal::new(202020, 2)),
            Self::LeatherAndNavigation => Some(Decimal::new(252525, 2)),
            Self::All => None,
        }
    }

    /// Price of this accessory package
    ///
    /// # Errors
    /// * `InvalidCategory` for [`Accessories::All`], which has no table entry
    pub fn price(&self) -> Result<Decimal> {
        self.table_price()
            .ok_or_else(|| BillingError::invalid_category("accessories_chosen", self))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StereoSystem => "stereo_system",
            Self::LeatherInterior => "leather_interior",
            Self::StereoAndLeather => "stereo_and_leather",
            Self::ComputerNavigation => "computer_navigation",
            Self::StereoAndNavigation => "stereo_and_navigation",
            Self::LeatherAndNavigation => "leather_and_navigation",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Accessories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepts `stereo_system`, `StereoSystem` or `stereo system`
impl FromStr for Accessories {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize_tag(s);
        Self::ALL_TAGS
            .iter()
            .copied()
            .find(|tag| normalize_tag(tag.as_str()) == wanted)
            .ok_or_else(|| BillingError::invalid_category("accessories_chosen", s))
    }
}

/// Declaration-order codes, 0 = None through 7 = All
impl TryFrom<i32> for Accessories {
    type Error = BillingError;

    fn try_from(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL_TAGS.get(index).copied())
            .ok_or_else(|| BillingError::invalid_category("accessories_chosen", code))
    }
}

pub(crate) fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

//! Dietary classification of a menu item.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Menu item type, serialized as its literal name (`VEG` / `NON_VEG`) both on
/// the wire and in the `menu.type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Veg,
    NonVeg,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Veg => "VEG",
            ItemType::NonVeg => "NON_VEG",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VEG" => Ok(ItemType::Veg),
            "NON_VEG" => Ok(ItemType::NonVeg),
            other => Err(CoreError::Validation(format!(
                "Unknown item type '{other}', expected VEG or NON_VEG"
            ))),
        }
    }
}

//! Territory - one ownable region of the map
//!
//! The name and color are fixed when the territory is created. Only the
//! owner and troop count change during play.

use serde::{Deserialize, Serialize};

use crate::core::types::{Owner, TerritoryColor, TerritoryName};

/// A territory on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: TerritoryName,
    pub owner: Owner,
    pub troops: u32,
    color: TerritoryColor,
}

impl Territory {
    pub fn new(name: TerritoryName, owner: Owner, troops: u32, color: TerritoryColor) -> Self {
        Self {
            name,
            owner,
            troops,
            color,
        }
    }

    pub fn name(&self) -> TerritoryName {
        self.name
    }

    pub fn color(&self) -> TerritoryColor {
        self.color
    }

    /// Transfer control to a new owner
    pub fn transfer_control(&mut self, new_owner: Owner) {
        self.owner = new_owner;
    }

    /// Check if held by a specific owner
    pub fn is_controlled_by(&self, owner: Owner) -> bool {
        self.owner == owner
    }
}

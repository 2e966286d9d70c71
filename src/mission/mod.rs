//! Secret missions
//!
//! A mission is the player's victory condition. It is drawn at session
//! start, can be rerolled at any time, and is never edited in place.

pub mod generator;
pub mod victory;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::{TerritoryColor, TerritoryName};

pub use generator::generate_mission;
pub use victory::{check_victory, check_victory_raw, mission_progress, MissionProgress};

/// A victory condition, carrying only the parameters its kind needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mission {
    /// Hold at least `target` territories
    OwnTerritories { target: u32 },
    /// Field at least `target` troops across all held territories
    OwnTroops { target: u32 },
    /// Leave the enemy without a single territory
    EliminateEnemy,
    /// Hold one specific territory
    OwnTerritory { territory: TerritoryName },
    /// Hold at least `target` territories of one color
    OwnColor { color: TerritoryColor, target: u32 },
}

/// Field-less discriminant of `Mission`
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    OwnTerritories,
    OwnTroops,
    EliminateEnemy,
    OwnTerritory,
    OwnColor,
}

impl MissionKind {
    pub const COUNT: usize = 5;

    /// All kinds in draw order
    pub const ALL: [MissionKind; MissionKind::COUNT] = [
        MissionKind::OwnTerritories,
        MissionKind::OwnTroops,
        MissionKind::EliminateEnemy,
        MissionKind::OwnTerritory,
        MissionKind::OwnColor,
    ];

    /// Decode a raw discriminant. Anything outside `0..COUNT` is unrecognized.
    pub fn from_index(index: usize) -> Option<MissionKind> {
        Self::ALL.get(index).copied()
    }
}

impl Mission {
    /// Decode a mission from its flat form
    ///
    /// `index` points into the territory table for `OwnTerritory` and into
    /// the color table for `OwnColor`; the other kinds ignore it, and
    /// `target` is ignored where the kind has none. `None` when the kind or
    /// the index does not decode.
    pub fn from_raw(kind: usize, target: u32, index: usize) -> Option<Mission> {
        let mission = match MissionKind::from_index(kind)? {
            MissionKind::OwnTerritories => Mission::OwnTerritories { target },
            MissionKind::OwnTroops => Mission::OwnTroops { target },
            MissionKind::EliminateEnemy => Mission::EliminateEnemy,
            MissionKind::OwnTerritory => Mission::OwnTerritory {
                territory: TerritoryName::from_index(index)?,
            },
            MissionKind::OwnColor => Mission::OwnColor {
                color: TerritoryColor::ALL.get(index).copied()?,
                target,
            },
        };
        Some(mission)
    }

    pub fn kind(&self) -> MissionKind {
        match self {
            Mission::OwnTerritories { .. } => MissionKind::OwnTerritories,
            Mission::OwnTroops { .. } => MissionKind::OwnTroops,
            Mission::EliminateEnemy => MissionKind::EliminateEnemy,
            Mission::OwnTerritory { .. } => MissionKind::OwnTerritory,
            Mission::OwnColor { .. } => MissionKind::OwnColor,
        }
    }

    /// Player-facing description with the mission parameters filled in
    pub fn description(&self) -> String {
        match self {
            Mission::OwnTerritories { target } => format!("Conquer {target} territories."),
            Mission::OwnTroops { target } => {
                format!("Control at least {target} troops in total.")
            }
            Mission::EliminateEnemy => {
                "Destroy the enemy army (leave it without any territory).".to_string()
            }
            Mission::OwnTerritory { territory } => {
                format!("Conquer the territory '{territory}'.")
            }
            Mission::OwnColor { color, target } => {
                format!("Control {target} territories of color {color}.")
            }
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

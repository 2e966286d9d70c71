//! Victory evaluation
//!
//! Read-only over the map; safe to call at any point and as often as needed.

use serde::Serialize;

use super::Mission;
use crate::campaign::map::WorldMap;
use crate::core::types::{Owner, TERRITORY_COUNT};

/// Check whether the player has completed `mission` on `world`
pub fn check_victory(world: &WorldMap, mission: &Mission) -> bool {
    match *mission {
        Mission::OwnTerritories { target } => world.count_owned(Owner::Player) as u32 >= target,
        Mission::OwnTroops { target } => world.troops_of(Owner::Player) >= target,
        Mission::EliminateEnemy => world.count_owned(Owner::Enemy) == 0,
        Mission::OwnTerritory { territory } => world
            .iter()
            .find(|t| t.name() == territory)
            .is_some_and(|t| t.is_controlled_by(Owner::Player)),
        Mission::OwnColor { color, target } => {
            let held = world
                .territories_of(Owner::Player)
                .filter(|t| t.color() == color)
                .count() as u32;
            held >= target
        }
    }
}

/// `check_victory` for a mission still in flat form (see `Mission::from_raw`)
///
/// A mission that does not decode is never satisfied.
pub fn check_victory_raw(world: &WorldMap, kind: usize, target: u32, index: usize) -> bool {
    Mission::from_raw(kind, target, index).is_some_and(|mission| check_victory(world, &mission))
}

/// How far the player is along a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissionProgress {
    pub current: u32,
    pub target: u32,
}

impl MissionProgress {
    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }
}

/// Progress towards `mission`, measured in the mission's own unit
///
/// `EliminateEnemy` counts player territories against the whole map, and
/// `OwnTerritory` is 0 or 1 out of 1.
pub fn mission_progress(world: &WorldMap, mission: &Mission) -> MissionProgress {
    let (current, target) = match *mission {
        Mission::OwnTerritories { target } => (world.count_owned(Owner::Player) as u32, target),
        Mission::OwnTroops { target } => (world.troops_of(Owner::Player), target),
        Mission::EliminateEnemy => (
            world.count_owned(Owner::Player) as u32,
            TERRITORY_COUNT as u32,
        ),
        Mission::OwnTerritory { territory } => {
            (u32::from(world.get(territory).is_controlled_by(Owner::Player)), 1)
        }
        Mission::OwnColor { color, target } => (
            world
                .territories_of(Owner::Player)
                .filter(|t| t.color() == color)
                .count() as u32,
            target,
        ),
    };
    MissionProgress { current, target }
}

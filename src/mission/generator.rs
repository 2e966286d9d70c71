//! Mission drawing

use rand::Rng;

use super::{Mission, MissionKind};
use crate::core::config::MissionConfig;
use crate::core::types::{TerritoryColor, TerritoryName, COLOR_COUNT, TERRITORY_COUNT};

/// Draw a new mission
///
/// The kind is uniform over the five kinds. Parameters that vary are drawn
/// after the kind: a uniform territory for `OwnTerritory`, then a uniform
/// color and a target in `[color_target_min, color_target_max]` for `OwnColor`.
pub fn generate_mission<R: Rng>(rng: &mut R, config: &MissionConfig) -> Mission {
    let kind = MissionKind::ALL[rng.gen_range(0..MissionKind::COUNT)];

    let mission = match kind {
        MissionKind::OwnTerritories => Mission::OwnTerritories {
            target: config.territory_target,
        },
        MissionKind::OwnTroops => Mission::OwnTroops {
            target: config.troop_target,
        },
        MissionKind::EliminateEnemy => Mission::EliminateEnemy,
        MissionKind::OwnTerritory => Mission::OwnTerritory {
            territory: TerritoryName::ALL[rng.gen_range(0..TERRITORY_COUNT)],
        },
        MissionKind::OwnColor => {
            let color = TerritoryColor::ALL[rng.gen_range(0..COLOR_COUNT)];
            let target = rng.gen_range(config.color_target_min..=config.color_target_max);
            Mission::OwnColor { color, target }
        }
    };

    tracing::info!(kind = %kind, "mission drawn: {}", mission);
    mission
}

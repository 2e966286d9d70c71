//! Campaign layer: the territory map and dice combat

pub mod battle;
pub mod map;
pub mod territory;

pub use battle::{
    resolve_attack, resolve_combat_round, validate_attack, BattleOutcome, BattleReport, Dice,
    ScriptedDice,
};
pub use map::WorldMap;
pub use territory::Territory;

//! Territory War - turn-based territory conquest with secret missions
//!
//! The player attacks enemy territories with single-die combat rounds and
//! wins by completing a randomly drawn mission.

pub mod campaign;
pub mod command;
pub mod core;
pub mod game;
pub mod mission;
pub mod ui;

pub use campaign::{resolve_attack, BattleReport, Dice, ScriptedDice, Territory, WorldMap};
pub use crate::core::{AttackError, GameConfig, GameError, Owner, TerritoryColor, TerritoryName};
pub use game::{Game, Session};
pub use mission::{check_victory, generate_mission, Mission, MissionKind};

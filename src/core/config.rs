//! Game configuration with documented constants
//!
//! Every knob has a default matching the classic rules, so an empty or
//! missing config file plays the standard game.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{GameError, Result};

/// Top-level configuration, loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub setup: SetupConfig,
    pub missions: MissionConfig,
    pub combat: CombatRules,
    pub session: SessionConfig,
}

/// Initial map generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Fewest troops a territory starts with. Must be at least 1.
    pub min_troops: u32,

    /// Most troops a territory starts with (inclusive)
    pub max_troops: u32,

    /// Chance, in percent, that a territory starts under player control
    ///
    /// Independent per territory. If every roll goes to the enemy the first
    /// territory is handed to the player anyway.
    pub player_share_percent: u32,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            min_troops: 1,
            max_troops: 8,
            player_share_percent: 50,
        }
    }
}

/// Mission parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Territories to hold for the "own N territories" mission
    pub territory_target: u32,

    /// Total troops to field for the "own N troops" mission
    pub troop_target: u32,

    /// Lower bound for the "own N territories of a color" mission
    pub color_target_min: u32,

    /// Upper bound (inclusive) for the "own N territories of a color" mission
    pub color_target_max: u32,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            territory_target: 3,
            troop_target: 12,
            color_target_min: 2,
            color_target_max: 3,
        }
    }
}

/// Dice combat rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    /// Faces on each die
    pub die_sides: u8,

    /// Troops an attacker needs before it may attack
    ///
    /// One troop always stays behind, so this is never below 2.
    pub min_attacking_troops: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            die_sides: 6,
            min_attacking_troops: 2,
        }
    }
}

/// Interactive session behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Battle log entries kept for the `log` command
    pub battle_log_capacity: usize,

    /// Most recent entries the `log` command prints
    pub log_display_lines: usize,

    /// Stop the session as soon as the mission is completed after an attack
    pub end_on_victory: bool,

    /// Color the color column of the map with ANSI escapes
    pub colored: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            battle_log_capacity: 50,
            log_display_lines: 15,
            end_on_victory: true,
            colored: false,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate().map_err(GameError::InvalidConfig)?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let setup = &self.setup;
        if setup.min_troops == 0 {
            return Err("setup.min_troops must be at least 1".into());
        }
        if setup.min_troops > setup.max_troops {
            return Err(format!(
                "setup.min_troops ({}) must be <= setup.max_troops ({})",
                setup.min_troops, setup.max_troops
            ));
        }
        if setup.player_share_percent > 100 {
            return Err(format!(
                "setup.player_share_percent ({}) must be <= 100",
                setup.player_share_percent
            ));
        }

        let missions = &self.missions;
        if missions.color_target_min > missions.color_target_max {
            return Err(format!(
                "missions.color_target_min ({}) must be <= missions.color_target_max ({})",
                missions.color_target_min, missions.color_target_max
            ));
        }

        if self.combat.die_sides < 2 {
            return Err("combat.die_sides must be at least 2".into());
        }
        if self.combat.min_attacking_troops < 2 {
            return Err("combat.min_attacking_troops must be at least 2".into());
        }

        if self.session.battle_log_capacity == 0 {
            return Err("session.battle_log_capacity must be positive".into());
        }
        if self.session.log_display_lines == 0 {
            return Err("session.log_display_lines must be positive".into());
        }

        Ok(())
    }
}

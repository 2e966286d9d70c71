//! Game state and the three core operations the session drives
//!
//! `Game` owns the map, the current mission and the single random
//! generator. Setup and combat are the only things that touch the map.

pub mod session;
pub mod summary;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::campaign::battle::{resolve_attack, BattleReport, Dice};
use crate::campaign::map::WorldMap;
use crate::core::config::GameConfig;
use crate::core::error::{AttackError, GameError, Result};
use crate::mission::{check_victory, generate_mission, mission_progress, Mission, MissionProgress};
use crate::ui::log::{BattleLog, LogCategory};

pub use session::Session;
pub use summary::SessionSummary;

/// Seed derived from the wall clock, for runs without `--seed`
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Running counters for the session summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub rounds_fought: u32,
    pub conquests: u32,
    pub rejected_attacks: u32,
    pub missions_drawn: u32,
}

/// A single game in progress
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: ChaCha8Rng,
    world: WorldMap,
    mission: Mission,
    log: BattleLog,
    stats: GameStats,
}

impl Game {
    /// Set up a fresh game: random map, then the first mission, both from `seed`
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate().map_err(GameError::InvalidConfig)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let world = WorldMap::generate(&config.setup, &mut rng);
        let mission = generate_mission(&mut rng, &config.missions);

        tracing::info!(
            seed,
            player_territories = world.count_owned(crate::core::types::Owner::Player),
            "game set up"
        );
        Ok(Self::assemble(config, seed, rng, world, mission))
    }

    /// Start from a prepared map and mission instead of random setup
    pub fn with_state(
        config: GameConfig,
        seed: u64,
        world: WorldMap,
        mission: Mission,
    ) -> Result<Self> {
        config.validate().map_err(GameError::InvalidConfig)?;
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(Self::assemble(config, seed, rng, world, mission))
    }

    fn assemble(
        config: GameConfig,
        seed: u64,
        rng: ChaCha8Rng,
        world: WorldMap,
        mission: Mission,
    ) -> Self {
        let mut log = BattleLog::new(config.session.battle_log_capacity);
        log.log(0, format!("Mission: {mission}"), LogCategory::Mission);
        Self {
            config,
            seed,
            rng,
            world,
            mission,
            log,
            stats: GameStats {
                missions_drawn: 1,
                ..GameStats::default()
            },
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Fight one combat round between two territories named by the player
    pub fn attack(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> std::result::Result<BattleReport, AttackError> {
        let result = resolve_attack(
            &mut self.world,
            origin,
            destination,
            &mut self.rng,
            &self.config.combat,
        );
        self.record(&result);
        result
    }

    /// Same as `attack`, rolling with the given dice instead of the game generator
    pub fn attack_with(
        &mut self,
        origin: &str,
        destination: &str,
        dice: &mut dyn Dice,
    ) -> std::result::Result<BattleReport, AttackError> {
        let result = resolve_attack(&mut self.world, origin, destination, dice, &self.config.combat);
        self.record(&result);
        result
    }

    fn record(&mut self, result: &std::result::Result<BattleReport, AttackError>) {
        match result {
            Ok(report) => {
                self.stats.rounds_fought += 1;
                let round = self.stats.rounds_fought;
                let lines = report.log_lines();
                let last = lines.len().saturating_sub(1);
                for (i, line) in lines.into_iter().enumerate() {
                    let category = if report.is_conquest() && i == last {
                        LogCategory::Conquest
                    } else {
                        LogCategory::Battle
                    };
                    self.log.log(round, line, category);
                }
                if report.is_conquest() {
                    self.stats.conquests += 1;
                }
            }
            Err(err) => {
                self.stats.rejected_attacks += 1;
                tracing::warn!(error = %err, "attack rejected");
                self.log.log(
                    self.stats.rounds_fought,
                    format!("Attack rejected: {err}"),
                    LogCategory::Rejected,
                );
            }
        }
    }

    /// Whether the current mission is complete. Never changes state.
    pub fn check_victory(&self) -> bool {
        check_victory(&self.world, &self.mission)
    }

    pub fn progress(&self) -> MissionProgress {
        mission_progress(&self.world, &self.mission)
    }

    /// Replace the current mission with a freshly drawn one
    pub fn reroll_mission(&mut self) -> &Mission {
        self.mission = generate_mission(&mut self.rng, &self.config.missions);
        self.stats.missions_drawn += 1;
        self.log.log(
            self.stats.rounds_fought,
            format!("New mission: {}", self.mission),
            LogCategory::Mission,
        );
        &self.mission
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(self)
    }
}

//! End-of-session summary

use serde::Serialize;

use super::{Game, GameStats};
use crate::campaign::map::WorldMap;
use crate::core::error::Result;
use crate::mission::{Mission, MissionProgress};

/// Snapshot of a game for the exit report
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub stats: GameStats,
    pub mission: Mission,
    pub mission_description: String,
    pub mission_complete: bool,
    pub progress: MissionProgress,
    pub final_map: WorldMap,
}

impl SessionSummary {
    pub fn new(game: &Game) -> Self {
        Self {
            seed: game.seed(),
            stats: game.stats(),
            mission: *game.mission(),
            mission_description: game.mission().description(),
            mission_complete: game.check_victory(),
            progress: game.progress(),
            final_map: game.world().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Seed {}: {} rounds fought, {} conquests, {} rejected attacks\nMission: {} ({})",
            self.seed,
            self.stats.rounds_fought,
            self.stats.conquests,
            self.stats.rejected_attacks,
            self.mission_description,
            if self.mission_complete {
                "complete"
            } else {
                "incomplete"
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    #[test]
    fn test_summary_json_has_map_and_mission() {
        let game = Game::new(GameConfig::default(), 31).unwrap();
        let json = game.summary().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 31);
        assert_eq!(value["final_map"]["territories"].as_array().unwrap().len(), 6);
        assert!(value["mission_description"].is_string());
        assert_eq!(value["stats"]["missions_drawn"], 1);
    }

    #[test]
    fn test_summary_text() {
        let game = Game::new(GameConfig::default(), 31).unwrap();
        let text = game.summary().summary();
        assert!(text.starts_with("Seed 31: 0 rounds fought"));
    }
}

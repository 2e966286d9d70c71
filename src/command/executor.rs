//! Command execution - runs a parsed command against the game

use std::fmt::Write;

use crate::command::parser::Command;
use crate::core::error::CommandError;
use crate::game::Game;
use crate::ui::render::{render_log, render_map, render_mission};

const VICTORY_BANNER: &str = ">>> Congratulations! Mission complete! <<<";

/// Whether the session keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Result of executing a command
#[derive(Debug)]
pub struct ExecutionResult {
    /// Text to show the player
    pub output: String,
    pub flow: Flow,
}

impl ExecutionResult {
    fn shown(output: String) -> Self {
        Self {
            output,
            flow: Flow::Continue,
        }
    }
}

/// Executes player commands against a game
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn execute(game: &mut Game, command: &Command) -> ExecutionResult {
        match command {
            Command::ShowMap => {
                ExecutionResult::shown(render_map(game.world(), game.config().session.colored))
            }
            Command::Attack(None) => ExecutionResult::shown(format!("{}\n", CommandError::AttackUsage)),
            Command::Attack(Some((origin, destination))) => attack(game, origin, destination),
            Command::ShowMission => {
                ExecutionResult::shown(render_mission(game.mission(), game.progress()))
            }
            Command::CheckVictory => {
                let output = if game.check_victory() {
                    format!("{VICTORY_BANNER}\n")
                } else {
                    "Mission not yet complete. Keep playing.\n".to_string()
                };
                ExecutionResult::shown(output)
            }
            Command::RerollMission => {
                game.reroll_mission();
                let mut output = String::from("New mission drawn!\n");
                output.push_str(&render_mission(game.mission(), game.progress()));
                ExecutionResult::shown(output)
            }
            Command::ShowLog => ExecutionResult::shown(render_log(
                game.log(),
                game.config().session.log_display_lines,
            )),
            Command::Quit => ExecutionResult {
                output: "Exiting...\n".to_string(),
                flow: Flow::Stop,
            },
        }
    }
}

fn attack(game: &mut Game, origin: &str, destination: &str) -> ExecutionResult {
    let report = match game.attack(origin, destination) {
        Ok(report) => report,
        Err(err) => return ExecutionResult::shown(format!("Invalid attack: {err}.\n")),
    };

    let mut output = String::from("--- BATTLE ---\n");
    for line in report.log_lines() {
        let _ = writeln!(output, "{line}");
    }

    let mut flow = Flow::Continue;
    if game.check_victory() {
        let _ = writeln!(output, "\n{VICTORY_BANNER}");
        if game.config().session.end_on_victory {
            tracing::info!("mission complete, ending session");
            flow = Flow::Stop;
        }
    }

    ExecutionResult { output, flow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::battle::ScriptedDice;
    use crate::campaign::map::WorldMap;
    use crate::core::config::GameConfig;
    use crate::core::types::{Owner, TerritoryColor, TerritoryName};
    use crate::mission::Mission;

    fn game_with(mission: Mission) -> Game {
        let world = WorldMap::from_fn(|name| match name {
            TerritoryName::America => (Owner::Player, 5, TerritoryColor::Red),
            TerritoryName::Asia => (Owner::Player, 1, TerritoryColor::Red),
            _ => (Owner::Enemy, 3, TerritoryColor::Blue),
        });
        Game::with_state(GameConfig::default(), 9, world, mission).unwrap()
    }

    #[test]
    fn test_quit_stops() {
        let mut game = game_with(Mission::EliminateEnemy);
        let result = CommandExecutor::execute(&mut game, &Command::Quit);
        assert_eq!(result.flow, Flow::Stop);
    }

    #[test]
    fn test_check_victory_reports_status() {
        let mut game = game_with(Mission::OwnTerritories { target: 2 });
        let result = CommandExecutor::execute(&mut game, &Command::CheckVictory);
        assert!(result.output.contains("Mission complete"));
        assert_eq!(result.flow, Flow::Continue);

        let mut game = game_with(Mission::EliminateEnemy);
        let result = CommandExecutor::execute(&mut game, &Command::CheckVictory);
        assert!(result.output.contains("not yet complete"));
    }

    #[test]
    fn test_invalid_attack_reported() {
        let mut game = game_with(Mission::EliminateEnemy);
        let before = game.world().clone();
        let command = Command::Attack(Some(("Asia".into(), "Europe".into())));

        let result = CommandExecutor::execute(&mut game, &command);
        assert!(result.output.starts_with("Invalid attack: attacker has 1 troops"));
        assert_eq!(game.world(), &before);
    }

    #[test]
    fn test_attack_prints_battle() {
        let mut game = game_with(Mission::EliminateEnemy);
        let command = Command::Attack(Some(("america".into(), "africa".into())));

        let result = CommandExecutor::execute(&mut game, &command);
        assert!(result.output.starts_with("--- BATTLE ---"));
        assert!(result.output.contains("America (5 troops) attacks Africa (3 troops)"));
        assert_eq!(result.flow, Flow::Continue);
        assert_eq!(game.stats().rounds_fought, 1);
    }

    #[test]
    fn test_log_shows_only_recent_window() {
        let world = WorldMap::from_fn(|name| match name {
            TerritoryName::America => (Owner::Player, 8, TerritoryColor::Red),
            _ => (Owner::Enemy, 8, TerritoryColor::Blue),
        });
        let mut config = GameConfig::default();
        config.session.log_display_lines = 3;
        let mut game = Game::with_state(config, 9, world, Mission::EliminateEnemy).unwrap();

        // Defender wins every round; three log lines per round
        let mut dice = ScriptedDice::new(&[1, 6]);
        for _ in 0..3 {
            game.attack_with("America", "Asia", &mut dice).unwrap();
        }
        assert!(game.log().len() > 3);

        let result = CommandExecutor::execute(&mut game, &Command::ShowLog);
        let shown: Vec<&str> = result
            .output
            .lines()
            .filter(|line| line.starts_with("[round"))
            .collect();
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|line| line.starts_with("[round 3]")));
    }

    #[test]
    fn test_reroll_shows_new_mission() {
        let mut game = game_with(Mission::EliminateEnemy);
        let result = CommandExecutor::execute(&mut game, &Command::RerollMission);
        assert!(result.output.contains("New mission drawn!"));
        assert!(result.output.contains(&game.mission().description()));
    }
}

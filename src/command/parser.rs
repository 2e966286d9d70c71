//! Player input parsing
//!
//! Menu choices are accepted either as the menu number or as a word.
//! `attack` may carry both territory names inline.

use std::str::FromStr;

use crate::core::error::CommandError;

/// A player command from the main menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowMap,
    /// Attack, with `(origin, destination)` when given inline
    Attack(Option<(String, String)>),
    ShowMission,
    CheckVictory,
    RerollMission,
    ShowLog,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        let command = match head.to_lowercase().as_str() {
            "1" | "map" | "m" => Command::ShowMap,
            "2" | "attack" | "a" => match args.as_slice() {
                [] => return Ok(Command::Attack(None)),
                [origin, destination] => {
                    return Ok(Command::Attack(Some((
                        origin.to_string(),
                        destination.to_string(),
                    ))))
                }
                _ => return Err(CommandError::AttackUsage),
            },
            "3" | "mission" => Command::ShowMission,
            "4" | "check" | "victory" => Command::CheckVictory,
            "5" | "reroll" | "new" => Command::RerollMission,
            "6" | "log" | "history" => Command::ShowLog,
            "0" | "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(s.trim().to_string())),
        };

        if args.is_empty() {
            Ok(command)
        } else {
            Err(CommandError::Unknown(s.trim().to_string()))
        }
    }
}

//! Interactive session loop
//!
//! Reads commands line by line, hands them to the executor and prints the
//! result. Bad input is reported and re-prompted; end of input ends the
//! session like `quit`.

use std::io::{BufRead, Write};

use super::Game;
use crate::command::{Command, CommandExecutor, Flow};
use crate::core::error::Result;
use crate::ui::render::{render_map, render_mission, MENU};

/// A game bound to an input and an output stream
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// Run until the player quits, wins (if configured to stop) or input ends
    pub fn run(mut self) -> Result<(Game, W)> {
        let colored = self.game.config().session.colored;
        writeln!(self.output, "=== TERRITORY WAR ===")?;
        writeln!(self.output, "{}", render_map(self.game.world(), colored))?;
        writeln!(
            self.output,
            "{}",
            render_mission(self.game.mission(), self.game.progress())
        )?;

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    tracing::warn!(input = %line.trim(), error = %err, "invalid input");
                    writeln!(self.output, "Invalid input ({err}). Try again.")?;
                    continue;
                }
            };

            let command = match command {
                Command::Attack(None) => {
                    let Some(origin) = self.prompt("Origin territory: ")? else {
                        break;
                    };
                    let Some(destination) = self.prompt("Destination territory: ")? else {
                        break;
                    };
                    let (origin, destination) = (origin.trim(), destination.trim());
                    if origin.is_empty() || destination.is_empty() {
                        writeln!(self.output, "Invalid input.")?;
                        continue;
                    }
                    Command::Attack(Some((origin.to_string(), destination.to_string())))
                }
                other => other,
            };

            let result = CommandExecutor::execute(&mut self.game, &command);
            write!(self.output, "{}", result.output)?;
            if result.flow == Flow::Stop {
                break;
            }
        }

        self.output.flush()?;
        tracing::info!(
            rounds = self.game.stats().rounds_fought,
            "session ended"
        );
        Ok((self.game, self.output))
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::info!("input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}

//! Territory War - Entry Point
//!
//! Parses the command line, sets up logging and configuration, then runs
//! an interactive session on stdin/stdout.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use territory_war::core::error::Result;
use territory_war::game::{clock_seed, Game, Session};
use territory_war::GameConfig;

/// Territory War - conquer territories and complete your secret mission
#[derive(Parser, Debug)]
#[command(name = "territory-war")]
#[command(about = "Turn-based territory conquest against a passive enemy")]
struct Args {
    /// Random seed for reproducible games (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file overriding the default rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every dice roll to stderr
    #[arg(long, default_value_t = false)]
    verbose: bool,

    /// Color the map's color column
    #[arg(long, default_value_t = false)]
    color: bool,

    /// Print a JSON summary of the game on exit
    #[arg(long, default_value_t = false)]
    summary_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "territory_war=debug"
    } else {
        "territory_war=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.color {
        config.session.colored = true;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "Territory War starting...");

    let game = Game::new(config, seed)?;
    let session = Session::new(game, io::stdin().lock(), io::stdout().lock());
    let (game, _) = session.run()?;

    let summary = game.summary();
    if args.summary_json {
        println!("{}", summary.to_json()?);
    } else {
        println!("\n{}", summary.summary());
    }

    Ok(())
}

pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{AttackError, CommandError, GameError, Result};
pub use types::{Owner, TerritoryColor, TerritoryName, COLOR_COUNT, TERRITORY_COUNT};

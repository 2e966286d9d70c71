use thiserror::Error;

/// Fatal errors. Any of these ends the session.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Why an attack was rejected. The map is untouched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    #[error("territory not found: {0}")]
    NotFound(String),

    #[error("a territory cannot attack one held by the same owner")]
    SameOwner,

    #[error("attacker has {troops} troops, needs at least {required}")]
    InsufficientTroops { troops: u32, required: u32 },
}

/// Malformed player input. Discarded and re-prompted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("usage: attack <origin> <destination>")]
    AttackUsage,
}

//! Core type definitions used throughout the codebase

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of territories on the map. Fixed for the whole session.
pub const TERRITORY_COUNT: usize = 6;

/// Number of color tags a territory can carry
pub const COLOR_COUNT: usize = 6;

/// Which side holds a territory
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

impl Owner {
    /// The other side
    pub fn opponent(&self) -> Owner {
        match self {
            Owner::Player => Owner::Enemy,
            Owner::Enemy => Owner::Player,
        }
    }
}

/// Canonical territory names
///
/// The map always holds exactly one territory per variant, stored at
/// `index()`. Adding a variant means updating `ALL` and `TERRITORY_COUNT`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerritoryName {
    America,
    Oceania,
    Europe,
    Asia,
    Africa,
    Antarctica,
}

impl TerritoryName {
    /// All names in map order
    pub const ALL: [TerritoryName; TERRITORY_COUNT] = [
        TerritoryName::America,
        TerritoryName::Oceania,
        TerritoryName::Europe,
        TerritoryName::Asia,
        TerritoryName::Africa,
        TerritoryName::Antarctica,
    ];

    /// Slot of this territory in the map array
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<TerritoryName> {
        Self::ALL.get(index).copied()
    }
}

/// Error returned when a string is not one of the canonical names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown territory: {0}")]
pub struct UnknownTerritory(pub String);

impl FromStr for TerritoryName {
    type Err = UnknownTerritory;

    /// Case-insensitive match against the canonical names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTerritory(wanted.to_string()))
    }
}

/// Army color tag of a territory. Assigned at setup, never changes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerritoryColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Black,
}

impl TerritoryColor {
    pub const ALL: [TerritoryColor; COLOR_COUNT] = [
        TerritoryColor::Red,
        TerritoryColor::Green,
        TerritoryColor::Blue,
        TerritoryColor::Yellow,
        TerritoryColor::Cyan,
        TerritoryColor::Black,
    ];
}

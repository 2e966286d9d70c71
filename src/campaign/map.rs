//! WorldMap - the fixed set of territories
//!
//! Territories live in an array indexed by `TerritoryName`, so the map
//! always holds every canonical name exactly once.

use rand::Rng;
use serde::Serialize;

use crate::campaign::territory::Territory;
use crate::core::config::SetupConfig;
use crate::core::types::{Owner, TerritoryColor, TerritoryName, COLOR_COUNT, TERRITORY_COUNT};

/// The complete world state: one territory per canonical name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldMap {
    territories: [Territory; TERRITORY_COUNT],
}

impl WorldMap {
    /// Build a map by asking `f` for the owner, troops and color of each name
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(TerritoryName) -> (Owner, u32, TerritoryColor),
    {
        let territories = TerritoryName::ALL.map(|name| {
            let (owner, troops, color) = f(name);
            Territory::new(name, owner, troops, color)
        });
        Self { territories }
    }

    /// Random initial map
    ///
    /// Each territory independently gets an owner, a troop count in
    /// `[min_troops, max_troops]` and a color. The player always ends up
    /// with at least one territory.
    pub fn generate<R: Rng>(config: &SetupConfig, rng: &mut R) -> Self {
        let mut map = Self::from_fn(|_| {
            let owner = if rng.gen_range(0..100) < config.player_share_percent {
                Owner::Player
            } else {
                Owner::Enemy
            };
            let troops = rng.gen_range(config.min_troops..=config.max_troops);
            let color = TerritoryColor::ALL[rng.gen_range(0..COLOR_COUNT)];
            (owner, troops, color)
        });

        if map.count_owned(Owner::Player) == 0 {
            tracing::debug!("no territory rolled for the player, handing over the first one");
            map.territories[0].transfer_control(Owner::Player);
        }

        map
    }

    pub fn get(&self, name: TerritoryName) -> &Territory {
        &self.territories[name.index()]
    }

    /// Look up a territory by free-form name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Territory> {
        name.parse::<TerritoryName>().ok().map(|n| self.get(n))
    }

    /// Two distinct territories, both mutable. `None` if `a == b`.
    pub(crate) fn pair_mut(
        &mut self,
        a: TerritoryName,
        b: TerritoryName,
    ) -> Option<(&mut Territory, &mut Territory)> {
        let (i, j) = (a.index(), b.index());
        if i == j {
            return None;
        }
        if i < j {
            let (low, high) = self.territories.split_at_mut(j);
            Some((&mut low[i], &mut high[0]))
        } else {
            let (low, high) = self.territories.split_at_mut(i);
            Some((&mut high[0], &mut low[j]))
        }
    }

    /// All territories in map order
    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Territories held by `owner`
    pub fn territories_of(&self, owner: Owner) -> impl Iterator<Item = &Territory> {
        self.territories.iter().filter(move |t| t.is_controlled_by(owner))
    }

    pub fn count_owned(&self, owner: Owner) -> usize {
        self.territories_of(owner).count()
    }

    /// Sum of troops over the territories held by `owner`
    pub fn troops_of(&self, owner: Owner) -> u32 {
        self.territories_of(owner).map(|t| t.troops).sum()
    }
}

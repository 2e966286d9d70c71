//! Battle resolution for the campaign map
//!
//! One call resolves exactly one combat round: each side rolls a single
//! die, the loser gives up one troop, and a defender left with no troops
//! changes hands. Ties go to the defender.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::map::WorldMap;
use super::territory::Territory;
use crate::core::config::CombatRules;
use crate::core::error::AttackError;
use crate::core::types::{Owner, TerritoryName};

/// Source of die rolls for combat
pub trait Dice {
    /// Roll one die with faces `1..=sides`
    fn roll(&mut self, sides: u8) -> u8;
}

impl Dice for ChaCha8Rng {
    fn roll(&mut self, sides: u8) -> u8 {
        self.gen_range(1..=sides)
    }
}

/// Dice that replay a fixed sequence, for forcing battle outcomes in tests
///
/// The sequence repeats once exhausted. An empty sequence always rolls 1.
/// Every scripted face must fit the die being rolled.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: Vec<u8>,
    queue: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(rolls: &[u8]) -> Self {
        Self {
            script: rolls.to_vec(),
            queue: rolls.iter().copied().collect(),
        }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u8) -> u8 {
        if self.queue.is_empty() {
            self.queue.extend(self.script.iter().copied());
        }
        let roll = self.queue.pop_front().unwrap_or(1);
        debug_assert!(
            (1..=sides).contains(&roll),
            "scripted roll {roll} is off the die (1..={sides})"
        );
        roll
    }
}

/// What happened in a combat round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// Defender lost a troop but held on
    DefenderLostTroop,
    /// Defender ran out of troops and changed hands
    Conquered,
    /// Attacker lost a troop (includes ties)
    AttackerLostTroop,
}

/// Results of a combat round. Render-only: nothing reads it back into the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attacker: TerritoryName,
    pub defender: TerritoryName,
    pub attacker_owner: Owner,
    pub attacker_troops_before: u32,
    pub defender_troops_before: u32,
    pub attack_roll: u8,
    pub defend_roll: u8,
    pub outcome: BattleOutcome,
    pub attacker_troops_after: u32,
    pub defender_troops_after: u32,
}

impl BattleReport {
    /// Human-readable battle log, one line per step
    pub fn log_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "{} ({} troops) attacks {} ({} troops)",
                self.attacker,
                self.attacker_troops_before,
                self.defender,
                self.defender_troops_before
            ),
            format!(
                "Attacker die: {} | Defender die: {}",
                self.attack_roll, self.defend_roll
            ),
        ];

        match self.outcome {
            BattleOutcome::DefenderLostTroop => lines.push(format!(
                "Result: defender loses 1 troop (now {}).",
                self.defender_troops_after
            )),
            BattleOutcome::Conquered => {
                lines.push("Result: defender loses 1 troop (now 0).".to_string());
                lines.push(format!(
                    "{} conquered by {}! 1 troop moves in, {} remain in {}.",
                    self.defender,
                    self.attacker_owner,
                    self.attacker_troops_after,
                    self.attacker
                ));
            }
            BattleOutcome::AttackerLostTroop => lines.push(format!(
                "Result: attacker loses 1 troop (now {}).",
                self.attacker_troops_after
            )),
        }

        lines
    }

    pub fn is_conquest(&self) -> bool {
        self.outcome == BattleOutcome::Conquered
    }
}

/// Check that `attacker` may attack `defender`. Never mutates.
pub fn validate_attack(
    attacker: &Territory,
    defender: &Territory,
    rules: &CombatRules,
) -> Result<(), AttackError> {
    // A territory attacking itself is the degenerate same-owner case
    if attacker.name() == defender.name() || attacker.owner == defender.owner {
        return Err(AttackError::SameOwner);
    }
    if attacker.troops < rules.min_attacking_troops {
        return Err(AttackError::InsufficientTroops {
            troops: attacker.troops,
            required: rules.min_attacking_troops,
        });
    }
    Ok(())
}

/// Resolve a single combat round between two territories
///
/// Validation runs before any roll, so a rejected attack leaves both
/// territories untouched.
pub fn resolve_combat_round<D: Dice + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
    rules: &CombatRules,
) -> Result<BattleReport, AttackError> {
    validate_attack(attacker, defender, rules)?;

    let attacker_troops_before = attacker.troops;
    let defender_troops_before = defender.troops;

    let attack_roll = dice.roll(rules.die_sides);
    let defend_roll = dice.roll(rules.die_sides);
    tracing::debug!(
        attacker = %attacker.name(),
        defender = %defender.name(),
        attack_roll,
        defend_roll,
        "dice rolled"
    );

    let outcome = if attack_roll > defend_roll {
        defender.troops = defender.troops.saturating_sub(1);
        if defender.troops == 0 {
            defender.transfer_control(attacker.owner);
            defender.troops = 1;
            attacker.troops = attacker.troops.saturating_sub(1);
            tracing::info!(
                territory = %defender.name(),
                new_owner = %attacker.owner,
                "territory conquered"
            );
            BattleOutcome::Conquered
        } else {
            BattleOutcome::DefenderLostTroop
        }
    } else {
        attacker.troops = attacker.troops.saturating_sub(1);
        BattleOutcome::AttackerLostTroop
    };

    Ok(BattleReport {
        attacker: attacker.name(),
        defender: defender.name(),
        attacker_owner: attacker.owner,
        attacker_troops_before,
        defender_troops_before,
        attack_roll,
        defend_roll,
        outcome,
        attacker_troops_after: attacker.troops,
        defender_troops_after: defender.troops,
    })
}

/// Resolve an attack between two territories given by name
///
/// Names are matched case-insensitively. Unknown names give `NotFound`,
/// naming the first one that failed to resolve.
pub fn resolve_attack<D: Dice + ?Sized>(
    world: &mut WorldMap,
    attacker_name: &str,
    defender_name: &str,
    dice: &mut D,
    rules: &CombatRules,
) -> Result<BattleReport, AttackError> {
    let attacker = attacker_name
        .parse::<TerritoryName>()
        .map_err(|e| AttackError::NotFound(e.0))?;
    let defender = defender_name
        .parse::<TerritoryName>()
        .map_err(|e| AttackError::NotFound(e.0))?;

    let (attacker, defender) = world
        .pair_mut(attacker, defender)
        .ok_or(AttackError::SameOwner)?;

    resolve_combat_round(attacker, defender, dice, rules)
}

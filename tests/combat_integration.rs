//! Combat integration tests
//!
//! The dice-rule scenarios with forced rolls, plus property tests checking
//! that long random campaigns never break the map invariants.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use territory_war::campaign::{resolve_attack, resolve_combat_round, ScriptedDice};
use territory_war::core::config::{CombatRules, SetupConfig};
use territory_war::{AttackError, Owner, Territory, TerritoryColor, TerritoryName, WorldMap};

fn rules() -> CombatRules {
    CombatRules::default()
}

#[test]
fn test_conquest_with_forced_dice() {
    let mut attacker = Territory::new(TerritoryName::Asia, Owner::Player, 2, TerritoryColor::Cyan);
    let mut defender = Territory::new(TerritoryName::Africa, Owner::Enemy, 1, TerritoryColor::Yellow);

    resolve_combat_round(
        &mut attacker,
        &mut defender,
        &mut ScriptedDice::new(&[6, 1]),
        &rules(),
    )
    .unwrap();

    assert_eq!(defender.owner, Owner::Player);
    assert_eq!(defender.troops, 1);
    assert_eq!(attacker.troops, 1);
    assert_eq!(defender.color(), TerritoryColor::Yellow);
}

#[test]
fn test_exact_tie_goes_to_defender() {
    let mut attacker = Territory::new(TerritoryName::Asia, Owner::Player, 3, TerritoryColor::Cyan);
    let mut defender = Territory::new(TerritoryName::Africa, Owner::Enemy, 5, TerritoryColor::Yellow);

    resolve_combat_round(
        &mut attacker,
        &mut defender,
        &mut ScriptedDice::new(&[3, 3]),
        &rules(),
    )
    .unwrap();

    assert_eq!(attacker.troops, 2);
    assert_eq!(defender.troops, 5);
    assert_eq!(defender.owner, Owner::Enemy);
}

#[test]
fn test_every_tie_goes_to_defender() {
    for face in 1..=6u8 {
        let mut attacker = Territory::new(TerritoryName::Asia, Owner::Enemy, 4, TerritoryColor::Red);
        let mut defender = Territory::new(TerritoryName::Europe, Owner::Player, 4, TerritoryColor::Red);
        resolve_combat_round(
            &mut attacker,
            &mut defender,
            &mut ScriptedDice::new(&[face, face]),
            &rules(),
        )
        .unwrap();
        assert_eq!((attacker.troops, defender.troops), (3, 4), "tie on {face}");
    }
}

#[test]
fn test_enemy_can_attack_too() {
    // The core does not care who attacks; only the session never lets the enemy act
    let mut world = WorldMap::from_fn(|name| match name {
        TerritoryName::Oceania => (Owner::Enemy, 3, TerritoryColor::Black),
        _ => (Owner::Player, 1, TerritoryColor::Green),
    });
    let report = resolve_attack(
        &mut world,
        "Oceania",
        "Europe",
        &mut ScriptedDice::new(&[5, 4]),
        &rules(),
    )
    .unwrap();
    assert!(report.is_conquest());
    assert_eq!(world.get(TerritoryName::Europe).owner, Owner::Enemy);
    assert_eq!(world.get(TerritoryName::Oceania).troops, 2);
}

#[test]
fn test_rejected_attack_leaves_world_untouched() {
    let mut world = WorldMap::from_fn(|name| match name {
        TerritoryName::America => (Owner::Player, 1, TerritoryColor::Red),
        TerritoryName::Asia => (Owner::Player, 7, TerritoryColor::Red),
        _ => (Owner::Enemy, 2, TerritoryColor::Blue),
    });
    let before = world.clone();
    let mut dice = ScriptedDice::new(&[6, 1]);

    assert_eq!(
        resolve_attack(&mut world, "America", "Europe", &mut dice, &rules()),
        Err(AttackError::InsufficientTroops {
            troops: 1,
            required: 2
        })
    );
    assert_eq!(
        resolve_attack(&mut world, "Asia", "America", &mut dice, &rules()),
        Err(AttackError::SameOwner)
    );
    assert_eq!(
        resolve_attack(&mut world, "Atlantis", "America", &mut dice, &rules()),
        Err(AttackError::NotFound("Atlantis".to_string()))
    );
    assert_eq!(world, before);
}

#[test]
fn test_siege_until_conquest() {
    let mut world = WorldMap::from_fn(|name| match name {
        TerritoryName::America => (Owner::Player, 8, TerritoryColor::Red),
        _ => (Owner::Enemy, 3, TerritoryColor::Blue),
    });
    // Attacker wins every roll: 3 -> 2 -> 1 -> conquered
    let mut dice = ScriptedDice::new(&[6, 1]);
    let mut conquered = false;
    for _ in 0..3 {
        let report = resolve_attack(&mut world, "America", "Asia", &mut dice, &rules()).unwrap();
        conquered = report.is_conquest();
    }
    assert!(conquered);
    assert_eq!(world.get(TerritoryName::Asia).owner, Owner::Player);
    assert_eq!(world.get(TerritoryName::Asia).troops, 1);
    assert_eq!(world.get(TerritoryName::America).troops, 7);
}

proptest! {
    #[test]
    fn prop_random_campaign_keeps_invariants(
        seed in any::<u64>(),
        attacks in prop::collection::vec((0usize..6, 0usize..6), 0..200),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut world = WorldMap::generate(&SetupConfig::default(), &mut rng);
        let colors: Vec<TerritoryColor> = world.iter().map(|t| t.color()).collect();

        for (from, to) in attacks {
            let from = TerritoryName::ALL[from].to_string();
            let to = TerritoryName::ALL[to].to_string();
            let before = world.clone();
            match resolve_attack(&mut world, &from, &to, &mut rng, &CombatRules::default()) {
                Ok(report) => {
                    prop_assert!(report.attack_roll >= 1 && report.attack_roll <= 6);
                    prop_assert!(report.defend_roll >= 1 && report.defend_roll <= 6);
                }
                Err(_) => {
                    prop_assert_eq!(&world, &before);
                }
            }

            for (i, t) in world.iter().enumerate() {
                prop_assert_eq!(t.name(), TerritoryName::ALL[i]);
                prop_assert_eq!(t.color(), colors[i]);
                prop_assert!(t.troops >= 1);
                prop_assert!(matches!(t.owner, Owner::Player | Owner::Enemy));
            }
        }
    }

    #[test]
    fn prop_setup_invariants(seed in any::<u64>(), share in 0u32..=100) {
        let config = SetupConfig { player_share_percent: share, ..SetupConfig::default() };
        let world = WorldMap::generate(&config, &mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert!(world.count_owned(Owner::Player) >= 1);
        prop_assert_eq!(world.iter().count(), 6);
        for t in world.iter() {
            prop_assert!((1..=8).contains(&t.troops));
        }
    }
}

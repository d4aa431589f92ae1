//! Battle scenario integration tests.
//!
//! These tests run complete battles through `BattleEngine` and check the
//! recorded events and snapshots tick by tick.

use autocard_battle::battle::{
    BattleEngine, BattleEvent, BattleEventKind, BattleEventType, BattleOutcome, Combatant,
};
use autocard_battle::core::{Side, SimConfig};
use autocard_battle::items::{
    Board, ItemCatalog, ItemConfig, Port, PortKind, SlotItem, TargetRule, Tier, TierTable,
};

fn catalog() -> ItemCatalog {
    ItemCatalog::from_items([
        ItemConfig::new("greatsword", 10.0).with_port(Port::damage(20.0)),
        ItemConfig::new("axe", 2.0).with_port(Port::damage(30.0)),
        ItemConfig::new("buckler", 1.5).with_port(Port::new(PortKind::Shield, 10.0)),
        ItemConfig::new("dagger", 1.0).with_port(Port::damage(1.0)),
        ItemConfig::new("ice_wand", 1.0)
            .with_port(Port::new(PortKind::Freeze, 5.0))
            .with_target(TargetRule::Position { index: 1 }),
        ItemConfig::new("saboteur", 1.0)
            .with_port(Port::new(PortKind::Destroy, 0.0))
            .with_target(TargetRule::Position { index: 0 }),
        ItemConfig::new("bomb", 1.0).with_port(Port::new(PortKind::Destroy, 0.0)),
        ItemConfig::new("venom", 1.0).with_port(Port::new(PortKind::Poison, 2.0)),
        ItemConfig::new("torch", 1.0).with_port(Port::new(PortKind::Burn, 3.0)),
        ItemConfig::new("drum", 1.0)
            .with_port(Port::new(PortKind::Haste, 1.0))
            .with_target(TargetRule::Adjacent),
        ItemConfig::new("rogue", 2.0).with_port(Port::damage(1.0)),
        ItemConfig::new("frost", 1.0)
            .with_port(Port::new(PortKind::Slow, 10.0))
            .with_target(TargetRule::All),
        ItemConfig::new("battery", 1.0)
            .with_port(Port::new(PortKind::Charge, 5.0))
            .with_target(TargetRule::Adjacent),
        ItemConfig::new("hammer", 2.0).with_port(Port::damage(1.0)),
        ItemConfig::new("twin_blades", 5.0)
            .with_port(Port::damage(7.0))
            .with_port(Port::damage(7.0)),
    ])
    .unwrap()
}

fn combatant(hp: i64, items: &[(&str, u8)]) -> Combatant {
    combatant_at(hp, Tier::Bronze, items)
}

fn combatant_at(hp: i64, tier: Tier, items: &[(&str, u8)]) -> Combatant {
    let board = items
        .iter()
        .map(|&(id, slot)| SlotItem::new(id, tier, 1, slot))
        .collect::<Vec<_>>();
    Combatant::new(hp, Board::new(board))
}

fn run(attacker: &Combatant, defender: &Combatant) -> BattleOutcome {
    let catalog = catalog();
    let tiers = TierTable::default();
    BattleEngine::new(&catalog, &tiers).run(attacker, defender)
}

fn trigger_ticks(outcome: &BattleOutcome, side: Side, slot: u8) -> Vec<u32> {
    outcome
        .events
        .iter()
        .filter(|event| {
            event.kind == BattleEventKind::CardTrigger { side, slot_index: slot }
        })
        .map(|event| event.tick)
        .collect()
}

fn events_at(outcome: &BattleOutcome, tick: u32) -> Vec<&BattleEvent> {
    outcome.events.iter().filter(|event| event.tick == tick).collect()
}

/// A 10 second cooldown triggers on tick 100, damage in the same tick.
#[test]
fn test_cooldown_completes_and_damages() {
    let outcome = run(&combatant(100, &[("greatsword", 0)]), &combatant(40, &[]));

    let at_100 = events_at(&outcome, 100);
    assert_eq!(at_100.len(), 2);
    assert_eq!(
        at_100[0].kind,
        BattleEventKind::CardTrigger { side: Side::Player, slot_index: 0 }
    );
    assert_eq!(
        at_100[1].kind,
        BattleEventKind::Damage { target_side: Side::Enemy, value: 20 }
    );

    let snapshot = outcome.snapshots.iter().find(|s| s.tick == 100).unwrap();
    assert_eq!(snapshot.enemy.hp, 20);

    assert!(outcome.events.iter().all(|e| e.tick >= 100));
    assert_eq!(trigger_ticks(&outcome, Side::Player, 0), vec![100, 200]);
    assert!(outcome.attacker_won);
}

/// Shield absorbs first; the event records only hp lost.
#[test]
fn test_damage_against_shield() {
    let outcome = run(&combatant(100, &[("axe", 0)]), &combatant(100, &[("buckler", 0)]));

    let shield = outcome.events_of(BattleEventType::Shield).next().unwrap();
    assert_eq!(shield.tick, 15);

    let hit = outcome.events_of(BattleEventType::Damage).next().unwrap();
    assert_eq!(hit.tick, 20);
    assert_eq!(hit.kind, BattleEventKind::Damage { target_side: Side::Enemy, value: 20 });

    let snapshot = outcome.snapshots.iter().find(|s| s.tick == 20).unwrap();
    assert_eq!(snapshot.enemy.shield, 0);
    assert_eq!(snapshot.enemy.hp, 80);
}

/// Both sides dropping to zero on the same tick goes to the attacker.
#[test]
fn test_simultaneous_death_favors_attacker() {
    // Overtime hits 1 at 21s, 2 at 22s, 3 at 23s: 4 hp ends at -2.
    let outcome = run(&combatant(4, &[]), &combatant(4, &[]));

    assert_eq!(outcome.final_tick, 230);
    assert!(outcome.attacker_won);
    assert_eq!(outcome.winner, Side::Player);
    assert_eq!(outcome.attacker_hp_left, 0);
    assert_eq!(outcome.defender_hp_left, 0);

    let last = outcome.events.last().unwrap();
    assert_eq!(last.tick, 230);
    assert_eq!(last.kind, BattleEventKind::BattleEnd { winner: Side::Player });

    let final_snapshot = outcome.snapshots.last().unwrap();
    assert_eq!(final_snapshot.tick, 230);
    assert_eq!(final_snapshot.player.hp, 0);
    assert_eq!(final_snapshot.enemy.hp, 0);
}

/// A frozen card stays silent for the whole freeze even with a 1s cooldown.
#[test]
fn test_freeze_suspends_triggers() {
    // Ice wand freezes the dagger at 1s; the saboteur then removes the wand.
    let outcome = run(
        &combatant(100, &[("ice_wand", 0)]),
        &combatant(100, &[("dagger", 1), ("saboteur", 5)]),
    );

    let freeze = outcome.events_of(BattleEventType::Freeze).next().unwrap();
    assert_eq!(freeze.tick, 10);
    assert_eq!(freeze.kind.target_slots(), &[1]);
    assert_eq!(outcome.events_of(BattleEventType::Freeze).count(), 1);

    let dagger = trigger_ticks(&outcome, Side::Enemy, 1);
    assert_eq!(dagger[0], 60);

    // No charge while frozen; freeze burns down one tick at a time.
    let frozen: Vec<_> = outcome
        .snapshots
        .iter()
        .filter(|s| (10..=60).contains(&s.tick))
        .map(|s| {
            let card = &s.enemy_cards[0];
            (s.tick, card.cooldown_progress_ms, card.freeze_remain_ms)
        })
        .collect();
    assert_eq!(
        frozen,
        vec![
            (10, 900, 4900),
            (20, 900, 3900),
            (30, 900, 2900),
            (40, 900, 1900),
            (50, 900, 900),
            (60, 0, 0),
        ]
    );
}

/// Destroy with no resolvable target hits the opponent's first item.
#[test]
fn test_destroy_falls_back_to_first_item() {
    let outcome = run(
        &combatant(100, &[("axe", 2), ("dagger", 6)]),
        &combatant(100, &[("bomb", 0)]),
    );

    let first = outcome.events_of(BattleEventType::Destroy).next().unwrap();
    assert_eq!(first.tick, 10);
    assert_eq!(first.kind.target_slots(), &[2]);

    // The axe never gets to swing; the dagger is untouched.
    assert!(trigger_ticks(&outcome, Side::Player, 2).is_empty());
    assert_eq!(trigger_ticks(&outcome, Side::Player, 6)[0], 10);
    let last = outcome.snapshots.last().unwrap();
    assert!(last.player_cards[0].destroyed);
    assert!(!last.player_cards[1].destroyed);
}

/// Poison persists, burn decays by one per DOT tick.
#[test]
fn test_poison_and_burn_ticks() {
    let outcome = run(&combatant(100, &[("venom", 0), ("torch", 1)]), &combatant(500, &[]));

    let dots: Vec<_> = outcome
        .events_of(BattleEventType::DotTick)
        .take(3)
        .map(|e| e.kind.clone())
        .collect();
    assert_eq!(
        dots,
        vec![
            BattleEventKind::DotTick { side: Side::Enemy, poison_damage: 2, burn_damage: 3 },
            BattleEventKind::DotTick { side: Side::Enemy, poison_damage: 4, burn_damage: 5 },
            BattleEventKind::DotTick { side: Side::Enemy, poison_damage: 6, burn_damage: 7 },
        ]
    );

    let first = outcome.events_of(BattleEventType::DotTick).next().unwrap();
    assert_eq!(first.tick, 20);
    assert!(outcome.events_of(BattleEventType::DotTick).all(|e| e.tick % 10 == 0));
}

/// Haste doubles the charge rate of adjacent cards.
#[test]
fn test_haste_speeds_up_neighbour() {
    let outcome = run(&combatant(100, &[("drum", 0), ("rogue", 1)]), &combatant(100, &[]));

    // Without haste the rogue would first fire at 2s.
    assert_eq!(trigger_ticks(&outcome, Side::Player, 1)[0], 15);
}

/// Slow halves the charge rate.
#[test]
fn test_slow_halves_charge_rate() {
    let outcome = run(&combatant(100, &[("dagger", 2)]), &combatant(100, &[("frost", 0)]));

    let ticks = trigger_ticks(&outcome, Side::Player, 2);
    assert_eq!(&ticks[..3], &[10, 30, 50]);
}

/// An overcharged card triggers repeatedly within one tick.
#[test]
fn test_charge_triggers_multiple_times() {
    let outcome = run(&combatant(100, &[("battery", 0), ("hammer", 1)]), &combatant(100, &[]));

    let at_10: Vec<_> = trigger_ticks(&outcome, Side::Player, 1)
        .into_iter()
        .filter(|&tick| tick == 10)
        .collect();
    assert_eq!(at_10.len(), 3);
}

/// Overtime damage escalates each second and bypasses shields.
#[test]
fn test_overtime_escalates() {
    let outcome = run(&combatant(1000, &[]), &combatant(1000, &[("buckler", 0)]));

    let overtime: Vec<_> = outcome.events_of(BattleEventType::Overtime).collect();
    assert_eq!(overtime.len(), 20);
    assert_eq!(overtime[0].tick, 210);
    assert_eq!(
        overtime[0].kind,
        BattleEventKind::Overtime { player_damage: 1, enemy_damage: 1 }
    );
    assert_eq!(
        overtime[19].kind,
        BattleEventKind::Overtime { player_damage: 20, enemy_damage: 20 }
    );

    assert_eq!(outcome.final_tick, 400);
    assert_eq!(outcome.attacker_hp_left, 790);
    assert_eq!(outcome.defender_hp_left, 790);
    assert!(outcome.attacker_won);
}

/// Each port is scaled and rounded on its own.
#[test]
fn test_tier_rounding_per_port() {
    let outcome = run(
        &combatant_at(100, Tier::Silver, &[("twin_blades", 0)]),
        &combatant(100, &[]),
    );

    let hits: Vec<_> = events_at(&outcome, 50)
        .into_iter()
        .filter(|e| e.is(BattleEventType::Damage))
        .map(|e| e.kind.clone())
        .collect();
    assert_eq!(
        hits,
        vec![
            BattleEventKind::Damage { target_side: Side::Enemy, value: 11 },
            BattleEventKind::Damage { target_side: Side::Enemy, value: 11 },
        ]
    );
}

/// Snapshots start at tick 0 and follow every simulated second.
#[test]
fn test_snapshot_schedule() {
    let catalog = catalog();
    let tiers = TierTable::default();
    let config = SimConfig::new(100, 20, 3).unwrap();
    let outcome = BattleEngine::new(&catalog, &tiers)
        .with_config(config)
        .run(&combatant(100, &[("dagger", 0)]), &combatant(100, &[]));

    let ticks: Vec<_> = outcome.snapshots.iter().map(|s| s.tick).collect();
    assert_eq!(ticks, vec![0, 10, 20, 30]);
    assert_eq!(outcome.snapshots[0].enemy.hp, 100);
    assert_eq!(outcome.snapshots[3].enemy.hp, 97);
}

/// Event ticks never decrease.
#[test]
fn test_events_ordered() {
    let outcome = run(
        &combatant(100, &[("venom", 0), ("drum", 1), ("rogue", 2)]),
        &combatant(100, &[("frost", 0), ("bomb", 3), ("buckler", 5)]),
    );

    assert!(outcome.events.windows(2).all(|pair| pair[0].tick <= pair[1].tick));
    assert!(outcome.snapshots.windows(2).all(|pair| pair[0].tick < pair[1].tick));
    assert!(outcome.events.last().unwrap().is(BattleEventType::BattleEnd));
}

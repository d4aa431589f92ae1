//! Tick scheduler - the battle state machine.
//!
//! `BattleEngine` holds the read-only inputs shared across battles (item
//! lookup, tier table, simulation constants). `BattleEngine::start`
//! builds a fresh `Battle` from two combatants; `Battle::advance` runs
//! one tick and `Battle::run` runs to the end.
//!
//! ## Tick order
//!
//! 1. DOT, on second boundaries
//! 2. Player cards, ascending slot order
//! 3. Enemy cards, ascending slot order
//! 4. Overtime damage, on second boundaries past the threshold
//! 5. Periodic snapshot, on second boundaries
//!
//! The battle ends as soon as either side is out of hp (checked after
//! DOT, after every card trigger and at the end of the tick) or when
//! the tick cap is reached.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use super::effect::{EffectApplicator, PortApplication};
use super::event::{BattleEvent, BattleEventKind, BattleEventType};
use super::record::{BattleLog, BattleSnapshot};
use super::side::{Combatant, SideState};
use crate::core::{Side, SideMap, SimConfig};
use crate::items::{ItemConfig, ItemLookup, Tier, TierTable};

/// Scheduler state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattlePhase {
    Running,
    Terminated { winner: Side },
}

impl BattlePhase {
    /// Check if ticks remain to be processed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, BattlePhase::Running)
    }

    /// The winner, once terminated.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            BattlePhase::Running => None,
            BattlePhase::Terminated { winner } => Some(*winner),
        }
    }
}

/// Result of one battle.
///
/// `events` and `snapshots` are handed to playback unmodified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOutcome {
    pub attacker_won: bool,
    pub attacker_hp_left: i64,
    pub defender_hp_left: i64,
    pub winner: Side,
    /// Last processed tick.
    pub final_tick: u32,
    pub events: Vec<BattleEvent>,
    pub snapshots: Vec<BattleSnapshot>,
}

impl BattleOutcome {
    /// Canonical binary encoding. Identical battles encode identically.
    ///
    /// Write-only: events are laid out as `(tick, kind)` pairs because
    /// bincode cannot encode the flattened JSON form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(&OutcomeBytes {
            attacker_won: self.attacker_won,
            attacker_hp_left: self.attacker_hp_left,
            defender_hp_left: self.defender_hp_left,
            winner: self.winner,
            final_tick: self.final_tick,
            events: self.events.iter().map(|event| (event.tick, &event.kind)).collect(),
            snapshots: &self.snapshots,
        })
    }

    /// JSON encoding for the playback layer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Events of one kind, in log order.
    pub fn events_of(&self, event_type: BattleEventType) -> impl Iterator<Item = &BattleEvent> + '_ {
        self.events.iter().filter(move |event| event.is(event_type))
    }
}

/// Binary layout of a `BattleOutcome`.
#[derive(Serialize)]
struct OutcomeBytes<'a> {
    attacker_won: bool,
    attacker_hp_left: i64,
    defender_hp_left: i64,
    winner: Side,
    final_tick: u32,
    events: Vec<(u32, &'a BattleEventKind)>,
    snapshots: &'a [BattleSnapshot],
}

/// Runs battles against a shared item lookup and tier table.
///
/// The engine borrows its inputs and never mutates them, so one engine
/// (or many) can run battles on several threads at once.
///
/// ## Example
///
/// ```
/// use autocard_battle::battle::{BattleEngine, Combatant};
/// use autocard_battle::items::{Board, ItemCatalog, ItemConfig, Port, SlotItem, Tier, TierTable};
///
/// let catalog = ItemCatalog::from_items([
///     ItemConfig::new("sword", 1.0).with_port(Port::damage(10.0)),
/// ]).unwrap();
/// let tiers = TierTable::default();
///
/// let attacker = Combatant::new(50, Board::new(vec![SlotItem::new("sword", Tier::Bronze, 1, 0)]));
/// let defender = Combatant::new(30, Board::empty());
///
/// let outcome = BattleEngine::new(&catalog, &tiers).run(&attacker, &defender);
/// assert!(outcome.attacker_won);
/// assert_eq!(outcome.defender_hp_left, 0);
/// ```
#[derive(Debug)]
pub struct BattleEngine<'a, L: ?Sized> {
    items: &'a L,
    tiers: &'a TierTable,
    config: SimConfig,
}

impl<'a, L: ItemLookup + ?Sized> BattleEngine<'a, L> {
    /// Create an engine with the standard simulation constants.
    #[must_use]
    pub fn new(items: &'a L, tiers: &'a TierTable) -> Self {
        Self {
            items,
            tiers,
            config: SimConfig::default(),
        }
    }

    /// Use different simulation constants (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Simulation constants in use.
    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Set up a battle without running any ticks.
    #[must_use]
    pub fn start(&self, attacker: &Combatant, defender: &Combatant) -> Battle<'a> {
        let items = self.items;
        let loadouts = SideMap::from_pair(attacker, defender).map(|side, combatant| {
            combatant
                .board
                .iter()
                .map(|slot| {
                    let item = items.item(&slot.item_id);
                    if item.is_none() {
                        tracing::debug!(%side, slot = slot.slot_index, item = %slot.item_id, "unknown item, card skipped");
                    }
                    Loadout { item, tier: slot.tier }
                })
                .collect()
        });

        let sides = SideMap::from_pair(SideState::new(attacker), SideState::new(defender));
        let mut log = BattleLog::new();
        log.snapshot(BattleSnapshot::capture(0, &sides));

        Battle {
            tiers: self.tiers,
            config: self.config,
            sides,
            loadouts,
            log,
            tick: 0,
            phase: BattlePhase::Running,
        }
    }

    /// Run a full battle. `attacker` fights as `Side::Player`.
    #[must_use]
    pub fn run(&self, attacker: &Combatant, defender: &Combatant) -> BattleOutcome {
        let span = tracing::debug_span!("battle", attacker_hp = attacker.hp, defender_hp = defender.hp);
        let _enter = span.enter();

        self.start(attacker, defender).run()
    }
}

/// Item definition and tier behind one card, resolved once per battle.
#[derive(Clone, Copy, Debug)]
struct Loadout<'a> {
    /// `None` when the item id is unknown.
    item: Option<&'a ItemConfig>,
    tier: Tier,
}

/// One battle in progress.
#[derive(Clone, Debug)]
pub struct Battle<'a> {
    tiers: &'a TierTable,
    config: SimConfig,
    sides: SideMap<SideState>,
    /// Parallel to each side's cards.
    loadouts: SideMap<Vec<Loadout<'a>>>,
    log: BattleLog,
    tick: u32,
    phase: BattlePhase,
}

impl Battle<'_> {
    /// Last processed tick.
    #[must_use]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// State of one side.
    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side]
    }

    /// Events and snapshots so far.
    #[must_use]
    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Process one tick. Does nothing once terminated.
    pub fn advance(&mut self) -> BattlePhase {
        if !self.phase.is_running() {
            return self.phase;
        }

        self.tick += 1;
        let tick = self.tick;
        if self.step(tick).is_break() || tick >= self.config.max_ticks() {
            self.terminate();
        }
        self.phase
    }

    /// Run the remaining ticks and produce the outcome.
    #[must_use]
    pub fn run(mut self) -> BattleOutcome {
        while self.phase.is_running() {
            self.advance();
        }

        let winner = self.phase.winner().unwrap_or(Side::Player);
        let (events, snapshots) = self.log.into_parts();
        BattleOutcome {
            attacker_won: winner == Side::Player,
            attacker_hp_left: self.sides[Side::Player].hp,
            defender_hp_left: self.sides[Side::Enemy].hp,
            winner,
            final_tick: self.tick,
            events,
            snapshots,
        }
    }

    fn step(&mut self, tick: u32) -> ControlFlow<()> {
        let second = self.config.is_second_boundary(tick);

        if second {
            self.apply_dots(tick);
            self.check_defeat()?;
        }

        for side in Side::ALL {
            self.process_cards(side, tick)?;
        }

        if second {
            self.apply_overtime(tick);
            self.log.snapshot(BattleSnapshot::capture(tick, &self.sides));
        }

        self.check_defeat()
    }

    fn check_defeat(&self) -> ControlFlow<()> {
        if self.sides.iter().any(|(_, state)| state.is_defeated()) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn apply_dots(&mut self, tick: u32) {
        for side in Side::ALL {
            if let Some((poison_damage, burn_damage)) = self.sides[side].tick_dots() {
                tracing::trace!(%side, tick, poison_damage, burn_damage, "dot tick");
                self.log.record(
                    tick,
                    BattleEventKind::DotTick { side, poison_damage, burn_damage },
                );
            }
        }
    }

    fn process_cards(&mut self, side: Side, tick: u32) -> ControlFlow<()> {
        let tick_ms = self.config.tick_ms();

        for position in 0..self.loadouts[side].len() {
            let Loadout { item, tier } = self.loadouts[side][position];
            let Some(item) = item else { continue };
            let cooldown_ms = item.cooldown_ms();
            if cooldown_ms == 0 {
                continue;
            }

            let Some(card) = self.sides[side].card_at_mut(position) else { continue };
            if card.destroyed {
                continue;
            }
            // A frozen card sits the whole tick out, even if charged.
            let frozen = card.is_frozen();
            card.advance(tick_ms);
            if frozen {
                continue;
            }
            let slot = card.slot_index;

            while self.sides[side]
                .card_at_mut(position)
                .is_some_and(|card| card.try_trigger(cooldown_ms))
            {
                self.trigger(side, slot, item, tier, tick);
                self.check_defeat()?;
            }
        }

        ControlFlow::Continue(())
    }

    fn trigger(&mut self, side: Side, slot: u8, item: &ItemConfig, tier: Tier, tick: u32) {
        tracing::trace!(%side, slot, item = %item.item_id, tick, "card trigger");
        self.log.record(tick, BattleEventKind::CardTrigger { side, slot_index: slot });

        for port in &item.ports {
            let application = PortApplication {
                acting: side,
                source_slot: slot,
                rule: item.target_rule,
                kind: port.kind,
                value: self.tiers.scale_rounded(tier, port.value),
            };
            let kind = EffectApplicator::apply(&mut self.sides, &application);
            self.log.record(tick, kind);
        }
    }

    fn apply_overtime(&mut self, tick: u32) {
        let elapsed = self.config.elapsed_secs(tick);
        let threshold = self.config.overtime_after_secs();
        if elapsed <= threshold {
            return;
        }

        let damage = i64::from(elapsed - threshold);
        for (_, state) in self.sides.iter_mut() {
            state.hp = state.hp.saturating_sub(damage);
        }

        tracing::trace!(tick, damage, "overtime");
        self.log.record(
            tick,
            BattleEventKind::Overtime { player_damage: damage, enemy_damage: damage },
        );
    }

    fn terminate(&mut self) {
        for (_, state) in self.sides.iter_mut() {
            state.clamp_hp();
        }

        // Ties go to the attacker.
        let winner = if self.sides[Side::Player].hp >= self.sides[Side::Enemy].hp {
            Side::Player
        } else {
            Side::Enemy
        };

        tracing::debug!(
            %winner,
            tick = self.tick,
            player_hp = self.sides[Side::Player].hp,
            enemy_hp = self.sides[Side::Enemy].hp,
            "battle ended"
        );

        self.log.record(self.tick, BattleEventKind::BattleEnd { winner });
        self.log.final_snapshot(BattleSnapshot::capture(self.tick, &self.sides));
        self.phase = BattlePhase::Terminated { winner };
    }
}

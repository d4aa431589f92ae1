//! Event log and snapshot recording.
//!
//! `BattleLog` is the append-only output of one battle: the event list
//! and the periodic `BattleSnapshot`s used to re-sync playback. Ticks
//! never go backwards in either list, and snapshot ticks are unique.

use serde::{Deserialize, Serialize};

use super::event::{BattleEvent, BattleEventKind};
use super::runtime::CardRuntimeState;
use super::side::{SideState, SideStatus};
use crate::core::{Side, SideMap};

/// Full capture of both sides at the end of a tick.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSnapshot {
    pub tick: u32,
    pub player: SideStatus,
    pub enemy: SideStatus,
    pub player_cards: Vec<CardRuntimeState>,
    pub enemy_cards: Vec<CardRuntimeState>,
}

impl BattleSnapshot {
    /// Capture both sides.
    #[must_use]
    pub fn capture(tick: u32, sides: &SideMap<SideState>) -> Self {
        let player = &sides[Side::Player];
        let enemy = &sides[Side::Enemy];

        Self {
            tick,
            player: player.status(),
            enemy: enemy.status(),
            player_cards: player.cards().to_vec(),
            enemy_cards: enemy.cards().to_vec(),
        }
    }

    /// Status of one side.
    #[must_use]
    pub fn status(&self, side: Side) -> &SideStatus {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Card states of one side.
    #[must_use]
    pub fn cards(&self, side: Side) -> &[CardRuntimeState] {
        match side {
            Side::Player => &self.player_cards,
            Side::Enemy => &self.enemy_cards,
        }
    }
}

/// Append-only event and snapshot recorder.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    events: Vec<BattleEvent>,
    snapshots: Vec<BattleSnapshot>,
}

impl BattleLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: BattleEvent) {
        debug_assert!(
            self.events.last().is_none_or(|last| last.tick <= event.tick),
            "event tick went backwards"
        );
        self.events.push(event);
    }

    /// Append an event at `tick`.
    pub fn record(&mut self, tick: u32, kind: BattleEventKind) {
        self.push(BattleEvent::new(tick, kind));
    }

    /// Append a periodic snapshot.
    pub fn snapshot(&mut self, snapshot: BattleSnapshot) {
        debug_assert!(
            self.snapshots.last().is_none_or(|last| last.tick < snapshot.tick),
            "snapshot tick must increase"
        );
        self.snapshots.push(snapshot);
    }

    /// Append the final snapshot, replacing a periodic one taken at the
    /// same tick.
    pub fn final_snapshot(&mut self, snapshot: BattleSnapshot) {
        if self.snapshots.last().is_some_and(|last| last.tick == snapshot.tick) {
            self.snapshots.pop();
        }
        self.snapshot(snapshot);
    }

    /// Events so far.
    #[must_use]
    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Snapshots so far.
    #[must_use]
    pub fn snapshots(&self) -> &[BattleSnapshot] {
        &self.snapshots
    }

    /// Consume the log.
    #[must_use]
    pub fn into_parts(self) -> (Vec<BattleEvent>, Vec<BattleSnapshot>) {
        (self.events, self.snapshots)
    }
}

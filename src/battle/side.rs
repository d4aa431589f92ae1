//! Side state - one combatant's runtime during a battle.
//!
//! A `Combatant` is what the caller hands in (starting hp and board).
//! The engine turns each into a `SideState` holding hp, shield, the
//! poison/burn counters and one `CardRuntimeState` per board item, in
//! board order.

use serde::{Deserialize, Serialize};

use super::runtime::CardRuntimeState;
use crate::items::Board;

/// Engine input for one side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub hp: i64,
    pub max_hp: i64,
    pub level: u32,
    pub board: Board,
}

impl Combatant {
    /// Create a combatant at full health.
    #[must_use]
    pub fn new(max_hp: i64, board: Board) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            level: 1,
            board,
        }
    }

    /// Set current hp (builder pattern).
    #[must_use]
    pub fn with_hp(mut self, hp: i64) -> Self {
        self.hp = hp;
        self
    }

    /// Set level (builder pattern).
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }
}

/// Hp and status counters of one side, as captured in snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideStatus {
    pub hp: i64,
    pub max_hp: i64,
    pub shield: i64,
    pub poison: i64,
    pub burn: i64,
}

/// One combatant's mutable battle state.
///
/// `hp` may dip below zero inside a tick; it is clamped when the battle
/// ends. Poison persists, burn decays by one per DOT tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SideState {
    pub hp: i64,
    pub max_hp: i64,
    pub shield: i64,
    pub poison: i64,
    pub burn: i64,
    board: Board,
    cards: Vec<CardRuntimeState>,
}

impl SideState {
    /// Build fresh state from a combatant.
    #[must_use]
    pub fn new(combatant: &Combatant) -> Self {
        let board = combatant.board.clone();
        let cards = board
            .iter()
            .map(|item| CardRuntimeState::new(item.slot_index))
            .collect();

        Self {
            hp: combatant.hp,
            max_hp: combatant.max_hp,
            shield: 0,
            poison: 0,
            burn: 0,
            board,
            cards,
        }
    }

    /// The board this side fights with.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Card states in board order.
    #[must_use]
    pub fn cards(&self) -> &[CardRuntimeState] {
        &self.cards
    }

    /// Card state at a board position.
    pub fn card_at_mut(&mut self, position: usize) -> Option<&mut CardRuntimeState> {
        self.cards.get_mut(position)
    }

    /// Card state keyed by slot index.
    #[must_use]
    pub fn card(&self, slot_index: u8) -> Option<&CardRuntimeState> {
        self.cards.iter().find(|card| card.slot_index == slot_index)
    }

    /// Mutable card state keyed by slot index.
    pub fn card_mut(&mut self, slot_index: u8) -> Option<&mut CardRuntimeState> {
        self.cards.iter_mut().find(|card| card.slot_index == slot_index)
    }

    /// Whether this side is out of hp.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Take damage, letting shield absorb first.
    ///
    /// Returns the hp actually lost.
    pub fn absorb_damage(&mut self, amount: i64) -> i64 {
        let amount = amount.max(0);
        let real = (amount - self.shield).max(0);
        self.shield = (self.shield - amount).max(0);
        self.hp = self.hp.saturating_sub(real);
        real
    }

    /// Heal up to max hp. Returns the hp actually restored.
    pub fn heal(&mut self, amount: i64) -> i64 {
        let before = self.hp;
        self.hp = self.max_hp.min(self.hp.saturating_add(amount.max(0))).max(before);
        self.hp - before
    }

    /// Apply one second of poison and burn.
    ///
    /// Returns `(poison_damage, burn_damage)` from the values before the
    /// tick, or `None` when neither is active.
    pub fn tick_dots(&mut self) -> Option<(i64, i64)> {
        let (poison, burn) = (self.poison, self.burn);
        let total = poison.saturating_add(burn);
        if total <= 0 {
            return None;
        }

        self.hp = self.hp.saturating_sub(total);
        self.burn = (burn - 1).max(0);
        Some((poison, burn))
    }

    /// Clamp hp at zero.
    pub fn clamp_hp(&mut self) {
        self.hp = self.hp.max(0);
    }

    /// Current counters.
    #[must_use]
    pub fn status(&self) -> SideStatus {
        SideStatus {
            hp: self.hp,
            max_hp: self.max_hp,
            shield: self.shield,
            poison: self.poison,
            burn: self.burn,
        }
    }
}

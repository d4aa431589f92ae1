//! Encounter adapters.
//!
//! Turn the two kinds of opponents a run meets into defender
//! `Combatant`s:
//!
//! - **PvE**: a `MonsterProfile` fights with a single synthetic attack
//!   item. The item is built per battle and layered over the shared
//!   catalog with an `Overlay`, so the shared catalog is never touched.
//! - **PvP**: a `MirrorSnapshot` is a stored copy of another player's
//!   board and hp, fought as-is.

use serde::{Deserialize, Serialize};

use crate::battle::{BattleEngine, BattleOutcome, Combatant};
use crate::core::SimConfig;
use crate::items::{Board, ItemConfig, ItemLookup, Overlay, Port, SlotItem, TargetRule, Tier, TierTable};

/// Item ID of the synthetic monster attack.
pub const MONSTER_ATTACK_ID: &str = "__monster_attack";

/// Seconds between monster attacks.
pub const MONSTER_ATTACK_COOLDOWN: f64 = 2.0;

/// The synthetic attack item for a monster hitting for `attack`.
#[must_use]
pub fn monster_attack_item(attack: i64) -> ItemConfig {
    let mut item = ItemConfig::new(MONSTER_ATTACK_ID, MONSTER_ATTACK_COOLDOWN)
        .with_port(Port::damage(attack as f64))
        .with_target(TargetRule::Self_);
    item.name = "Monster Attack".to_string();
    item
}

/// Combat stats of a monster.
///
/// Deserializes from monster content records; loot, rewards and the
/// like are ignored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterProfile {
    pub hp: i64,
    pub attack: i64,
}

impl MonsterProfile {
    #[must_use]
    pub fn new(hp: i64, attack: i64) -> Self {
        Self { hp, attack }
    }

    /// The monster as a defender: full hp, one bronze attack item in slot 0.
    #[must_use]
    pub fn combatant(&self) -> Combatant {
        let board = Board::new(vec![SlotItem::new(MONSTER_ATTACK_ID, Tier::Bronze, 1, 0)]);
        Combatant::new(self.hp, board)
    }

    /// The attack item this monster fights with.
    #[must_use]
    pub fn attack_item(&self) -> ItemConfig {
        monster_attack_item(self.attack)
    }
}

/// Fight a monster.
///
/// `items` is only read; the monster's attack item lives in a
/// battle-local layer on top of it.
#[must_use]
pub fn run_pve_battle<L: ItemLookup + ?Sized>(
    items: &L,
    tiers: &TierTable,
    config: SimConfig,
    player: &Combatant,
    monster: &MonsterProfile,
) -> BattleOutcome {
    let items = Overlay::new(items).with_item(monster.attack_item());
    let outcome = BattleEngine::new(&items, tiers)
        .with_config(config)
        .run(player, &monster.combatant());

    tracing::debug!(
        won = outcome.attacker_won,
        hp_left = outcome.attacker_hp_left,
        monster_hp = monster.hp,
        "pve battle resolved"
    );
    outcome
}

/// Stored copy of a player's fighting state, used as a PvP opponent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MirrorSnapshot {
    pub level: u32,
    pub hp: i64,
    pub max_hp: i64,
    pub board: Board,
    pub hero_id: String,
}

impl MirrorSnapshot {
    /// Capture a combatant for later mirroring.
    #[must_use]
    pub fn capture(combatant: &Combatant, hero_id: impl Into<String>) -> Self {
        Self {
            level: combatant.level,
            hp: combatant.hp,
            max_hp: combatant.max_hp,
            board: combatant.board.clone(),
            hero_id: hero_id.into(),
        }
    }

    /// The mirror as a defender.
    #[must_use]
    pub fn to_combatant(&self) -> Combatant {
        self.clone().into()
    }
}

impl From<MirrorSnapshot> for Combatant {
    fn from(mirror: MirrorSnapshot) -> Self {
        Combatant::new(mirror.max_hp, mirror.board)
            .with_hp(mirror.hp)
            .with_level(mirror.level)
    }
}

//! Battle events.
//!
//! Every observable thing the engine does is recorded as a
//! `BattleEvent`: the tick it happened on plus a `BattleEventKind`
//! carrying only the fields that kind needs. The playback layer replays
//! them in order; a tick maps to wall-clock time through the tick length.

use serde::{Deserialize, Serialize};

use super::targeting::TargetSlots;
use crate::core::Side;

/// What happened.
///
/// Serialized flat: a snake_case `type` tag next to camelCase fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum BattleEventKind {
    /// A card's cooldown completed; its port events follow.
    CardTrigger { side: Side, slot_index: u8 },

    /// Hp lost after shield absorption.
    Damage { target_side: Side, value: i64 },
    /// Poison stacks added.
    Poison { target_side: Side, value: i64 },
    /// Burn stacks added.
    Burn { target_side: Side, value: i64 },
    /// Hp restored after clamping at max.
    Heal { target_side: Side, value: i64 },
    /// Shield added.
    Shield { target_side: Side, value: i64 },

    /// Haste seconds added to the listed cards.
    Haste {
        target_side: Side,
        value: i64,
        #[serde(rename = "targetSlotIndices")]
        target_slots: TargetSlots,
    },
    /// Charge seconds added to the listed cards.
    Charge {
        target_side: Side,
        value: i64,
        #[serde(rename = "targetSlotIndices")]
        target_slots: TargetSlots,
    },
    /// Slow seconds added to the listed cards.
    Slow {
        target_side: Side,
        value: i64,
        #[serde(rename = "targetSlotIndices")]
        target_slots: TargetSlots,
    },
    /// Freeze seconds added to the listed cards.
    Freeze {
        target_side: Side,
        value: i64,
        #[serde(rename = "targetSlotIndices")]
        target_slots: TargetSlots,
    },
    /// The listed cards were targeted for destruction.
    Destroy {
        target_side: Side,
        #[serde(rename = "targetSlotIndices")]
        target_slots: TargetSlots,
    },

    /// Once-per-second poison and burn damage to one side.
    DotTick {
        side: Side,
        #[serde(rename = "poisonDmg")]
        poison_damage: i64,
        #[serde(rename = "burnDmg")]
        burn_damage: i64,
    },
    /// Forced damage to both sides after the overtime threshold.
    Overtime {
        #[serde(rename = "playerDmg")]
        player_damage: i64,
        #[serde(rename = "enemyDmg")]
        enemy_damage: i64,
    },

    /// The battle is over.
    BattleEnd { winner: Side },
}

/// Field-less discriminant of `BattleEventKind`, for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleEventType {
    CardTrigger,
    Damage,
    Poison,
    Burn,
    Heal,
    Shield,
    Haste,
    Charge,
    Slow,
    Freeze,
    Destroy,
    DotTick,
    Overtime,
    BattleEnd,
}

impl BattleEventType {
    /// The serialized `type` tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CardTrigger => "card_trigger",
            Self::Damage => "damage",
            Self::Poison => "poison",
            Self::Burn => "burn",
            Self::Heal => "heal",
            Self::Shield => "shield",
            Self::Haste => "haste",
            Self::Charge => "charge",
            Self::Slow => "slow",
            Self::Freeze => "freeze",
            Self::Destroy => "destroy",
            Self::DotTick => "dot_tick",
            Self::Overtime => "overtime",
            Self::BattleEnd => "battle_end",
        }
    }
}

impl BattleEventKind {
    /// The kind without its payload.
    #[must_use]
    pub const fn event_type(&self) -> BattleEventType {
        match self {
            Self::CardTrigger { .. } => BattleEventType::CardTrigger,
            Self::Damage { .. } => BattleEventType::Damage,
            Self::Poison { .. } => BattleEventType::Poison,
            Self::Burn { .. } => BattleEventType::Burn,
            Self::Heal { .. } => BattleEventType::Heal,
            Self::Shield { .. } => BattleEventType::Shield,
            Self::Haste { .. } => BattleEventType::Haste,
            Self::Charge { .. } => BattleEventType::Charge,
            Self::Slow { .. } => BattleEventType::Slow,
            Self::Freeze { .. } => BattleEventType::Freeze,
            Self::Destroy { .. } => BattleEventType::Destroy,
            Self::DotTick { .. } => BattleEventType::DotTick,
            Self::Overtime { .. } => BattleEventType::Overtime,
            Self::BattleEnd { .. } => BattleEventType::BattleEnd,
        }
    }

    /// Short name, matching the serialized `type` tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.event_type().name()
    }

    /// Slot indices for multi-target kinds; empty otherwise.
    #[must_use]
    pub fn target_slots(&self) -> &[u8] {
        match self {
            Self::Haste { target_slots, .. }
            | Self::Charge { target_slots, .. }
            | Self::Slow { target_slots, .. }
            | Self::Freeze { target_slots, .. }
            | Self::Destroy { target_slots, .. } => target_slots.as_slice(),
            _ => &[],
        }
    }
}

/// An event stamped with its tick.
///
/// The kind's fields sit next to `tick` in JSON. Formats that need
/// fixed-length maps (bincode) must go through `BattleOutcome::to_bytes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleEvent {
    pub tick: u32,
    #[serde(flatten)]
    pub kind: BattleEventKind,
}

impl BattleEvent {
    /// Create an event.
    #[must_use]
    pub fn new(tick: u32, kind: BattleEventKind) -> Self {
        Self { tick, kind }
    }

    /// Check the event kind.
    #[must_use]
    pub fn is(&self, event_type: BattleEventType) -> bool {
        self.kind.event_type() == event_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_event_names() {
        let trigger = BattleEventKind::CardTrigger { side: Side::Player, slot_index: 0 };
        let end = BattleEventKind::BattleEnd { winner: Side::Enemy };

        assert_eq!(trigger.event_type(), BattleEventType::CardTrigger);
        assert_eq!(trigger.name(), "card_trigger");
        assert_eq!(end.name(), "battle_end");

        let event = BattleEvent::new(3, end);
        assert!(event.is(BattleEventType::BattleEnd));
        assert!(!event.is(BattleEventType::Damage));
    }

    #[test]
    fn test_target_slots() {
        let freeze = BattleEventKind::Freeze {
            target_side: Side::Enemy,
            value: 2,
            target_slots: smallvec![1, 4],
        };
        let damage = BattleEventKind::Damage { target_side: Side::Enemy, value: 5 };

        assert_eq!(freeze.target_slots(), &[1, 4]);
        assert!(damage.target_slots().is_empty());
    }

    #[test]
    fn test_event_json_shape() {
        let event = BattleEvent::new(
            12,
            BattleEventKind::Damage { target_side: Side::Enemy, value: 20 },
        );

        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"tick":12,"type":"damage","targetSide":"enemy","value":20}"#);

        let back: BattleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_event_json_field_names() {
        let cases = [
            (
                BattleEventKind::CardTrigger { side: Side::Player, slot_index: 3 },
                serde_json::json!({"tick": 5, "type": "card_trigger", "side": "player", "slotIndex": 3}),
            ),
            (
                BattleEventKind::Freeze {
                    target_side: Side::Enemy,
                    value: 2,
                    target_slots: smallvec![0, 4],
                },
                serde_json::json!({
                    "tick": 5, "type": "freeze", "targetSide": "enemy", "value": 2,
                    "targetSlotIndices": [0, 4]
                }),
            ),
            (
                BattleEventKind::DotTick { side: Side::Enemy, poison_damage: 3, burn_damage: 1 },
                serde_json::json!({"tick": 5, "type": "dot_tick", "side": "enemy", "poisonDmg": 3, "burnDmg": 1}),
            ),
            (
                BattleEventKind::Overtime { player_damage: 4, enemy_damage: 4 },
                serde_json::json!({"tick": 5, "type": "overtime", "playerDmg": 4, "enemyDmg": 4}),
            ),
            (
                BattleEventKind::BattleEnd { winner: Side::Player },
                serde_json::json!({"tick": 5, "type": "battle_end", "winner": "player"}),
            ),
        ];

        for (kind, expected) in cases {
            let event = BattleEvent::new(5, kind);
            assert_eq!(serde_json::to_value(&event).unwrap(), expected);
            assert_eq!(expected["type"], event.kind.name());

            let back: BattleEvent = serde_json::from_value(expected).unwrap();
            assert_eq!(back, event);
        }
    }
}

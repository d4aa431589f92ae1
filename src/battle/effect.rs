//! Effect application - executing one port on battle state.
//!
//! The `EffectApplicator` takes a port kind and its tier-scaled value
//! and mutates the acting side, the opposing side, or cards on either
//! board. Every application yields exactly one `BattleEventKind`, even
//! when it hits several cards or none at all.
//!
//! Routing by kind:
//! - damage, poison, burn, destroy, slow, freeze: the opponent
//! - heal, shield, haste, charge: the acting side

use super::event::BattleEventKind;
use super::runtime::{secs_to_ms, CardRuntimeState};
use super::side::SideState;
use super::targeting::{resolve_targets, TargetSlots};
use crate::core::{Side, SideMap};
use crate::items::{PortKind, TargetRule};

/// One port about to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortApplication {
    /// Side of the triggering card.
    pub acting: Side,
    /// Slot of the triggering card; anchors target resolution.
    pub source_slot: u8,
    /// Target rule of the triggering item.
    pub rule: TargetRule,
    pub kind: PortKind,
    /// Value after tier scaling and rounding. Negative counts as zero.
    pub value: i64,
}

/// Applies ports to battle state.
pub struct EffectApplicator;

impl EffectApplicator {
    /// Apply one port and return the event describing it.
    pub fn apply(sides: &mut SideMap<SideState>, port: &PortApplication) -> BattleEventKind {
        let acting = port.acting;
        let opponent = acting.opponent();
        let value = port.value.max(0);
        let (own, opp) = sides.split_mut(acting);

        match port.kind {
            PortKind::Damage => BattleEventKind::Damage {
                target_side: opponent,
                value: opp.absorb_damage(value),
            },

            PortKind::Poison => {
                opp.poison = opp.poison.saturating_add(value);
                BattleEventKind::Poison { target_side: opponent, value }
            }

            PortKind::Burn => {
                opp.burn = opp.burn.saturating_add(value);
                BattleEventKind::Burn { target_side: opponent, value }
            }

            PortKind::Destroy => {
                let mut targets = resolve_targets(port.rule, opp.board(), port.source_slot);
                if targets.is_empty() {
                    targets.extend(opp.board().first().map(|item| item.slot_index));
                }

                for &slot in &targets {
                    if opp.card_mut(slot).is_some_and(CardRuntimeState::destroy) {
                        tracing::trace!(side = %opponent, slot, "card destroyed");
                    }
                }

                BattleEventKind::Destroy {
                    target_side: opponent,
                    target_slots: targets,
                }
            }

            PortKind::Heal => BattleEventKind::Heal {
                target_side: acting,
                value: own.heal(value),
            },

            PortKind::Shield => {
                own.shield = own.shield.saturating_add(value);
                BattleEventKind::Shield { target_side: acting, value }
            }

            PortKind::Haste => {
                let target_slots = modify_cards(own, port, |card, ms| card.add_haste(ms));
                BattleEventKind::Haste { target_side: acting, value, target_slots }
            }

            PortKind::Charge => {
                let target_slots = modify_cards(own, port, |card, ms| card.add_charge(ms));
                BattleEventKind::Charge { target_side: acting, value, target_slots }
            }

            PortKind::Slow => {
                let target_slots = modify_cards(opp, port, |card, ms| card.add_slow(ms));
                BattleEventKind::Slow { target_side: opponent, value, target_slots }
            }

            PortKind::Freeze => {
                let target_slots = modify_cards(opp, port, |card, ms| card.add_freeze(ms));
                BattleEventKind::Freeze { target_side: opponent, value, target_slots }
            }
        }
    }
}

/// Resolve targets on `side` and apply a timed change to each live card.
///
/// Destroyed targets are skipped but still reported.
fn modify_cards(
    side: &mut SideState,
    port: &PortApplication,
    apply: impl Fn(&mut CardRuntimeState, u32),
) -> TargetSlots {
    let targets = resolve_targets(port.rule, side.board(), port.source_slot);
    let ms = secs_to_ms(port.value);

    for &slot in &targets {
        if let Some(card) = side.card_mut(slot).filter(|card| !card.destroyed) {
            apply(card, ms);
        }
    }

    targets
}

//! Target resolution.
//!
//! Maps a `TargetRule`, a board and an anchor slot to the slot indices
//! of the targeted items. The anchor is the acting card's slot; when a
//! rule is resolved against the opponent's board the same index is used
//! and an opponent item starting there plays the anchor's role.
//!
//! Resolution never fails: a rule with nothing to hit yields an empty
//! list, and the effect becomes a no-op.

use smallvec::SmallVec;

use crate::items::{Board, TargetRule};

/// Resolved target slot indices, in ascending slot order.
///
/// Boards hold a handful of items, so this stays inline.
pub type TargetSlots = SmallVec<[u8; 4]>;

/// Resolve a target rule on `board` relative to `anchor`.
///
/// The anchor itself is never part of the result.
///
/// ## Example
///
/// ```
/// use autocard_battle::battle::resolve_targets;
/// use autocard_battle::items::{Board, SlotItem, TargetRule, Tier};
///
/// let board = Board::new(vec![
///     SlotItem::new("a", Tier::Bronze, 1, 0),
///     SlotItem::new("b", Tier::Bronze, 2, 1),
///     SlotItem::new("c", Tier::Bronze, 1, 3),
///     SlotItem::new("d", Tier::Bronze, 1, 6),
/// ]);
///
/// let targets = resolve_targets(TargetRule::Adjacent, &board, 1);
/// assert_eq!(targets.as_slice(), &[0, 3]);
/// ```
#[must_use]
pub fn resolve_targets(rule: TargetRule, board: &Board, anchor: u8) -> TargetSlots {
    let others = || board.iter().filter(move |item| item.slot_index != anchor);

    match rule {
        TargetRule::Self_ => TargetSlots::new(),
        TargetRule::Adjacent => match board.get(anchor) {
            Some(source) => others()
                .filter(|item| item.touches(source))
                .map(|item| item.slot_index)
                .collect(),
            None => TargetSlots::new(),
        },
        TargetRule::Leftmost => others().next().map(|item| item.slot_index).into_iter().collect(),
        TargetRule::Rightmost => others().last().map(|item| item.slot_index).into_iter().collect(),
        TargetRule::All => others().map(|item| item.slot_index).collect(),
        TargetRule::Position { index } => board
            .covering(index)
            .filter(|item| item.slot_index != anchor)
            .map(|item| item.slot_index)
            .into_iter()
            .collect(),
    }
}

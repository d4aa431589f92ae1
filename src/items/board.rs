//! Boards - item placement for one combatant.
//!
//! A `SlotItem` places one copy of an item at a slot with a tier. A
//! `Board` is the ordered set of placements a combatant brings into a
//! battle. Items are kept in ascending slot order; the engine relies on
//! that order for every pass over a board.

use serde::{Deserialize, Serialize};

use super::definition::ItemId;
use super::tier::Tier;
use crate::error::BoardError;

/// Number of slots on a standard board.
pub const BOARD_SLOTS: u8 = 10;

/// Largest item size in slots.
pub const MAX_ITEM_SIZE: u8 = 3;

/// One item placed on a board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotItem {
    pub item_id: ItemId,
    pub tier: Tier,
    /// Slots occupied, starting at `slot_index`.
    pub size: u8,
    /// First occupied slot.
    pub slot_index: u8,
}

impl SlotItem {
    /// Create a placement.
    #[must_use]
    pub fn new(item_id: impl Into<String>, tier: Tier, size: u8, slot_index: u8) -> Self {
        Self {
            item_id: ItemId::new(item_id),
            tier,
            size,
            slot_index,
        }
    }

    /// One past the last occupied slot.
    #[must_use]
    pub fn end(&self) -> u8 {
        self.slot_index.saturating_add(self.size)
    }

    /// Whether this item occupies `slot`.
    #[must_use]
    pub fn covers(&self, slot: u8) -> bool {
        slot >= self.slot_index && slot < self.end()
    }

    /// Whether this item's range shares a boundary with `other`'s.
    #[must_use]
    pub fn touches(&self, other: &SlotItem) -> bool {
        self.end() == other.slot_index || other.end() == self.slot_index
    }
}

/// A combatant's placed items, in ascending slot order.
///
/// ## Example
///
/// ```
/// use autocard_battle::items::{Board, SlotItem, Tier};
///
/// let board = Board::new(vec![
///     SlotItem::new("shield", Tier::Bronze, 1, 4),
///     SlotItem::new("sword", Tier::Gold, 2, 0),
/// ]);
///
/// let slots: Vec<_> = board.iter().map(|item| item.slot_index).collect();
/// assert_eq!(slots, vec![0, 4]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<SlotItem>", into = "Vec<SlotItem>")]
pub struct Board {
    items: Vec<SlotItem>,
}

impl Board {
    /// Create a board, sorting items by slot index.
    ///
    /// Placement is not checked; use [`Board::validated`] for untrusted input.
    #[must_use]
    pub fn new(mut items: Vec<SlotItem>) -> Self {
        items.sort_by_key(|item| item.slot_index);
        Self { items }
    }

    /// Create a board after checking sizes, range and overlap.
    pub fn validated(items: Vec<SlotItem>, slot_count: u8) -> Result<Self, BoardError> {
        let board = Self::new(items);

        for item in &board.items {
            if item.size == 0 || item.size > MAX_ITEM_SIZE {
                return Err(BoardError::InvalidSize {
                    item: item.item_id.clone(),
                    size: item.size,
                });
            }
            if u16::from(item.slot_index) + u16::from(item.size) > u16::from(slot_count) {
                return Err(BoardError::OutOfRange {
                    item: item.item_id.clone(),
                    slot: item.slot_index,
                    size: item.size,
                    slot_count,
                });
            }
        }

        // Sorted, so only neighbours can overlap.
        for pair in board.items.windows(2) {
            if pair[0].end() > pair[1].slot_index {
                return Err(BoardError::Overlap {
                    item: pair[1].item_id.clone(),
                    slot: pair[1].slot_index,
                    other: pair[0].slot_index,
                });
            }
        }

        Ok(board)
    }

    /// An empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Iterate over items in ascending slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlotItem> {
        self.items.iter()
    }

    /// Items as a slice, in ascending slot order.
    #[must_use]
    pub fn as_slice(&self) -> &[SlotItem] {
        &self.items
    }

    /// The item starting at `slot_index`.
    #[must_use]
    pub fn get(&self, slot_index: u8) -> Option<&SlotItem> {
        self.items.iter().find(|item| item.slot_index == slot_index)
    }

    /// The item occupying `slot`, wherever it starts.
    #[must_use]
    pub fn covering(&self, slot: u8) -> Option<&SlotItem> {
        self.items.iter().find(|item| item.covers(slot))
    }

    /// The item with the lowest slot index.
    #[must_use]
    pub fn first(&self) -> Option<&SlotItem> {
        self.items.first()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the board has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<SlotItem>> for Board {
    fn from(items: Vec<SlotItem>) -> Self {
        Self::new(items)
    }
}

impl From<Board> for Vec<SlotItem> {
    fn from(board: Board) -> Self {
        board.items
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a SlotItem;
    type IntoIter = std::slice::Iter<'a, SlotItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

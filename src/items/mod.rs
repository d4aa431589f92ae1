//! Item system: definitions, tiers, boards, and catalog.
//!
//! ## Key Types
//!
//! - `ItemId`: Identifier for item definitions
//! - `ItemConfig`: Static item data (cooldown, ports, target rule)
//! - `Port` / `PortKind`: One effect an item fires when it triggers
//! - `TargetRule`: How an item picks target cards
//! - `Tier` / `TierTable`: Quality rank and its value multipliers
//! - `SlotItem` / `Board`: Item placement for one combatant
//! - `ItemCatalog` / `ItemLookup` / `Overlay`: Definition lookup

pub mod board;
pub mod catalog;
pub mod definition;
pub mod tier;

pub use board::{Board, SlotItem, BOARD_SLOTS, MAX_ITEM_SIZE};
pub use catalog::{ItemCatalog, ItemLookup, Overlay};
pub use definition::{ItemConfig, ItemId, Port, PortCategory, PortKind, TargetRule};
pub use tier::{Tier, TierTable};

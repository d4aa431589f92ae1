//! Error types for the content and configuration boundary.
//!
//! The battle engine itself is infallible. These errors only surface
//! while building its inputs: parsing item content, placing items on a
//! board, or choosing simulation constants.

use thiserror::Error;

use crate::items::ItemId;

/// Errors raised while loading item content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item {0} is already registered")]
    DuplicateItem(ItemId),
}

/// Errors raised while placing items on a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("item {item} has invalid size {size} (expected 1..=3)")]
    InvalidSize { item: ItemId, size: u8 },

    #[error("item {item} at slot {slot} with size {size} exceeds board of {slot_count} slots")]
    OutOfRange {
        item: ItemId,
        slot: u8,
        size: u8,
        slot_count: u8,
    },

    #[error("item {item} at slot {slot} overlaps the item at slot {other}")]
    Overlap { item: ItemId, slot: u8, other: u8 },
}

/// Errors raised by invalid simulation constants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick length must be positive and divide one second, got {0} ms")]
    InvalidTick(u32),

    #[error("battle length must be positive")]
    ZeroDuration,

    #[error("battle length of {max_secs} s exceeds the tick counter range")]
    TooLong { max_secs: u32 },
}

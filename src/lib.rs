//! # autocard-battle
//!
//! A deterministic fixed-tick battle engine for auto-battler card games.
//!
//! ## Design Principles
//!
//! 1. **Pure**: A battle is a function of two combatants, an item lookup,
//!    a tier table and the simulation constants. No I/O, no randomness,
//!    no shared mutable state.
//!
//! 2. **Deterministic**: Boards are processed in ascending slot order and
//!    simulated time is integer milliseconds. Identical inputs produce
//!    byte-identical outcomes.
//!
//! 3. **Closed vocabularies**: Port kinds, target rules and events are
//!    enums; adding a variant forces every match to be revisited.
//!
//! ## Architecture
//!
//! - **Tick scheduler**: 100 ms ticks. Each tick runs DOT, player cards,
//!   enemy cards, overtime and snapshots, in that order.
//!
//! - **Event log**: Every observable change is a `BattleEvent` stamped with
//!   its tick, plus a `BattleSnapshot` every simulated second for playback.
//!
//! ## Modules
//!
//! - `core`: Sides, per-side storage, simulation constants
//! - `items`: Item definitions, tiers, boards, catalog
//! - `battle`: Runtime state, targeting, effects, scheduler, outcome
//! - `encounter`: PvE monster and PvP mirror opponents
//! - `error`: Content and configuration errors

pub mod core;
pub mod items;
pub mod battle;
pub mod encounter;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Side, SideMap, SimConfig};

pub use crate::items::{
    Board, SlotItem,
    ItemCatalog, ItemLookup, Overlay,
    ItemConfig, ItemId, Port, PortKind, TargetRule,
    Tier, TierTable,
};

pub use crate::battle::{
    Battle, BattleEngine, BattleOutcome, BattlePhase,
    BattleEvent, BattleEventKind, BattleEventType, BattleSnapshot,
    Combatant, SideState, CardRuntimeState,
};

pub use crate::encounter::{run_pve_battle, MirrorSnapshot, MonsterProfile};

pub use crate::error::{BoardError, ConfigError, ContentError};

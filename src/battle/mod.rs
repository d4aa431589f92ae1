//! Battle simulation.
//!
//! A battle is a pure function of two combatants, an item lookup, a tier
//! table and the simulation constants. It produces an ordered event log
//! and periodic snapshots for playback.
//!
//! ## Key Types
//!
//! - `BattleEngine` / `Battle`: Tick scheduler and its running state
//! - `SideState` / `CardRuntimeState`: Mutable per-side and per-card state
//! - `EffectApplicator`: Applies one port to the battle state
//! - `resolve_targets`: Target rule resolution
//! - `BattleEvent` / `BattleSnapshot` / `BattleLog`: Recorded output
//! - `BattleOutcome`: Final result handed back to the caller

pub mod effect;
pub mod engine;
pub mod event;
pub mod record;
pub mod runtime;
pub mod side;
pub mod targeting;

pub use effect::{EffectApplicator, PortApplication};
pub use engine::{Battle, BattleEngine, BattleOutcome, BattlePhase};
pub use event::{BattleEvent, BattleEventKind, BattleEventType};
pub use record::{BattleLog, BattleSnapshot};
pub use runtime::{secs_to_ms, CardRuntimeState};
pub use side::{Combatant, SideState, SideStatus};
pub use targeting::{resolve_targets, TargetSlots};

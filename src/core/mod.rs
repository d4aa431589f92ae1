//! Core battle types: sides, per-side storage, simulation constants.
//!
//! Everything here is independent of item content and is shared by the
//! item, battle and encounter layers.

pub mod config;
pub mod side;

pub use config::{SimConfig, MS_PER_SECOND};
pub use side::{Side, SideMap};

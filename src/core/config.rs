//! Simulation constants.
//!
//! `SimConfig` fixes the tick quantum and the battle's time limits.
//! The engine derives every tick-based schedule (DOT, snapshots,
//! overtime, the hard cap) from it.

use crate::error::ConfigError;

/// Milliseconds in one simulated second.
pub const MS_PER_SECOND: u32 = 1000;

/// Simulation constants for one battle.
///
/// Built through [`SimConfig::new`], which validates the values, or
/// [`SimConfig::default`] for the standard 100 ms / 20 s / 40 s setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    tick_ms: u32,
    overtime_after_secs: u32,
    max_secs: u32,
}

impl SimConfig {
    /// Standard tick length.
    pub const DEFAULT_TICK_MS: u32 = 100;
    /// Standard overtime threshold.
    pub const DEFAULT_OVERTIME_SECS: u32 = 20;
    /// Standard battle length cap.
    pub const DEFAULT_MAX_SECS: u32 = 40;

    /// Create a validated configuration.
    ///
    /// The tick length must divide one second so that once-per-second
    /// work lands on whole ticks, and the tick cap must fit a `u32`.
    pub fn new(tick_ms: u32, overtime_after_secs: u32, max_secs: u32) -> Result<Self, ConfigError> {
        if tick_ms == 0 || MS_PER_SECOND % tick_ms != 0 {
            return Err(ConfigError::InvalidTick(tick_ms));
        }
        if max_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if max_secs.checked_mul(MS_PER_SECOND / tick_ms).is_none() {
            return Err(ConfigError::TooLong { max_secs });
        }

        Ok(Self {
            tick_ms,
            overtime_after_secs,
            max_secs,
        })
    }

    /// Set the overtime threshold (builder pattern).
    #[must_use]
    pub fn with_overtime_after(mut self, secs: u32) -> Self {
        self.overtime_after_secs = secs;
        self
    }

    /// Simulated milliseconds per tick.
    #[must_use]
    pub const fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Seconds after which overtime damage starts.
    #[must_use]
    pub const fn overtime_after_secs(&self) -> u32 {
        self.overtime_after_secs
    }

    /// Maximum simulated battle length in seconds.
    #[must_use]
    pub const fn max_secs(&self) -> u32 {
        self.max_secs
    }

    /// Ticks per simulated second.
    #[must_use]
    pub const fn ticks_per_second(&self) -> u32 {
        MS_PER_SECOND / self.tick_ms
    }

    /// Hard cap on processed ticks.
    #[must_use]
    pub const fn max_ticks(&self) -> u32 {
        self.max_secs * self.ticks_per_second()
    }

    /// Whether `tick` closes a full simulated second.
    #[must_use]
    pub const fn is_second_boundary(&self, tick: u32) -> bool {
        tick % self.ticks_per_second() == 0
    }

    /// Whole simulated seconds elapsed at the end of `tick`.
    #[must_use]
    pub const fn elapsed_secs(&self, tick: u32) -> u32 {
        tick / self.ticks_per_second()
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_ms: Self::DEFAULT_TICK_MS,
            overtime_after_secs: Self::DEFAULT_OVERTIME_SECS,
            max_secs: Self::DEFAULT_MAX_SECS,
        }
    }
}

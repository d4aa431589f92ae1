//! Card runtime state - per-slot combat progress.
//!
//! `CardRuntimeState` is the mutable side of a placed item during one
//! battle: how far its cooldown has charged, which timed modifiers are
//! active, and whether it has been destroyed. All durations are integer
//! simulated milliseconds so that accrual is exact.

use serde::{Deserialize, Serialize};

use crate::core::MS_PER_SECOND;

/// Convert a whole-second port value into milliseconds.
///
/// Negative values count as zero.
#[must_use]
pub fn secs_to_ms(secs: i64) -> u32 {
    let max_secs = i64::from(u32::MAX / MS_PER_SECOND);
    (secs.clamp(0, max_secs) as u32) * MS_PER_SECOND
}

/// Serde adapter: milliseconds in memory, seconds on the wire.
mod as_secs {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::core::MS_PER_SECOND;

    pub fn serialize<S: Serializer>(ms: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(f64::from(*ms) / f64::from(MS_PER_SECOND))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        let ms = (secs * f64::from(MS_PER_SECOND)).round();
        // `as` saturates; NaN becomes zero.
        Ok(ms.clamp(0.0, f64::from(u32::MAX)) as u32)
    }
}

/// Combat state of one card, keyed by its slot index.
///
/// Durations serialize as seconds under their playback names
/// (`cooldownProgress`, `hasteRemain`, `slowRemain`, `freezeRemain`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRuntimeState {
    pub slot_index: u8,
    /// Charge accumulated toward the next trigger.
    #[serde(rename = "cooldownProgress", with = "as_secs")]
    pub cooldown_progress_ms: u32,
    /// Remaining double-speed time.
    #[serde(rename = "hasteRemain", with = "as_secs")]
    pub haste_remain_ms: u32,
    /// Remaining half-speed time.
    #[serde(rename = "slowRemain", with = "as_secs")]
    pub slow_remain_ms: u32,
    /// Remaining time with no charge at all.
    #[serde(rename = "freezeRemain", with = "as_secs")]
    pub freeze_remain_ms: u32,
    /// Terminal: a destroyed card never charges or triggers again.
    pub destroyed: bool,
}

impl CardRuntimeState {
    /// Fresh state for the card at `slot_index`.
    #[must_use]
    pub fn new(slot_index: u8) -> Self {
        Self {
            slot_index,
            ..Self::default()
        }
    }

    /// Whether a freeze is active.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.freeze_remain_ms > 0
    }

    /// Advance the card by one tick and return the charge gained.
    ///
    /// A frozen card only burns down its freeze. Otherwise haste doubles
    /// and slow halves the charge rate; both apply when both are active.
    /// Each active modifier loses one tick of remaining time.
    pub fn advance(&mut self, tick_ms: u32) -> u32 {
        if self.is_frozen() {
            self.freeze_remain_ms = self.freeze_remain_ms.saturating_sub(tick_ms);
            return 0;
        }

        let mut rate = tick_ms;
        if self.haste_remain_ms > 0 {
            rate *= 2;
            self.haste_remain_ms = self.haste_remain_ms.saturating_sub(tick_ms);
        }
        if self.slow_remain_ms > 0 {
            rate /= 2;
            self.slow_remain_ms = self.slow_remain_ms.saturating_sub(tick_ms);
        }

        self.cooldown_progress_ms = self.cooldown_progress_ms.saturating_add(rate);
        rate
    }

    /// Spend one cooldown's worth of charge if available.
    ///
    /// Returns `true` when the card triggers. Call repeatedly: an
    /// overcharged card can trigger more than once in the same tick.
    pub fn try_trigger(&mut self, cooldown_ms: u32) -> bool {
        if self.destroyed || cooldown_ms == 0 || self.cooldown_progress_ms < cooldown_ms {
            return false;
        }
        self.cooldown_progress_ms -= cooldown_ms;
        true
    }

    /// Extend the haste duration.
    pub fn add_haste(&mut self, ms: u32) {
        self.haste_remain_ms = self.haste_remain_ms.saturating_add(ms);
    }

    /// Extend the slow duration.
    pub fn add_slow(&mut self, ms: u32) {
        self.slow_remain_ms = self.slow_remain_ms.saturating_add(ms);
    }

    /// Extend the freeze duration.
    pub fn add_freeze(&mut self, ms: u32) {
        self.freeze_remain_ms = self.freeze_remain_ms.saturating_add(ms);
    }

    /// Add charge instantly.
    pub fn add_charge(&mut self, ms: u32) {
        self.cooldown_progress_ms = self.cooldown_progress_ms.saturating_add(ms);
    }

    /// Mark destroyed. Returns `false` if it already was.
    pub fn destroy(&mut self) -> bool {
        !std::mem::replace(&mut self.destroyed, true)
    }
}

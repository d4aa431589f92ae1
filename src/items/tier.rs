//! Item tiers and their port multipliers.

use serde::{Deserialize, Serialize};

/// Item quality rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
    Diamond,
    Legendary,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 5] = [
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Diamond,
        Tier::Legendary,
    ];

    /// The next tier up, if any.
    #[must_use]
    pub const fn next(self) -> Option<Tier> {
        match self {
            Tier::Bronze => Some(Tier::Silver),
            Tier::Silver => Some(Tier::Gold),
            Tier::Gold => Some(Tier::Diamond),
            Tier::Diamond => Some(Tier::Legendary),
            Tier::Legendary => None,
        }
    }
}

/// Multiplier applied to every port value of an item at a given tier.
///
/// Owned by game content; the engine only reads it. Deserializes from
/// `{"bronze": 1, "silver": 1.5, ...}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub bronze: f64,
    pub silver: f64,
    pub gold: f64,
    pub diamond: f64,
    pub legendary: f64,
}

impl TierTable {
    /// Multiplier for a tier.
    #[must_use]
    pub fn multiplier(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Bronze => self.bronze,
            Tier::Silver => self.silver,
            Tier::Gold => self.gold,
            Tier::Diamond => self.diamond,
            Tier::Legendary => self.legendary,
        }
    }

    /// Override one tier's multiplier (builder pattern).
    #[must_use]
    pub fn with_multiplier(mut self, tier: Tier, multiplier: f64) -> Self {
        match tier {
            Tier::Bronze => self.bronze = multiplier,
            Tier::Silver => self.silver = multiplier,
            Tier::Gold => self.gold = multiplier,
            Tier::Diamond => self.diamond = multiplier,
            Tier::Legendary => self.legendary = multiplier,
        }
        self
    }

    /// Scale a base port value, before rounding.
    #[must_use]
    pub fn scale(&self, tier: Tier, base: f64) -> f64 {
        base * self.multiplier(tier)
    }

    /// Scale a base port value and round to the nearest integer.
    ///
    /// Rounding happens per port, never once per trigger.
    #[must_use]
    pub fn scale_rounded(&self, tier: Tier, base: f64) -> i64 {
        self.scale(tier, base).round() as i64
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            bronze: 1.0,
            silver: 1.5,
            gold: 2.2,
            diamond: 3.0,
            legendary: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers() {
        let table = TierTable::default();

        assert_eq!(table.multiplier(Tier::Bronze), 1.0);
        assert_eq!(table.multiplier(Tier::Silver), 1.5);
        assert_eq!(table.multiplier(Tier::Gold), 2.2);
        assert_eq!(table.multiplier(Tier::Diamond), 3.0);
        assert_eq!(table.multiplier(Tier::Legendary), 4.0);
    }

    #[test]
    fn test_scale_rounded_per_value() {
        let table = TierTable::default();

        assert_eq!(table.scale_rounded(Tier::Silver, 3.0), 5); // 4.5
        assert_eq!(table.scale_rounded(Tier::Gold, 3.0), 7); // 6.6
        assert_eq!(table.scale_rounded(Tier::Silver, 1.0), 2); // 1.5
        assert_eq!(table.scale_rounded(Tier::Bronze, 20.0), 20);
    }

    #[test]
    fn test_doubling_multiplier_doubles_value() {
        let table = TierTable::default().with_multiplier(Tier::Gold, 2.0);
        let doubled = table.with_multiplier(Tier::Gold, 4.0);

        assert_eq!(doubled.scale(Tier::Gold, 7.0), 2.0 * table.scale(Tier::Gold, 7.0));
    }

    #[test]
    fn test_tier_next() {
        assert_eq!(Tier::Bronze.next(), Some(Tier::Silver));
        assert_eq!(Tier::Legendary.next(), None);
        assert!(Tier::Gold > Tier::Silver);
    }

    #[test]
    fn test_tier_table_json() {
        let json = r#"{"bronze":1,"silver":2,"gold":3,"diamond":4,"legendary":5}"#;
        let table: TierTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.multiplier(Tier::Diamond), 4.0);
    }
}

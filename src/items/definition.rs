//! Item definitions - static item data.
//!
//! `ItemConfig` holds the immutable properties of an item type: its
//! cooldown, the ports it fires when that cooldown completes, and the
//! rule used to pick target cards. Placement on a board (slot, tier)
//! lives in `SlotItem`; combat progress lives in the battle runtime.
//!
//! Field names follow the game-content JSON (`itemId`, `targetRule`, ...).

use serde::{Deserialize, Serialize};

use super::tier::Tier;
use crate::core::MS_PER_SECOND;

/// Identifier of an item definition.
///
/// This identifies the "type" of item (e.g. a dagger), not one copy of it
/// on a board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// Broad grouping of a port, used by content and UI only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortCategory {
    Output,
    Operational,
    Defense,
}

/// What a port does when its item triggers.
///
/// Closed set: adding a kind forces every `match` on it to be revisited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortKind {
    // === Output ===
    /// Hit the opponent; shield absorbs first.
    Damage,
    /// Add poison stacks to the opponent.
    Poison,
    /// Add burn stacks to the opponent.
    Burn,
    /// Destroy opponent cards.
    Destroy,

    // === Defense ===
    /// Restore own hp up to max.
    Heal,
    /// Add own shield.
    Shield,

    // === Operational ===
    /// Double charge speed of own cards for a duration.
    Haste,
    /// Instantly add cooldown progress to own cards.
    Charge,
    /// Halve charge speed of opponent cards for a duration.
    Slow,
    /// Stop opponent cards from charging for a duration.
    Freeze,
}

impl PortKind {
    /// Every kind, in declaration order.
    pub const ALL: [PortKind; 10] = [
        PortKind::Damage,
        PortKind::Poison,
        PortKind::Burn,
        PortKind::Destroy,
        PortKind::Heal,
        PortKind::Shield,
        PortKind::Haste,
        PortKind::Charge,
        PortKind::Slow,
        PortKind::Freeze,
    ];

    /// The category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> PortCategory {
        match self {
            PortKind::Damage | PortKind::Poison | PortKind::Burn | PortKind::Destroy => {
                PortCategory::Output
            }
            PortKind::Heal | PortKind::Shield => PortCategory::Defense,
            PortKind::Haste | PortKind::Charge | PortKind::Slow | PortKind::Freeze => {
                PortCategory::Operational
            }
        }
    }
}

/// A declared effect slot on an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub category: PortCategory,
    #[serde(rename = "type")]
    pub kind: PortKind,
    /// Base value before tier scaling.
    pub value: f64,
}

impl Port {
    /// Create a port; the category is derived from the kind.
    #[must_use]
    pub fn new(kind: PortKind, value: f64) -> Self {
        Self {
            category: kind.category(),
            kind,
            value,
        }
    }

    /// Create a damage port.
    #[must_use]
    pub fn damage(value: f64) -> Self {
        Self::new(PortKind::Damage, value)
    }
}

/// Rule for picking target cards, relative to the acting card.
///
/// Serialized as `{"kind": "adjacent"}`, `{"kind": "position", "index": 3}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetRule {
    /// No card targets; the port acts on its side as a whole.
    #[default]
    #[serde(rename = "self")]
    Self_,
    /// Items whose occupied range touches the anchor's range.
    Adjacent,
    /// Lowest slot index other than the anchor.
    Leftmost,
    /// Highest slot index other than the anchor.
    Rightmost,
    /// Every item other than the anchor.
    All,
    /// The item covering an absolute slot index.
    Position { index: u8 },
}

/// Static item configuration.
///
/// Immutable for the duration of a battle.
///
/// ## Example
///
/// ```
/// use autocard_battle::items::{ItemConfig, Port, PortKind, TargetRule};
///
/// let dagger = ItemConfig::new("dagger", 2.5)
///     .with_port(Port::damage(8.0))
///     .with_port(Port::new(PortKind::Haste, 1.0))
///     .with_target(TargetRule::Adjacent);
///
/// assert_eq!(dagger.cooldown_ms(), 2500);
/// assert_eq!(dagger.ports.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConfig {
    pub item_id: ItemId,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Slots occupied on the board.
    #[serde(default = "default_size")]
    pub size: u8,

    #[serde(default)]
    pub base_tier: Tier,

    /// Seconds of charge needed to trigger. Non-positive means passive.
    pub cooldown: f64,

    /// Effects, applied in declared order on every trigger.
    #[serde(default)]
    pub ports: Vec<Port>,

    #[serde(default)]
    pub target_rule: TargetRule,

    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_size() -> u8 {
    1
}

impl ItemConfig {
    /// Create an item with no ports.
    #[must_use]
    pub fn new(item_id: impl Into<String>, cooldown: f64) -> Self {
        let item_id = ItemId::new(item_id);
        Self {
            name: item_id.0.clone(),
            item_id,
            size: 1,
            base_tier: Tier::Bronze,
            cooldown,
            ports: Vec::new(),
            target_rule: TargetRule::Self_,
            tags: Vec::new(),
        }
    }

    /// Add a port (builder pattern).
    #[must_use]
    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    /// Set the target rule (builder pattern).
    #[must_use]
    pub fn with_target(mut self, rule: TargetRule) -> Self {
        self.target_rule = rule;
        self
    }

    /// Set the size (builder pattern).
    #[must_use]
    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Cooldown in simulated milliseconds; zero for passive items.
    #[must_use]
    pub fn cooldown_ms(&self) -> u32 {
        if self.cooldown.is_finite() && self.cooldown > 0.0 {
            (self.cooldown * f64::from(MS_PER_SECOND)).round() as u32
        } else {
            0
        }
    }

    /// Whether the item never charges (non-positive cooldown).
    #[must_use]
    pub fn is_passive(&self) -> bool {
        self.cooldown_ms() == 0
    }

    /// Check if the item has a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

//! Item catalog for definition lookup.
//!
//! The `ItemCatalog` stores the item definitions supplied by game
//! content. The engine only ever reads through the `ItemLookup` trait,
//! so a shared catalog can be layered with per-battle items (see
//! `Overlay`) instead of being patched in place.

use rustc_hash::FxHashMap;

use super::definition::{ItemConfig, ItemId};
use crate::error::ContentError;

/// Read-only item lookup used by the battle engine.
pub trait ItemLookup {
    /// Get an item definition by ID.
    fn item(&self, id: &ItemId) -> Option<&ItemConfig>;
}

/// Catalog of item definitions.
///
/// ## Example
///
/// ```
/// use autocard_battle::items::{ItemCatalog, ItemConfig, ItemId, ItemLookup, Port};
///
/// let mut catalog = ItemCatalog::new();
/// catalog.insert(ItemConfig::new("sword", 3.0).with_port(Port::damage(10.0))).unwrap();
///
/// let found = catalog.item(&ItemId::new("sword")).unwrap();
/// assert_eq!(found.cooldown_ms(), 3000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    items: FxHashMap<ItemId, ItemConfig>,
}

impl ItemCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, rejecting duplicate IDs.
    pub fn from_items(items: impl IntoIterator<Item = ItemConfig>) -> Result<Self, ContentError> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of item records.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let items: Vec<ItemConfig> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Register an item definition.
    pub fn insert(&mut self, item: ItemConfig) -> Result<(), ContentError> {
        if self.items.contains_key(&item.item_id) {
            return Err(ContentError::DuplicateItem(item.item_id));
        }
        self.items.insert(item.item_id.clone(), item);
        Ok(())
    }

    /// Register or replace an item definition.
    pub fn upsert(&mut self, item: ItemConfig) -> Option<ItemConfig> {
        self.items.insert(item.item_id.clone(), item)
    }

    /// Get an item definition by ID.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ItemConfig> {
        self.items.get(id)
    }

    /// Check if an item ID is registered.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Get the number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item IDs in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<&ItemId> {
        let mut ids: Vec<_> = self.items.keys().collect();
        ids.sort();
        ids
    }
}

impl ItemLookup for ItemCatalog {
    fn item(&self, id: &ItemId) -> Option<&ItemConfig> {
        self.get(id)
    }
}

impl<L: ItemLookup + ?Sized> ItemLookup for &L {
    fn item(&self, id: &ItemId) -> Option<&ItemConfig> {
        (**self).item(id)
    }
}

/// A per-battle layer of items over a shared lookup.
///
/// Items in the layer shadow base items with the same ID. The base is
/// only borrowed, so concurrent battles can share it.
#[derive(Clone, Debug)]
pub struct Overlay<'a, L: ?Sized> {
    base: &'a L,
    layer: ItemCatalog,
}

impl<'a, L: ItemLookup + ?Sized> Overlay<'a, L> {
    /// Create an empty layer over `base`.
    #[must_use]
    pub fn new(base: &'a L) -> Self {
        Self {
            base,
            layer: ItemCatalog::new(),
        }
    }

    /// Add an item to the layer (builder pattern).
    #[must_use]
    pub fn with_item(mut self, item: ItemConfig) -> Self {
        self.layer.upsert(item);
        self
    }
}

impl<L: ItemLookup + ?Sized> ItemLookup for Overlay<'_, L> {
    fn item(&self, id: &ItemId) -> Option<&ItemConfig> {
        self.layer.get(id).or_else(|| self.base.item(id))
    }
}

//! # Inventory Module
//!
//! Items and the capacity-bounded inventory that holds them.
//!
//! Item effects are plain data rather than callbacks so they can be derived,
//! compared, and serialized like everything else in the model.

use crate::{new_item_id, ItemId, Player};
use serde::{Deserialize, Serialize};

/// The mutation an item applies to a character when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Restore health, capped at the maximum
    Heal(i32),
    /// Permanently raise strength
    Strength(i32),
    /// Permanently raise defense
    Defense(i32),
    /// No effect when used; the item only carries trade value
    None,
}

/// A carryable item with a gold value and an on-use effect.
///
/// Items are owned by exactly one inventory at a time and are destroyed on
/// use or sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item instance
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Gold value when bought; sells for half
    pub value: i32,
    /// Effect applied to the user
    pub effect: ItemEffect,
    /// Whether the item may be used mid-combat
    pub combat_usable: bool,
}

impl Item {
    /// Creates a new item with a fresh id.
    pub fn new(name: impl Into<String>, value: i32, effect: ItemEffect) -> Self {
        Self {
            id: new_item_id(),
            name: name.into(),
            value,
            effect,
            combat_usable: false,
        }
    }

    /// Creates a new combat-usable item with a fresh id.
    pub fn combat_usable(name: impl Into<String>, value: i32, effect: ItemEffect) -> Self {
        Self {
            combat_usable: true,
            ..Self::new(name, value, effect)
        }
    }

    /// Applies this item's effect to the player.
    ///
    /// Does not remove the item from any inventory; the caller is
    /// responsible for removal after a successful use.
    pub fn apply(&self, player: &mut Player) {
        match self.effect {
            ItemEffect::Heal(amount) => player.heal(amount),
            ItemEffect::Strength(amount) => player.stats.strength += amount,
            ItemEffect::Defense(amount) => player.stats.defense += amount,
            ItemEffect::None => {}
        }
    }
}

/// An ordered, capacity-bounded container of items.
///
/// Order is acquisition order. Size never exceeds capacity.
///
/// # Examples
///
/// ```
/// use westeros::{Inventory, Item, ItemEffect};
///
/// let mut inventory = Inventory::new(2);
/// assert!(inventory.add(Item::new("Map", 10, ItemEffect::None)).is_ok());
/// assert!(inventory.add(Item::new("Rope", 5, ItemEffect::None)).is_ok());
/// // Third add is refused and hands the item back unchanged.
/// let refused = inventory.add(Item::new("Torch", 2, ItemEffect::None));
/// assert!(refused.is_err());
/// assert_eq!(inventory.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    /// Creates an empty inventory with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds an item, preserving insertion order.
    ///
    /// Returns the item back as `Err` when the inventory is at capacity,
    /// leaving the contents untouched.
    pub fn add(&mut self, item: Item) -> Result<(), Item> {
        if self.items.len() >= self.capacity {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the first item with the given id.
    ///
    /// Returns `None` if no such item is held.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Returns a reference to the item with the given id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if any held item has the given name.
    pub fn has_item_named(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// The items in acquisition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Items flagged usable in combat, in acquisition order.
    pub fn combat_usable_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|item| item.combat_usable)
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when another add would be refused.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Maximum number of items this inventory can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Combined gold value of all held items.
    pub fn total_value(&self) -> i32 {
        self.items.iter().map(|item| item.value).sum()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INVENTORY_CAPACITY)
    }
}

//! # Item Generation
//!
//! Shop stock and event loot. Catalog entries are minted fresh per call so
//! each sold or found item carries its own id.

use crate::{Item, ItemEffect};

/// The merchants' standing stock: a healing draught and two permanent
/// improvements, all usable mid-combat.
pub fn shop_catalog() -> Vec<Item> {
    vec![
        Item::combat_usable("Health Potion", 50, ItemEffect::Heal(30)),
        Item::combat_usable("Strength Potion", 100, ItemEffect::Strength(5)),
        Item::combat_usable("Shield", 150, ItemEffect::Defense(5)),
    ]
}

/// The trinket surfaced by the discovery event.
pub fn ancient_artifact() -> Item {
    Item::new("Ancient Artifact", 200, ItemEffect::None)
}

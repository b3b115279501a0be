//! # Enemy Generation
//!
//! Per-encounter hostiles. Generated enemies are throwaways: fresh stats per
//! fight, never persisted.

use crate::{Enemy, Stats};
use rand::rngs::StdRng;
use rand::Rng;

/// Names the player can pick a fight with.
pub const ENEMY_NAMES: [&str; 3] = ["Bandit", "Wild Animal", "Rival House Soldier"];

/// Rolls a random stat block in the marauder ranges.
pub fn random_enemy_stats(rng: &mut StdRng) -> Stats {
    Stats::new(
        rng.gen_range(8..=15),
        rng.gen_range(5..=15),
        rng.gen_range(5..=15),
        rng.gen_range(3..=8),
    )
}

/// Creates a named marauder with freshly rolled stats.
pub fn random_enemy_named(name: &str, rng: &mut StdRng) -> Enemy {
    Enemy::marauder(name, random_enemy_stats(rng))
}

/// Creates a marauder with a random name and freshly rolled stats.
pub fn random_enemy(rng: &mut StdRng) -> Enemy {
    let name = ENEMY_NAMES[rng.gen_range(0..ENEMY_NAMES.len())];
    random_enemy_named(name, rng)
}

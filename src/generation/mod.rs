//! # Generation Module
//!
//! Content generation for the Westeros world: the location/boss catalog,
//! per-encounter enemies, shop stock, and the quest pools. Everything draws
//! from a caller-supplied seeded RNG, so a given seed reproduces the same
//! world.

pub mod enemies;
pub mod items;
pub mod quests;
pub mod world;

pub use enemies::*;
pub use items::*;
pub use quests::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// Configuration for world generation.
///
/// # Examples
///
/// ```
/// use westeros::WorldConfig;
///
/// let config = WorldConfig::default();
/// assert_eq!(config.board_size, 10);
/// assert!(config.settlement_event_probability <= 1.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Side length of the square board in cells
    pub board_size: i32,
    /// Event probability for named settlements (0.0 to 1.0)
    pub settlement_event_probability: f64,
    /// Event probability for the shared wilderness (0.0 to 1.0)
    pub wilderness_event_probability: f64,
}

impl WorldConfig {
    /// Creates the standard configuration for a given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            board_size: crate::config::DEFAULT_BOARD_SIZE,
            settlement_event_probability: 0.3,
            wilderness_event_probability: 0.3,
        }
    }

    /// Creates a configuration for tests: a small quiet board so movement
    /// never trips a random event.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            board_size: 10,
            settlement_event_probability: 0.0,
            wilderness_event_probability: 0.0,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

//! # Westeros RPG
//!
//! A turn-based role-playing game set in Westeros: a player character roams a
//! grid of famous locations, trades with NPCs, takes on quests, and fights
//! random marauders and unique bosses in a turn-based combat loop.
//!
//! ## Architecture Overview
//!
//! The crate is split into a simulation core and thin content generation:
//!
//! - **Game State**: `GameSession` coordinates the board, the player, quests,
//!   and any combat in progress
//! - **World Model**: a fixed-size grid of location ids over a location arena,
//!   with probabilistic travel events
//! - **Combat Engine**: a per-encounter state machine that runs to one of
//!   three terminal outcomes
//! - **Quest Model**: data-driven completion conditions and rewards, rechecked
//!   after every mutating action
//! - **Generation**: the Westeros location/boss catalog and random enemies
//!
//! All presentation lives outside the core; the bundled binary is a plain
//! terminal command loop driving the same public interface.

pub mod game;
pub mod generation;

pub use game::*;
pub use generation::*;

// Explicit re-exports for the types a frontend needs most.
pub use game::{
    Board,
    BossAbility,
    CombatAction,
    CombatSession,
    CombatState,
    Direction,
    Enemy,
    EnemyKind,
    EventReport,
    GameSession,
    Inventory,
    Item,
    ItemEffect,
    ItemId,
    Location,
    LocationId,
    MoveOutcome,
    Npc,
    NpcRole,
    Player,
    Position,
    Quest,
    QuestCondition,
    QuestId,
    QuestLog,
    QuestReward,
    Role,
    StatKind,
    Stats,
};

pub use generation::{random_enemy, westeros_board, WorldConfig};

/// Core error type for the Westeros game engine.
///
/// Every variant is recoverable: the simulation stays valid and playable
/// after any of these is reported. Player death is a normal terminal combat
/// outcome, not an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WesterosError {
    /// Coordinate outside the board
    #[error("coordinate ({x}, {y}) is outside the board")]
    InvalidCoordinate { x: i32, y: i32 },

    /// Spend exceeds the current gold balance
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: i32, available: i32 },

    /// Inventory is at capacity
    #[error("inventory is full")]
    InventoryFull,

    /// Item is not in the inventory
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// No enemy available to fight here
    #[error("no enemy present: {0}")]
    NoEnemyPresent(String),

    /// Combat action cannot be taken right now
    #[error("invalid combat action: {0}")]
    InvalidCombatAction(String),
}

/// Result type used throughout the Westeros codebase.
pub type WesterosResult<T> = Result<T, WesterosError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default board side length in cells
    pub const DEFAULT_BOARD_SIZE: i32 = 10;

    /// Default inventory capacity
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

    /// Maximum health for player characters and generated enemies
    pub const MAX_HEALTH: i32 = 100;

    /// Maximum health for bosses
    pub const BOSS_MAX_HEALTH: i32 = 150;

    /// Starting gold for a new player character
    pub const STARTING_GOLD: i32 = 100;

    /// Maximum number of simultaneously active (non-completed) quests
    pub const MAX_ACTIVE_QUESTS: usize = 3;

    /// Extra gold credited after defeating a boss
    pub const BOSS_GOLD_BONUS: i32 = 200;

    /// Smallest victory purse
    pub const VICTORY_GOLD_MIN: i32 = 10;

    /// Largest victory purse
    pub const VICTORY_GOLD_MAX: i32 = 50;
}

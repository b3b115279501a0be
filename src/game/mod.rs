//! # Game Module
//!
//! Core simulation for the Westeros RPG:
//! - Board and location model with probabilistic travel events
//! - Character, stat, and inventory bookkeeping
//! - Turn-based combat state machine
//! - Quest conditions, rewards, and completion polling
//! - The `GameSession` facade a frontend drives

pub mod board;
pub mod character;
pub mod combat;
pub mod inventory;
pub mod quest;
pub mod session;

pub use board::*;
pub use character::*;
pub use combat::*;
pub use inventory::*;
pub use quest::*;
pub use session::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a 2D coordinate on the game board.
///
/// # Examples
///
/// ```
/// use westeros::{Direction, Position};
///
/// let pos = Position::new(3, 4);
/// assert_eq!(pos.x, 3);
/// assert_eq!(pos.translated(Direction::North), Position::new(3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns this position shifted one cell in the given direction.
    ///
    /// No bounds are applied; clamping at board edges is the caller's
    /// responsibility.
    pub fn translated(self, direction: Direction) -> Self {
        let delta = direction.to_delta();
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Directions of travel on the board. Movement is cardinal only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// North decreases `y`, matching the board's top-left origin.
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, -1),
            Direction::South => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
        }
    }

    /// Returns all four travel directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

/// Unique identifier for items.
pub type ItemId = Uuid;

/// Unique identifier for quests.
pub type QuestId = Uuid;

/// Creates a new unique item ID.
pub fn new_item_id() -> ItemId {
    Uuid::new_v4()
}

/// Creates a new unique quest ID.
pub fn new_quest_id() -> QuestId {
    Uuid::new_v4()
}

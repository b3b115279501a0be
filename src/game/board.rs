//! # Board Module
//!
//! The board is a fixed-size square grid of location ids over a location
//! arena. Named locations each occupy exactly one cell; every other cell
//! references the single shared wilderness entry, so the wilderness is one
//! arena slot aliased by many cells, never duplicated.

use crate::{Enemy, Npc, Position};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index into the board's location arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub usize);

/// A place on the map: display metadata, the locals, and an optional
/// resident boss.
///
/// Locations are created once at world-generation time and are immutable
/// afterwards, except for the one-time boss assignment and the boss's
/// removal on defeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Display color as a hex string, e.g. `#4a6741`
    pub color: String,
    /// Probability in `0.0..=1.0` that travel here triggers an event
    pub event_probability: f64,
    pub npcs: Vec<Npc>,
    pub boss: Option<Enemy>,
}

impl Location {
    /// Creates a location with no NPCs and no boss.
    pub fn new(name: impl Into<String>, color: impl Into<String>, event_probability: f64) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            event_probability,
            npcs: Vec::new(),
            boss: None,
        }
    }

    /// Creates a location with an NPC roster.
    pub fn with_npcs(
        name: impl Into<String>,
        color: impl Into<String>,
        event_probability: f64,
        npcs: Vec<Npc>,
    ) -> Self {
        Self {
            npcs,
            ..Self::new(name, color, event_probability)
        }
    }

    /// One uniform draw against this location's event probability.
    pub fn trigger_event(&self, rng: &mut StdRng) -> bool {
        rng.gen_bool(self.event_probability)
    }
}

/// A square grid of location ids with a location arena.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use westeros::{Board, Location};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let named = vec![Location::new("Winterfell", "#444444", 0.3)];
/// let board = Board::generate(10, Location::new("Wilderness", "#4a6741", 0.3), named, &mut rng);
/// assert_eq!(board.size(), 10);
/// assert!(board.position_of("Winterfell").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    size: i32,
    locations: Vec<Location>,
    wilderness: LocationId,
    /// Row-major grid of arena indices, `size * size` entries
    grid: Vec<LocationId>,
}

impl Board {
    /// Generates a board, placing each named location at a distinct
    /// uniformly-random unoccupied cell. Every remaining cell references the
    /// shared wilderness entry.
    ///
    /// If named locations outnumber cells, placement stops silently once the
    /// cells run out; that is a documented degenerate configuration.
    pub fn generate(
        size: i32,
        wilderness: Location,
        named: Vec<Location>,
        rng: &mut StdRng,
    ) -> Self {
        let cell_count = (size * size) as usize;
        let mut locations = vec![wilderness];
        let wilderness_id = LocationId(0);
        let mut grid = vec![wilderness_id; cell_count];

        let mut open_cells: Vec<usize> = (0..cell_count).collect();
        for location in named {
            if open_cells.is_empty() {
                debug!("board full, stopped placing at {}", location.name);
                break;
            }
            let picked = rng.gen_range(0..open_cells.len());
            let cell = open_cells.swap_remove(picked);
            let id = LocationId(locations.len());
            debug!(
                "placed {} at ({}, {})",
                location.name,
                cell as i32 % size,
                cell as i32 / size
            );
            locations.push(location);
            grid[cell] = id;
        }

        Self {
            size,
            locations,
            wilderness: wilderness_id,
            grid,
        }
    }

    /// Side length of the board in cells.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// True when the position lies on the board.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.size && position.y >= 0 && position.y < self.size
    }

    /// The arena id occupying a cell, or `None` out of bounds.
    pub fn location_id_at(&self, x: i32, y: i32) -> Option<LocationId> {
        if x < 0 || x >= self.size || y < 0 || y >= self.size {
            return None;
        }
        Some(self.grid[(y * self.size + x) as usize])
    }

    /// The location occupying a cell, or `None` out of bounds.
    pub fn location_at(&self, x: i32, y: i32) -> Option<&Location> {
        self.location_id_at(x, y).map(|id| &self.locations[id.0])
    }

    /// Looks up a location by arena id.
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    /// The shared wilderness id.
    pub fn wilderness_id(&self) -> LocationId {
        self.wilderness
    }

    /// Every arena entry, wilderness first, in placement order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Grid position of a named location, if it was placed.
    pub fn position_of(&self, name: &str) -> Option<Position> {
        let id = self
            .locations
            .iter()
            .position(|location| location.name == name)
            .map(LocationId)?;
        let cell = self.grid.iter().position(|&entry| entry == id)?;
        Some(Position::new(cell as i32 % self.size, cell as i32 / self.size))
    }

    /// Assigns a boss to the named location. Done once at world setup.
    ///
    /// Returns false when no such location exists on the board.
    pub fn assign_boss(&mut self, location_name: &str, boss: Enemy) -> bool {
        match self
            .locations
            .iter_mut()
            .find(|location| location.name == location_name)
        {
            Some(location) => {
                debug!("{} now resides at {}", boss.name, location.name);
                location.boss = Some(boss);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the boss at a position for a combat encounter.
    ///
    /// The survivor is handed back through [`Board::return_boss_at`]; a
    /// defeated boss is simply never returned.
    pub fn take_boss_at(&mut self, position: Position) -> Option<Enemy> {
        let id = self.location_id_at(position.x, position.y)?;
        self.locations[id.0].boss.take()
    }

    /// Returns a surviving boss to its location after combat.
    pub fn return_boss_at(&mut self, position: Position, boss: Enemy) {
        if let Some(id) = self.location_id_at(position.x, position.y) {
            self.locations[id.0].boss = Some(boss);
        }
    }

    /// True when a boss currently resides at the position.
    pub fn has_boss_at(&self, position: Position) -> bool {
        self.location_at(position.x, position.y)
            .map(|location| location.boss.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BossAbility, Stats};
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn named(names: &[&str]) -> Vec<Location> {
        names
            .iter()
            .map(|name| Location::new(*name, "#123456", 0.3))
            .collect()
    }

    fn wilderness() -> Location {
        Location::new("Wilderness", "#4a6741", 0.3)
    }

    #[test]
    fn test_generate_places_each_named_location_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::generate(10, wilderness(), named(&["A", "B", "C", "D"]), &mut rng);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for y in 0..10 {
            for x in 0..10 {
                let location = board.location_at(x, y).unwrap();
                *counts.entry(location.name.as_str()).or_default() += 1;
            }
        }

        for name in ["A", "B", "C", "D"] {
            assert_eq!(counts[name], 1, "{} should occupy exactly one cell", name);
        }
        assert_eq!(counts["Wilderness"], 96);
    }

    #[test]
    fn test_unnamed_cells_alias_one_wilderness_id() {
        let mut rng = StdRng::seed_from_u64(9);
        let board = Board::generate(5, wilderness(), named(&["A"]), &mut rng);

        let wilderness_cells = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| board.location_id_at(x, y).unwrap() == board.wilderness_id())
            .count();
        assert_eq!(wilderness_cells, 24);
    }

    #[test]
    fn test_generate_degenerate_overflow_stops_silently() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::generate(2, wilderness(), named(&["A", "B", "C", "D", "E"]), &mut rng);

        // Four cells, five names: the fifth is dropped, nothing panics.
        let placed = board
            .locations()
            .iter()
            .filter(|location| location.name != "Wilderness")
            .filter(|location| board.position_of(&location.name).is_some())
            .count();
        assert_eq!(placed, 4);
    }

    #[test]
    fn test_location_at_out_of_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::generate(10, wilderness(), named(&["A"]), &mut rng);
        assert!(board.location_at(-1, 0).is_none());
        assert!(board.location_at(0, 10).is_none());
        assert!(board.location_at(9, 9).is_some());
    }

    #[test]
    fn test_boss_assignment_and_take_return() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = Board::generate(10, wilderness(), named(&["Dragonstone"]), &mut rng);
        let drogon = Enemy::boss(
            "Drogon",
            "Targaryen",
            Stats::new(25, 10, 5, 20),
            BossAbility::Dragonfire,
        );

        assert!(board.assign_boss("Dragonstone", drogon));
        assert!(!board.assign_boss("Nowhere", Enemy::marauder("x", Stats::new(1, 1, 1, 1))));

        let lair = board.position_of("Dragonstone").unwrap();
        assert!(board.has_boss_at(lair));

        let mut taken = board.take_boss_at(lair).unwrap();
        assert!(!board.has_boss_at(lair));

        taken.take_damage(40);
        board.return_boss_at(lair, taken);
        assert!(board.has_boss_at(lair));
        let resident = board
            .location_at(lair.x, lair.y)
            .unwrap()
            .boss
            .as_ref()
            .unwrap();
        assert_eq!(resident.health, 110);
    }

    #[test]
    fn test_trigger_event_extremes() {
        let mut rng = StdRng::seed_from_u64(5);
        let never = Location::new("Quiet", "#000000", 0.0);
        let always = Location::new("Wild", "#000000", 1.0);
        for _ in 0..50 {
            assert!(!never.trigger_event(&mut rng));
            assert!(always.trigger_event(&mut rng));
        }
    }
}

//! # Character Module
//!
//! Stat and resource bookkeeping for everything that can fight or be fought:
//! the player character with its role variants, generated enemies, and the
//! unique bosses with their signature abilities.
//!
//! Health floors at zero on damage; a character is alive iff health is
//! positive. Gold spending fails without mutation when the balance is short.

use crate::{config, Direction, Inventory, Position};
use serde::{Deserialize, Serialize};

/// The four combat-relevant attributes shared by all characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub defense: i32,
}

impl Stats {
    /// Creates a stat block, flooring strength at 1 and defense at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use westeros::Stats;
    ///
    /// let stats = Stats::new(0, 5, 5, -3);
    /// assert_eq!(stats.strength, 1);
    /// assert_eq!(stats.defense, 0);
    /// ```
    pub fn new(strength: i32, intelligence: i32, charisma: i32, defense: i32) -> Self {
        Self {
            strength: strength.max(1),
            intelligence,
            charisma,
            defense: defense.max(0),
        }
    }

    /// Reads the attribute selected by a [`StatKind`] tag.
    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Strength => self.strength,
            StatKind::Intelligence => self.intelligence,
            StatKind::Charisma => self.charisma,
            StatKind::Defense => self.defense,
        }
    }

    /// Adds to the attribute selected by a [`StatKind`] tag.
    pub fn boost(&mut self, kind: StatKind, amount: i32) {
        match kind {
            StatKind::Strength => self.strength += amount,
            StatKind::Intelligence => self.intelligence += amount,
            StatKind::Charisma => self.charisma += amount,
            StatKind::Defense => self.defense += amount,
        }
    }
}

/// Tag selecting one attribute, used by data-driven quest conditions and
/// rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Strength,
    Intelligence,
    Charisma,
    Defense,
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatKind::Strength => "strength",
            StatKind::Intelligence => "intelligence",
            StatKind::Charisma => "charisma",
            StatKind::Defense => "defense",
        };
        write!(f, "{}", name)
    }
}

/// Player role variants. Roles differ in their starting stat tuple and a
/// named signature move; the move is flavor and is not a combat turn option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Warrior,
    Diplomat,
    Maester,
}

impl Role {
    /// Starting stats for this role.
    pub fn starting_stats(self) -> Stats {
        match self {
            Role::Warrior => Stats::new(12, 8, 8, 10),
            Role::Diplomat => Stats::new(8, 10, 12, 8),
            Role::Maester => Stats::new(7, 13, 9, 9),
        }
    }

    /// The role's signature move: a name and a magnitude.
    pub fn signature_move(self) -> (&'static str, i32) {
        match self {
            Role::Warrior => ("Sword Strike", 10),
            Role::Diplomat => ("Persuasive Speech", 5),
            Role::Maester => ("Healing Touch", 20),
        }
    }

    /// All selectable roles.
    pub fn all() -> [Role; 3] {
        [Role::Warrior, Role::Diplomat, Role::Maester]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Warrior => "Warrior",
            Role::Diplomat => "Diplomat",
            Role::Maester => "Maester",
        };
        write!(f, "{}", name)
    }
}

/// The player character.
///
/// Created once at game start from the creation choices; position, gold,
/// and inventory belong to the player alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub house: String,
    pub role: Role,
    pub stats: Stats,
    pub health: i32,
    pub gold: i32,
    pub position: Position,
    pub inventory: Inventory,
    /// One-round combat stance; consumed by the next enemy strike
    pub defending: bool,
}

impl Player {
    /// Creates a player character with the role's starting stats.
    ///
    /// # Examples
    ///
    /// ```
    /// use westeros::{Player, Role};
    ///
    /// let player = Player::new("Eddard", "Stark", Role::Warrior);
    /// assert_eq!(player.stats.strength, 12);
    /// assert_eq!(player.health, 100);
    /// assert_eq!(player.gold, 100);
    /// assert!(player.is_alive());
    /// ```
    pub fn new(name: impl Into<String>, house: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            house: house.into(),
            role,
            stats: role.starting_stats(),
            health: config::MAX_HEALTH,
            gold: config::STARTING_GOLD,
            position: Position::origin(),
            inventory: Inventory::default(),
            defending: false,
        }
    }

    /// Applies damage, flooring health at zero.
    ///
    /// The amount is not floored: a negative amount heals. That is a caller
    /// contract, not an expected path.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restores health, capped at the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(config::MAX_HEALTH);
    }

    /// Moves one cell in the given direction without bounds checking.
    ///
    /// The session's move command clamps at board edges; this raw step does
    /// not.
    pub fn step(&mut self, direction: Direction) {
        self.position = self.position.translated(direction);
    }

    /// Credits gold unconditionally.
    pub fn earn_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    /// Debits gold. Fails without mutation when the balance is short.
    pub fn spend_gold(&mut self, amount: i32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    /// A character is alive iff health is positive.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// What kind of hostile this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// A throwaway enemy generated fresh per encounter
    Marauder,
    /// A unique boss with a signature ability; created once at world setup
    /// and never respawned
    Boss(BossAbility),
}

/// A hostile combatant: either a generated marauder or a unique boss.
///
/// Bosses persist between encounters, so their health carries over until
/// they are defeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub house: Option<String>,
    pub stats: Stats,
    pub health: i32,
    pub max_health: i32,
    pub kind: EnemyKind,
}

impl Enemy {
    /// Creates a generated enemy at full (normal) health.
    pub fn marauder(name: impl Into<String>, stats: Stats) -> Self {
        Self {
            name: name.into(),
            house: None,
            stats,
            health: config::MAX_HEALTH,
            max_health: config::MAX_HEALTH,
            kind: EnemyKind::Marauder,
        }
    }

    /// Creates a boss at full boss health.
    pub fn boss(
        name: impl Into<String>,
        house: impl Into<String>,
        stats: Stats,
        ability: BossAbility,
    ) -> Self {
        Self {
            name: name.into(),
            house: Some(house.into()),
            stats,
            health: config::BOSS_MAX_HEALTH,
            max_health: config::BOSS_MAX_HEALTH,
            kind: EnemyKind::Boss(ability),
        }
    }

    /// Applies damage, flooring health at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restores health, capped at this enemy's maximum.
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    /// A character is alive iff health is positive.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// The signature ability, when this enemy is a boss.
    pub fn boss_ability(&self) -> Option<BossAbility> {
        match self.kind {
            EnemyKind::Boss(ability) => Some(ability),
            EnemyKind::Marauder => None,
        }
    }
}

/// Signature boss abilities, one per boss. Each is a pure effect over
/// (boss, player) plus a narration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossAbility {
    /// Cersei: deals intelligence x2 damage to the player
    WildfirePlot,
    /// Night King: heals the boss for 20, deals no damage
    RaiseDead,
    /// Drogon: deals strength x3 damage to the player
    Dragonfire,
}

impl BossAbility {
    /// Applies the ability and returns its narration.
    pub fn apply(self, boss: &mut Enemy, player: &mut Player) -> String {
        match self {
            BossAbility::WildfirePlot => {
                let damage = boss.stats.intelligence * 2;
                player.take_damage(damage);
                format!("{} uses 'Wildfire Plot' and deals {} damage!", boss.name, damage)
            }
            BossAbility::RaiseDead => {
                boss.heal(20);
                format!("{} uses 'Raise the Dead' and heals for 20 health!", boss.name)
            }
            BossAbility::Dragonfire => {
                let damage = boss.stats.strength * 3;
                player.take_damage(damage);
                format!("{} uses 'Dragonfire' and deals {} damage!", boss.name, damage)
            }
        }
    }
}

/// Roles an NPC can fill at a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcRole {
    Merchant,
    Innkeeper,
    Guard,
}

impl std::fmt::Display for NpcRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NpcRole::Merchant => "Merchant",
            NpcRole::Innkeeper => "Innkeeper",
            NpcRole::Guard => "Guard",
        };
        write!(f, "{}", name)
    }
}

/// A stat-less, non-combat character attached to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub role: NpcRole,
}

impl Npc {
    pub fn new(name: impl Into<String>, role: NpcRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_creation_floors() {
        let stats = Stats::new(-5, 10, 10, -2);
        assert_eq!(stats.strength, 1);
        assert_eq!(stats.defense, 0);
    }

    #[test]
    fn test_role_starting_stats() {
        let warrior = Role::Warrior.starting_stats();
        assert_eq!(
            (warrior.strength, warrior.intelligence, warrior.charisma, warrior.defense),
            (12, 8, 8, 10)
        );
        let maester = Role::Maester.starting_stats();
        assert_eq!(maester.intelligence, 13);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut player = Player::new("Jon", "Stark", Role::Warrior);
        player.take_damage(250);
        assert_eq!(player.health, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = Player::new("Sam", "Tarly", Role::Maester);
        player.take_damage(30);
        player.heal(100);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_spend_gold_fails_without_mutation() {
        let mut player = Player::new("Petyr", "Baelish", Role::Diplomat);
        assert!(!player.spend_gold(150));
        assert_eq!(player.gold, 100);
        assert!(player.spend_gold(60));
        assert_eq!(player.gold, 40);
    }

    #[test]
    fn test_step_is_unclamped() {
        let mut player = Player::new("Arya", "Stark", Role::Warrior);
        player.step(Direction::West);
        assert_eq!(player.position, Position::new(-1, 0));
    }

    #[test]
    fn test_boss_health_range() {
        let boss = Enemy::boss(
            "Night King",
            "White Walkers",
            Stats::new(20, 15, 10, 15),
            BossAbility::RaiseDead,
        );
        assert_eq!(boss.health, 150);
        assert!(boss.boss_ability().is_some());

        let marauder = Enemy::marauder("Bandit", Stats::new(10, 5, 5, 5));
        assert_eq!(marauder.health, 100);
        assert!(marauder.boss_ability().is_none());
    }

    #[test]
    fn test_wildfire_plot_damage() {
        let mut cersei = Enemy::boss(
            "Cersei Lannister",
            "Lannister",
            Stats::new(10, 15, 18, 8),
            BossAbility::WildfirePlot,
        );
        let mut player = Player::new("Brienne", "Tarth", Role::Warrior);

        let message = BossAbility::WildfirePlot.apply(&mut cersei, &mut player);
        assert_eq!(player.health, 70);
        assert!(message.contains("30 damage"));
    }

    #[test]
    fn test_raise_dead_heals_boss_only() {
        let mut night_king = Enemy::boss(
            "Night King",
            "White Walkers",
            Stats::new(20, 15, 10, 15),
            BossAbility::RaiseDead,
        );
        night_king.take_damage(60);
        let mut player = Player::new("Jon", "Stark", Role::Warrior);

        BossAbility::RaiseDead.apply(&mut night_king, &mut player);
        assert_eq!(night_king.health, 110);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_raise_dead_caps_at_boss_max() {
        let mut night_king = Enemy::boss(
            "Night King",
            "White Walkers",
            Stats::new(20, 15, 10, 15),
            BossAbility::RaiseDead,
        );
        night_king.take_damage(5);
        let mut player = Player::new("Jon", "Stark", Role::Warrior);

        BossAbility::RaiseDead.apply(&mut night_king, &mut player);
        assert_eq!(night_king.health, 150);
    }

    #[test]
    fn test_dragonfire_damage() {
        let mut drogon = Enemy::boss(
            "Drogon",
            "Targaryen",
            Stats::new(25, 10, 5, 20),
            BossAbility::Dragonfire,
        );
        let mut player = Player::new("Jaime", "Lannister", Role::Warrior);

        BossAbility::Dragonfire.apply(&mut drogon, &mut player);
        assert_eq!(player.health, 25);
    }
}

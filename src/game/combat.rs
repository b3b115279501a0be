//! # Combat Module
//!
//! The turn-based combat state machine. A `CombatSession` owns the enemy and
//! runs from `Active` to exactly one of three terminal outcomes; the player
//! is borrowed per action so the rest of the game state stays untouched
//! while a fight is in progress.
//!
//! Damage is `max(1, attacker strength - defender defense)`; a defending
//! player halves the enemy's strength contribution for exactly one strike.

use crate::{config, Enemy, ItemId, Player, WesterosError, WesterosResult};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Combat resolution states. `Active` is initial; the rest are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatState {
    Active,
    PlayerWon,
    PlayerLost,
    PlayerFled,
}

impl CombatState {
    /// True for the three terminal outcomes.
    pub fn is_terminal(self) -> bool {
        !matches!(self, CombatState::Active)
    }
}

/// The player's per-round action choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Attack,
    Defend,
    UseItem(ItemId),
    Flee,
}

/// One combat encounter between the player and a single enemy.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use westeros::{CombatAction, CombatSession, CombatState, Enemy, Player, Role, Stats};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut player = Player::new("Brienne", "Tarth", Role::Warrior);
/// let enemy = Enemy::marauder("Bandit", Stats::new(10, 5, 5, 5));
/// let mut combat = CombatSession::new(&mut player, enemy);
///
/// let state = combat.submit_action(&mut player, CombatAction::Attack, &mut rng).unwrap();
/// assert!(state == CombatState::Active || state.is_terminal());
/// assert!(!combat.log().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatSession {
    enemy: Enemy,
    state: CombatState,
    log: Vec<String>,
}

impl CombatSession {
    /// Opens an encounter. The player's defensive stance is cleared so every
    /// session starts from a neutral footing.
    pub fn new(player: &mut Player, enemy: Enemy) -> Self {
        player.defending = false;
        debug!("combat: {} vs {}", player.name, enemy.name);
        let opener = format!("{} vs {}", player.name, enemy.name);
        Self {
            enemy,
            state: CombatState::Active,
            log: vec![opener],
        }
    }

    /// Current state of the encounter.
    pub fn state(&self) -> CombatState {
        self.state
    }

    /// The enemy being fought.
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Ordered narration of the fight so far.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Consumes the session, yielding the enemy in its post-combat state.
    pub fn into_enemy(self) -> Enemy {
        self.enemy
    }

    /// Resolves one round from the player's chosen action.
    ///
    /// A successful flee ends the encounter before the enemy can act; every
    /// other choice (including a failed flee and a no-op item use) leaves the
    /// enemy its turn. Terminal conditions are checked player-defeat first.
    pub fn submit_action(
        &mut self,
        player: &mut Player,
        action: CombatAction,
        rng: &mut StdRng,
    ) -> WesterosResult<CombatState> {
        self.ensure_active()?;

        match action {
            CombatAction::Attack => self.player_attack(player),
            CombatAction::Defend => self.player_defend(player),
            CombatAction::UseItem(id) => self.player_use_item(player, id),
            CombatAction::Flee => {
                if self.attempt_flee(player, rng) {
                    return Ok(self.state);
                }
            }
        }

        if self.state == CombatState::Active && self.enemy.is_alive() {
            self.enemy_turn(player);
        }
        self.check_combat_end(player, rng);
        Ok(self.state)
    }

    /// Triggers the boss's signature ability against the player.
    ///
    /// This is an extra, out-of-turn action: it does not consume the
    /// player's Attack/Defend/Use-Item/Flee choice. The enemy still takes a
    /// regular swing afterwards while the fight remains active.
    pub fn use_boss_ability(
        &mut self,
        player: &mut Player,
        rng: &mut StdRng,
    ) -> WesterosResult<CombatState> {
        self.ensure_active()?;
        let ability = self.enemy.boss_ability().ok_or_else(|| {
            WesterosError::InvalidCombatAction(format!("{} has no special ability", self.enemy.name))
        })?;

        let narration = ability.apply(&mut self.enemy, player);
        self.log.push(narration);
        self.check_combat_end(player, rng);

        if self.state == CombatState::Active {
            self.enemy_turn(player);
            self.check_combat_end(player, rng);
        }
        Ok(self.state)
    }

    fn ensure_active(&self) -> WesterosResult<()> {
        if self.state.is_terminal() {
            return Err(WesterosError::InvalidCombatAction(
                "combat is already over".to_string(),
            ));
        }
        Ok(())
    }

    fn player_attack(&mut self, player: &Player) {
        let damage = (player.stats.strength - self.enemy.stats.defense).max(1);
        self.enemy.take_damage(damage);
        self.log
            .push(format!("{} attacks for {} damage!", player.name, damage));
    }

    fn player_defend(&mut self, player: &mut Player) {
        player.defending = true;
        self.log
            .push(format!("{} takes a defensive stance.", player.name));
    }

    fn player_use_item(&mut self, player: &mut Player, id: ItemId) {
        let selected = player
            .inventory
            .get(id)
            .map(|item| (item.combat_usable, item.name.clone()));
        match selected {
            Some((true, _)) => {
                if let Some(item) = player.inventory.remove(id) {
                    item.apply(player);
                    self.log.push(format!("{} uses {}.", player.name, item.name));
                }
            }
            Some((false, name)) => {
                // Selection stays in the inventory; the round still proceeds.
                self.log.push(format!("{} cannot be used in combat!", name));
            }
            None => {
                self.log.push("No usable items in inventory!".to_string());
            }
        }
    }

    /// Returns true when the flee succeeded and the encounter is over.
    fn attempt_flee(&mut self, player: &Player, rng: &mut StdRng) -> bool {
        if rng.gen_bool(0.5) {
            self.state = CombatState::PlayerFled;
            self.log
                .push(format!("{} successfully fled from combat!", player.name));
            true
        } else {
            self.log.push(format!("{} failed to flee!", player.name));
            false
        }
    }

    fn enemy_turn(&mut self, player: &mut Player) {
        let damage = if player.defending {
            player.defending = false;
            (self.enemy.stats.strength / 2 - player.stats.defense).max(1)
        } else {
            (self.enemy.stats.strength - player.stats.defense).max(1)
        };
        player.take_damage(damage);
        self.log
            .push(format!("{} attacks for {} damage!", self.enemy.name, damage));
    }

    /// Terminal check, player defeat first. Crediting the victory purse is
    /// part of the `PlayerWon` transition; the boss bonus is the session
    /// owner's concern.
    fn check_combat_end(&mut self, player: &mut Player, rng: &mut StdRng) {
        if self.state.is_terminal() {
            return;
        }
        if !player.is_alive() {
            self.state = CombatState::PlayerLost;
            self.log.push(format!("{} has been defeated!", player.name));
        } else if !self.enemy.is_alive() {
            self.state = CombatState::PlayerWon;
            self.log
                .push(format!("{} has been defeated!", self.enemy.name));
            let reward = rng.gen_range(config::VICTORY_GOLD_MIN..=config::VICTORY_GOLD_MAX);
            player.earn_gold(reward);
            self.log
                .push(format!("{} wins! Earned {} gold.", player.name, reward));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BossAbility, Item, ItemEffect, Role, Stats};
    use rand::SeedableRng;

    fn warrior() -> Player {
        // strength 12, defense 10
        Player::new("Brienne", "Tarth", Role::Warrior)
    }

    fn bandit() -> Enemy {
        Enemy::marauder("Bandit", Stats::new(10, 5, 5, 5))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(123)
    }

    #[test]
    fn test_attack_damage_formula() {
        let mut rng = rng();
        let mut player = warrior();
        let mut combat = CombatSession::new(&mut player, bandit());

        combat
            .submit_action(&mut player, CombatAction::Attack, &mut rng)
            .unwrap();

        // max(1, 12 - 5) = 7 dealt; counter max(1, 10 - 10) = 1 taken.
        assert_eq!(combat.enemy().health, 93);
        assert_eq!(player.health, 99);
    }

    #[test]
    fn test_attack_damage_floor_is_one() {
        let mut rng = rng();
        let mut player = warrior();
        let ironclad = Enemy::marauder("Ironclad", Stats::new(10, 5, 5, 50));
        let mut combat = CombatSession::new(&mut player, ironclad);

        combat
            .submit_action(&mut player, CombatAction::Attack, &mut rng)
            .unwrap();
        assert_eq!(combat.enemy().health, 99);
    }

    #[test]
    fn test_defend_halves_exactly_one_strike() {
        let mut rng = rng();
        let mut player = warrior();
        let brute = Enemy::marauder("Brute", Stats::new(24, 5, 5, 5));
        let mut combat = CombatSession::new(&mut player, brute);

        combat
            .submit_action(&mut player, CombatAction::Defend, &mut rng)
            .unwrap();
        // Halved: max(1, 24/2 - 10) = 2, and the flag is consumed.
        assert_eq!(player.health, 98);
        assert!(!player.defending);

        combat
            .submit_action(&mut player, CombatAction::Attack, &mut rng)
            .unwrap();
        // Back to full: max(1, 24 - 10) = 14.
        assert_eq!(player.health, 84);
    }

    #[test]
    fn test_use_item_heals_and_is_removed() {
        let mut rng = rng();
        let mut player = warrior();
        player.take_damage(40);
        let potion = Item::combat_usable("Health Potion", 50, ItemEffect::Heal(30));
        let potion_id = potion.id;
        player.inventory.add(potion).unwrap();

        let brute = Enemy::marauder("Brute", Stats::new(12, 5, 5, 5));
        let mut combat = CombatSession::new(&mut player, brute);
        combat
            .submit_action(&mut player, CombatAction::UseItem(potion_id), &mut rng)
            .unwrap();

        // 60 + 30 healed, then the enemy swings for max(1, 12 - 10) = 2.
        assert_eq!(player.health, 88);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_use_missing_item_is_noop_but_enemy_acts() {
        let mut rng = rng();
        let mut player = warrior();
        let mut combat = CombatSession::new(&mut player, bandit());

        combat
            .submit_action(&mut player, CombatAction::UseItem(crate::new_item_id()), &mut rng)
            .unwrap();

        assert_eq!(player.health, 99);
        assert!(combat
            .log()
            .iter()
            .any(|line| line.contains("No usable items")));
    }

    #[test]
    fn test_non_combat_item_stays_in_inventory() {
        let mut rng = rng();
        let mut player = warrior();
        let relic = Item::new("Ancient Artifact", 200, ItemEffect::None);
        let relic_id = relic.id;
        player.inventory.add(relic).unwrap();

        let mut combat = CombatSession::new(&mut player, bandit());
        combat
            .submit_action(&mut player, CombatAction::UseItem(relic_id), &mut rng)
            .unwrap();

        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_flee_success_skips_enemy_turn() {
        // Find a seed whose first draw succeeds, then assert no damage taken.
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = warrior();
            let mut combat = CombatSession::new(&mut player, bandit());
            let state = combat
                .submit_action(&mut player, CombatAction::Flee, &mut rng)
                .unwrap();
            if state == CombatState::PlayerFled {
                assert_eq!(player.health, 100);
                return;
            }
        }
        panic!("no fleeing seed found in 64 attempts");
    }

    #[test]
    fn test_flee_failure_consumes_round() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = warrior();
            let mut combat = CombatSession::new(&mut player, bandit());
            let state = combat
                .submit_action(&mut player, CombatAction::Flee, &mut rng)
                .unwrap();
            if state == CombatState::Active {
                assert_eq!(player.health, 99);
                return;
            }
        }
        panic!("no failing-flee seed found in 64 attempts");
    }

    #[test]
    fn test_victory_awards_gold_in_range() {
        let mut rng = rng();
        let mut player = warrior();
        let weakling = Enemy::marauder("Weakling", Stats::new(1, 1, 1, 0));
        let mut combat = CombatSession::new(&mut player, weakling);

        let mut state = CombatState::Active;
        while state == CombatState::Active {
            state = combat
                .submit_action(&mut player, CombatAction::Attack, &mut rng)
                .unwrap();
        }
        assert_eq!(state, CombatState::PlayerWon);
        let purse = player.gold - 100;
        assert!((10..=50).contains(&purse), "reward {} out of range", purse);
    }

    #[test]
    fn test_defeat_takes_priority_and_pays_nothing() {
        let mut rng = rng();
        let mut player = warrior();
        player.health = 1;
        let titan = Enemy::marauder("Titan", Stats::new(60, 5, 5, 50));
        let mut combat = CombatSession::new(&mut player, titan);

        let state = combat
            .submit_action(&mut player, CombatAction::Attack, &mut rng)
            .unwrap();
        assert_eq!(state, CombatState::PlayerLost);
        assert_eq!(player.gold, 100);
    }

    #[test]
    fn test_terminal_state_rejects_further_actions() {
        let mut rng = rng();
        let mut player = warrior();
        player.health = 1;
        let titan = Enemy::marauder("Titan", Stats::new(60, 5, 5, 50));
        let mut combat = CombatSession::new(&mut player, titan);
        combat
            .submit_action(&mut player, CombatAction::Attack, &mut rng)
            .unwrap();

        let refused = combat.submit_action(&mut player, CombatAction::Attack, &mut rng);
        assert!(matches!(
            refused,
            Err(WesterosError::InvalidCombatAction(_))
        ));
    }

    #[test]
    fn test_boss_ability_retaliation_follows() {
        let mut rng = rng();
        let mut player = warrior();
        let cersei = Enemy::boss(
            "Cersei Lannister",
            "Lannister",
            Stats::new(10, 15, 18, 8),
            BossAbility::WildfirePlot,
        );
        let mut combat = CombatSession::new(&mut player, cersei);

        combat.use_boss_ability(&mut player, &mut rng).unwrap();
        // Wildfire Plot for 30, then the regular swing for max(1, 10 - 10) = 1.
        assert_eq!(player.health, 69);
    }

    #[test]
    fn test_boss_ability_rejected_for_marauders() {
        let mut rng = rng();
        let mut player = warrior();
        let mut combat = CombatSession::new(&mut player, bandit());

        let refused = combat.use_boss_ability(&mut player, &mut rng);
        assert!(matches!(
            refused,
            Err(WesterosError::InvalidCombatAction(_))
        ));
    }

    #[test]
    fn test_combat_reaches_terminal_state() {
        let mut rng = rng();
        let mut player = warrior();
        let brute = Enemy::marauder("Brute", Stats::new(15, 5, 5, 8));
        let mut combat = CombatSession::new(&mut player, brute);

        let mut rounds = 0;
        while combat.state() == CombatState::Active {
            combat
                .submit_action(&mut player, CombatAction::Attack, &mut rng)
                .unwrap();
            rounds += 1;
            assert!(rounds < 200, "combat failed to terminate");
        }
        assert!(combat.state().is_terminal());
    }
}

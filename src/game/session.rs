//! # Session Module
//!
//! `GameSession` is the coordination point a frontend drives: it owns the
//! player, the board, the quest log, the RNG, and whatever combat is in
//! progress. All mutation funnels through here, and every mutating
//! operation ends with a quest-completion recheck, so quest progress never
//! depends on a frontend timer.

use crate::{
    ancient_artifact, config, random_enemy_named, random_guard_quest, random_rumor,
    shop_catalog, starting_quests, westeros_board, Board, CombatAction, CombatSession,
    CombatState, Direction, Item, ItemId, Location, Npc, NpcRole, Player, Position, Quest,
    QuestLog, WesterosError, WesterosResult, WorldConfig,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a travel command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved one cell
    Moved,
    /// The board edge blocked the move; nothing changed
    Blocked,
}

/// What a fired travel event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventReport {
    /// Found a bag of gold
    GoldFound(i32),
    /// Ambushed; a combat session is now open
    Ambushed { enemy_name: String },
    /// Discovered a trinket (lost if the inventory is full)
    ArtifactFound { item_name: String },
    /// A kind stranger's food and rest restored some health
    Rested { recovered: i32 },
}

/// One single-player game: world, character, quests, and combat.
///
/// # Examples
///
/// ```
/// use westeros::{Direction, GameSession, Player, Role, WorldConfig};
///
/// let player = Player::new("Eddard", "Stark", Role::Warrior);
/// let mut session = GameSession::new(player, &WorldConfig::for_testing(1));
///
/// session.move_player(Direction::East).unwrap();
/// assert_eq!(session.player.position.x, 1);
/// ```
pub struct GameSession {
    pub player: Player,
    pub board: Board,
    pub quests: QuestLog,
    rng: StdRng,
    combat: Option<CombatSession>,
    /// Lair to hand a surviving boss back to after combat
    boss_origin: Option<Position>,
    messages: Vec<String>,
}

impl GameSession {
    /// Starts a new game: generates the board, seats the bosses, and hands
    /// the player the starting quest set.
    pub fn new(player: Player, config: &WorldConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let board = westeros_board(config, &mut rng);
        info!(
            "session started: {} of House {} on a {}x{} board",
            player.name,
            player.house,
            board.size(),
            board.size()
        );
        Self {
            player,
            board,
            quests: QuestLog::with_quests(starting_quests()),
            rng,
            combat: None,
            boss_origin: None,
            messages: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Movement and the world
    // ------------------------------------------------------------------

    /// Moves the player one cell, clamping at board edges.
    pub fn move_player(&mut self, direction: Direction) -> WesterosResult<MoveOutcome> {
        self.ensure_no_combat()?;
        let target = self.player.position.translated(direction);
        if !self.board.contains(target) {
            return Ok(MoveOutcome::Blocked);
        }
        self.player.position = target;
        debug!("{} moved {} to {}", self.player.name, direction, target);
        self.recheck_quests();
        Ok(MoveOutcome::Moved)
    }

    /// The location under the player.
    pub fn current_location(&self) -> WesterosResult<&Location> {
        self.location_at(self.player.position.x, self.player.position.y)
    }

    /// The location at a coordinate.
    pub fn location_at(&self, x: i32, y: i32) -> WesterosResult<&Location> {
        self.board
            .location_at(x, y)
            .ok_or(WesterosError::InvalidCoordinate { x, y })
    }

    /// First NPC with the given role at the player's location, if any.
    pub fn npc_with_role(&self, role: NpcRole) -> Option<&Npc> {
        self.current_location()
            .ok()?
            .npcs
            .iter()
            .find(|npc| npc.role == role)
    }

    /// Rolls the current location's event probability and, on a hit, applies
    /// one of the four travel events chosen uniformly at random.
    ///
    /// An ambush opens a combat session; resolve it through
    /// [`GameSession::combat_action`].
    pub fn check_for_event(&mut self) -> WesterosResult<Option<EventReport>> {
        self.ensure_no_combat()?;
        let location = self
            .board
            .location_at(self.player.position.x, self.player.position.y)
            .ok_or(WesterosError::InvalidCoordinate {
                x: self.player.position.x,
                y: self.player.position.y,
            })?;
        if !location.trigger_event(&mut self.rng) {
            return Ok(None);
        }

        let report = match self.rng.gen_range(0..4) {
            0 => {
                self.player.earn_gold(50);
                EventReport::GoldFound(50)
            }
            1 => {
                let enemy = random_enemy_named("Bandit", &mut self.rng);
                let name = enemy.name.clone();
                self.combat = Some(CombatSession::new(&mut self.player, enemy));
                EventReport::Ambushed { enemy_name: name }
            }
            2 => {
                let artifact = ancient_artifact();
                let item_name = artifact.name.clone();
                if self.player.inventory.add(artifact).is_err() {
                    debug!("inventory full, {} left behind", item_name);
                }
                EventReport::ArtifactFound { item_name }
            }
            _ => {
                let recovered = (config::MAX_HEALTH - self.player.health).min(10);
                self.player.heal(10);
                EventReport::Rested { recovered }
            }
        };
        debug!("travel event at {}: {:?}", location.name, report);
        self.recheck_quests();
        Ok(Some(report))
    }

    // ------------------------------------------------------------------
    // Combat lifecycle
    // ------------------------------------------------------------------

    /// True while a fight is unresolved.
    pub fn in_combat(&self) -> bool {
        self.combat
            .as_ref()
            .map(|session| session.state() == CombatState::Active)
            .unwrap_or(false)
    }

    /// The current (or most recently finished) combat session.
    pub fn combat(&self) -> Option<&CombatSession> {
        self.combat.as_ref()
    }

    /// Narration of the current (or most recently finished) fight.
    pub fn combat_log(&self) -> Option<&[String]> {
        self.combat.as_ref().map(|session| session.log())
    }

    /// Challenges the boss residing at the player's location.
    ///
    /// The boss leaves its lair for the duration of the fight; a survivor is
    /// reseated afterwards, a defeated boss never returns.
    pub fn challenge_boss(&mut self) -> WesterosResult<&CombatSession> {
        self.ensure_no_combat()?;
        let position = self.player.position;
        let boss = self.board.take_boss_at(position).ok_or_else(|| {
            WesterosError::NoEnemyPresent("no boss resides here".to_string())
        })?;
        info!("{} challenges {}", self.player.name, boss.name);
        self.boss_origin = Some(position);
        let session = CombatSession::new(&mut self.player, boss);
        Ok(self.combat.insert(session))
    }

    /// Picks a fight with a freshly generated marauder.
    pub fn fight_marauder(&mut self, name: &str) -> WesterosResult<&CombatSession> {
        self.ensure_no_combat()?;
        let enemy = random_enemy_named(name, &mut self.rng);
        info!("{} picks a fight with {}", self.player.name, enemy.name);
        let session = CombatSession::new(&mut self.player, enemy);
        Ok(self.combat.insert(session))
    }

    /// Submits one combat action and settles the encounter if it ended.
    pub fn combat_action(&mut self, action: CombatAction) -> WesterosResult<CombatState> {
        let session = self.combat.as_mut().ok_or_else(|| {
            WesterosError::InvalidCombatAction("no combat in progress".to_string())
        })?;
        let state = session.submit_action(&mut self.player, action, &mut self.rng)?;
        if state.is_terminal() {
            self.settle_combat();
        }
        self.recheck_quests();
        Ok(state)
    }

    /// Triggers the boss's signature ability (boss encounters only).
    pub fn use_boss_ability(&mut self) -> WesterosResult<CombatState> {
        let session = self.combat.as_mut().ok_or_else(|| {
            WesterosError::InvalidCombatAction("no combat in progress".to_string())
        })?;
        let state = session.use_boss_ability(&mut self.player, &mut self.rng)?;
        if state.is_terminal() {
            self.settle_combat();
        }
        self.recheck_quests();
        Ok(state)
    }

    /// Post-combat bookkeeping, run once at the terminal transition: the
    /// boss bonus on victory, and reseating a surviving boss otherwise.
    fn settle_combat(&mut self) {
        let Some(session) = self.combat.as_ref() else {
            return;
        };
        let state = session.state();
        let enemy = session.enemy().clone();
        let origin = self.boss_origin.take();

        match state {
            CombatState::PlayerWon => {
                if enemy.boss_ability().is_some() {
                    self.player.earn_gold(config::BOSS_GOLD_BONUS);
                    self.messages.push(format!(
                        "You've defeated {}! Earned {} bonus gold.",
                        enemy.name,
                        config::BOSS_GOLD_BONUS
                    ));
                }
            }
            CombatState::PlayerLost | CombatState::PlayerFled => {
                if let Some(origin) = origin {
                    if enemy.is_alive() {
                        self.board.return_boss_at(origin, enemy);
                    }
                }
            }
            CombatState::Active => {}
        }
    }

    // ------------------------------------------------------------------
    // NPC interactions
    // ------------------------------------------------------------------

    /// The merchants' stock, freshly minted.
    pub fn shop_catalog(&self) -> Vec<Item> {
        shop_catalog()
    }

    /// Buys the catalog entry at `index`. Gold and inventory space are
    /// checked before anything changes hands.
    pub fn buy_item(&mut self, index: usize) -> WesterosResult<String> {
        self.ensure_no_combat()?;
        let mut stock = shop_catalog();
        if index >= stock.len() {
            return Err(WesterosError::ItemNotFound(format!(
                "no shop entry {}",
                index
            )));
        }
        let item = stock.swap_remove(index);
        if self.player.inventory.is_full() {
            return Err(WesterosError::InventoryFull);
        }
        if !self.player.spend_gold(item.value) {
            return Err(WesterosError::InsufficientGold {
                needed: item.value,
                available: self.player.gold,
            });
        }
        let name = item.name.clone();
        // Space was checked above, so the add cannot be refused.
        let _ = self.player.inventory.add(item);
        debug!("{} bought {}", self.player.name, name);
        self.recheck_quests();
        Ok(name)
    }

    /// Sells a held item for half its value.
    pub fn sell_item(&mut self, id: ItemId) -> WesterosResult<i32> {
        self.ensure_no_combat()?;
        let item = self
            .player
            .inventory
            .remove(id)
            .ok_or_else(|| WesterosError::ItemNotFound("not in inventory".to_string()))?;
        let proceeds = item.value / 2;
        self.player.earn_gold(proceeds);
        debug!("{} sold {} for {} gold", self.player.name, item.name, proceeds);
        self.recheck_quests();
        Ok(proceeds)
    }

    /// A night at the inn: 20 gold for up to 50 health back.
    pub fn rest_at_inn(&mut self) -> WesterosResult<i32> {
        self.ensure_no_combat()?;
        if !self.player.spend_gold(20) {
            return Err(WesterosError::InsufficientGold {
                needed: 20,
                available: self.player.gold,
            });
        }
        let recovered = (config::MAX_HEALTH - self.player.health).min(50);
        self.player.heal(recovered);
        self.recheck_quests();
        Ok(recovered)
    }

    /// What the guard has heard lately.
    pub fn guard_rumor(&mut self) -> &'static str {
        random_rumor(&mut self.rng)
    }

    /// Asks a guard for work. Returns the accepted quest, or `None` when
    /// the active-quest cap refuses the offer.
    pub fn offer_quest(&mut self) -> WesterosResult<Option<&Quest>> {
        self.ensure_no_combat()?;
        if !self.quests.can_accept() {
            return Ok(None);
        }
        let quest = random_guard_quest(&mut self.rng);
        info!("guard offers quest: {}", quest.name);
        Ok(self.quests.offer(quest))
    }

    // ------------------------------------------------------------------
    // Inventory
    // ------------------------------------------------------------------

    /// The player's items in acquisition order.
    pub fn items(&self) -> &[Item] {
        self.player.inventory.items()
    }

    /// Adds an item to the player's inventory.
    pub fn add_item(&mut self, item: Item) -> WesterosResult<()> {
        if self.player.inventory.add(item).is_err() {
            return Err(WesterosError::InventoryFull);
        }
        self.recheck_quests();
        Ok(())
    }

    /// Removes and returns a held item.
    pub fn remove_item(&mut self, id: ItemId) -> WesterosResult<Item> {
        let item = self
            .player
            .inventory
            .remove(id)
            .ok_or_else(|| WesterosError::ItemNotFound("not in inventory".to_string()))?;
        self.recheck_quests();
        Ok(item)
    }

    /// Uses a held item outside combat: applies its effect, then removes it.
    pub fn use_item(&mut self, id: ItemId) -> WesterosResult<String> {
        self.ensure_no_combat()?;
        let item = self
            .player
            .inventory
            .remove(id)
            .ok_or_else(|| WesterosError::ItemNotFound("not in inventory".to_string()))?;
        item.apply(&mut self.player);
        debug!("{} used {}", self.player.name, item.name);
        self.recheck_quests();
        Ok(item.name)
    }

    // ------------------------------------------------------------------
    // Messages and the quest hook
    // ------------------------------------------------------------------

    /// Drains accumulated notices (quest completions, boss bonuses) for the
    /// frontend to display.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    /// Explicit quest poll for frontends that want one; every mutating
    /// operation already runs this.
    pub fn check_quest_completion(&mut self) -> Vec<String> {
        let completed = self.quests.check_completion(&mut self.player);
        for name in &completed {
            self.messages.push(format!("Quest completed: {}", name));
        }
        completed
    }

    fn recheck_quests(&mut self) {
        self.check_quest_completion();
    }

    fn ensure_no_combat(&self) -> WesterosResult<()> {
        if self.in_combat() {
            return Err(WesterosError::InvalidCombatAction(
                "a fight is in progress".to_string(),
            ));
        }
        Ok(())
    }
}

//! # Quest Module
//!
//! Quests pair a read-only completion condition with a one-shot reward.
//! Conditions and rewards are tagged data, so quests are inspectable and
//! serializable; completion is rechecked after every mutating action instead
//! of on a timer.

use crate::{config, new_quest_id, Item, ItemEffect, Player, Position, QuestId, StatKind};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Read-only completion predicate over the player's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestCondition {
    /// Player stands on the given cell
    AtPosition(Position),
    /// Player holds an item with the given name
    HasItem(String),
    /// The selected stat strictly exceeds the threshold
    StatAbove(StatKind, i32),
    /// Every inner condition holds
    All(Vec<QuestCondition>),
}

impl QuestCondition {
    /// Evaluates the predicate against current player state. Pure.
    pub fn evaluate(&self, player: &Player) -> bool {
        match self {
            QuestCondition::AtPosition(position) => player.position == *position,
            QuestCondition::HasItem(name) => player.inventory.has_item_named(name),
            QuestCondition::StatAbove(kind, threshold) => player.stats.get(*kind) > *threshold,
            QuestCondition::All(conditions) => {
                conditions.iter().all(|condition| condition.evaluate(player))
            }
        }
    }
}

/// The mutation applied to the player when a quest completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestReward {
    /// Credit gold
    Gold(i32),
    /// Grant a valueless-effect keepsake item
    Relic { name: String, value: i32 },
    /// Permanently raise a stat
    StatBoost(StatKind, i32),
}

impl QuestReward {
    /// Applies the reward to the player.
    ///
    /// A relic granted to a full inventory is lost; the completion still
    /// stands.
    pub fn apply(&self, player: &mut Player) {
        match self {
            QuestReward::Gold(amount) => player.earn_gold(*amount),
            QuestReward::Relic { name, value } => {
                let relic = Item::new(name.clone(), *value, ItemEffect::None);
                if player.inventory.add(relic).is_err() {
                    warn!("inventory full, reward {} lost", name);
                }
            }
            QuestReward::StatBoost(kind, amount) => player.stats.boost(*kind, *amount),
        }
    }
}

/// A named task with a completion condition and a one-shot reward.
///
/// # Examples
///
/// ```
/// use westeros::{Player, Position, Quest, QuestCondition, QuestReward, Role};
///
/// let mut quest = Quest::new(
///     "The King's Errand",
///     "Deliver a message to the Night's Watch.",
///     QuestReward::Gold(100),
///     QuestCondition::AtPosition(Position::new(5, 5)),
/// );
/// let mut player = Player::new("Sam", "Tarly", Role::Maester);
/// player.position = Position::new(5, 5);
///
/// assert!(quest.evaluate(&player));
/// assert!(quest.complete(&mut player));
/// assert_eq!(player.gold, 200);
/// // Completion is idempotent: the reward is applied exactly once.
/// assert!(!quest.complete(&mut player));
/// assert_eq!(player.gold, 200);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub name: String,
    pub description: String,
    pub reward: QuestReward,
    pub condition: QuestCondition,
    /// Monotonic: transitions false to true exactly once, never back
    pub completed: bool,
}

impl Quest {
    /// Creates an uncompleted quest with a fresh id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        reward: QuestReward,
        condition: QuestCondition,
    ) -> Self {
        Self {
            id: new_quest_id(),
            name: name.into(),
            description: description.into(),
            reward,
            condition,
            completed: false,
        }
    }

    /// True iff the completion condition holds against current player state.
    pub fn evaluate(&self, player: &Player) -> bool {
        self.condition.evaluate(player)
    }

    /// Marks the quest completed and applies the reward.
    ///
    /// Idempotent: returns false and does nothing when already completed.
    pub fn complete(&mut self, player: &mut Player) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        self.reward.apply(player);
        debug!("quest completed: {}", self.name);
        true
    }
}

/// The player's quest list, bounded to a few simultaneously active tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestLog {
    quests: Vec<Quest>,
}

impl QuestLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log seeded with a starting quest set.
    pub fn with_quests(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    /// All quests in acceptance order.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Number of active (non-completed) quests.
    pub fn active_count(&self) -> usize {
        self.quests.iter().filter(|quest| !quest.completed).count()
    }

    /// True while another quest may be accepted.
    pub fn can_accept(&self) -> bool {
        self.active_count() < config::MAX_ACTIVE_QUESTS
    }

    /// Accepts an offered quest unless the active cap is reached.
    ///
    /// Returns the accepted quest, or `None` when the offer is refused.
    pub fn offer(&mut self, quest: Quest) -> Option<&Quest> {
        if !self.can_accept() {
            debug!("quest offer refused, {} already active", self.active_count());
            return None;
        }
        self.quests.push(quest);
        self.quests.last()
    }

    /// Completes every newly satisfied quest and returns their names.
    ///
    /// This is the post-action hook run after each state-mutating operation;
    /// one pass per call, in acceptance order.
    pub fn check_completion(&mut self, player: &mut Player) -> Vec<String> {
        let mut completed = Vec::new();
        for quest in &mut self.quests {
            if !quest.completed && quest.evaluate(player) && quest.complete(player) {
                completed.push(quest.name.clone());
            }
        }
        completed
    }
}

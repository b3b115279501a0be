//! # Quest Generation
//!
//! The fixed starting quest set and the pool a guard draws offers from,
//! plus the rumors guards share for free.

use crate::{Position, Quest, QuestCondition, QuestReward, StatKind};
use rand::rngs::StdRng;
use rand::Rng;

/// What a guard will tell anyone who asks.
pub const GUARD_RUMORS: [&str; 4] = [
    "I heard rumors of a dragon sighting near Dragonstone.",
    "The Lannisters are plotting something in King's Landing.",
    "Winter is coming, and the Night's Watch needs more men.",
    "There's unrest in the Iron Islands.",
];

/// Picks a rumor uniformly at random.
pub fn random_rumor(rng: &mut StdRng) -> &'static str {
    GUARD_RUMORS[rng.gen_range(0..GUARD_RUMORS.len())]
}

/// The three quests every new game starts with.
pub fn starting_quests() -> Vec<Quest> {
    vec![
        Quest::new(
            "The King's Errand",
            "Deliver a message to the Night's Watch.",
            QuestReward::Gold(100),
            QuestCondition::AtPosition(Position::new(5, 5)),
        ),
        Quest::new(
            "Dragon's Egg",
            "Find a dragon egg in Dragonstone.",
            QuestReward::Relic {
                name: "Dragon Egg".to_string(),
                value: 1000,
            },
            QuestCondition::HasItem("Dragon Egg".to_string()),
        ),
        Quest::new(
            "Defend the Wall",
            "Help the Night's Watch defend against wildlings.",
            QuestReward::StatBoost(StatKind::Strength, 2),
            QuestCondition::All(vec![
                QuestCondition::AtPosition(Position::new(0, 9)),
                QuestCondition::StatAbove(StatKind::Strength, 12),
            ]),
        ),
    ]
}

/// Draws one quest uniformly from the guard pool.
pub fn random_guard_quest(rng: &mut StdRng) -> Quest {
    match rng.gen_range(0..3) {
        0 => Quest::new(
            "Patrol the Walls",
            "Help the city guard patrol the walls.",
            QuestReward::Gold(75),
            QuestCondition::AtPosition(Position::new(3, 3)),
        ),
        1 => Quest::new(
            "Deliver a Message",
            "Deliver a confidential message to the Maester.",
            QuestReward::Relic {
                name: "Rare Book".to_string(),
                value: 100,
            },
            QuestCondition::AtPosition(Position::new(7, 7)),
        ),
        _ => Quest::new(
            "Investigate Rumors",
            "Investigate rumors of bandits in the nearby forest.",
            QuestReward::StatBoost(StatKind::Strength, 3),
            QuestCondition::HasItem("Bandit's Emblem".to_string()),
        ),
    }
}

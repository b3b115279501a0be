//! # World Generation
//!
//! The Westeros catalog: ten named locations with their NPC rosters, the
//! shared wilderness, and the three bosses with their lairs.

use crate::{Board, BossAbility, Enemy, Location, Npc, NpcRole, Stats, WorldConfig};
use rand::rngs::StdRng;

/// Builds the ten named locations with the configured event probability.
fn named_locations(config: &WorldConfig) -> Vec<Location> {
    let p = config.settlement_event_probability;
    vec![
        Location::with_npcs(
            "Winterfell",
            "#444444",
            p,
            vec![
                Npc::new("Stark Steward", NpcRole::Merchant),
                Npc::new("Maester Luwin", NpcRole::Innkeeper),
                Npc::new("Ser Rodrik Cassel", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "King's Landing",
            "#f1c232",
            p,
            vec![
                Npc::new("Street Vendor", NpcRole::Merchant),
                Npc::new("Tavern Keeper", NpcRole::Innkeeper),
                Npc::new("City Watch Guard", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "The Wall",
            "#fffafa",
            p,
            vec![
                Npc::new("Night's Watch Steward", NpcRole::Merchant),
                Npc::new("Castle Black Cook", NpcRole::Innkeeper),
                Npc::new("Night's Watch Ranger", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "Dragonstone",
            "#6a329f",
            p,
            vec![
                Npc::new("Smuggler", NpcRole::Merchant),
                Npc::new("Dragonstone Servant", NpcRole::Innkeeper),
            ],
        ),
        Location::with_npcs(
            "Riverrun",
            "#2986cc",
            p,
            vec![
                Npc::new("Tully Merchant", NpcRole::Merchant),
                Npc::new("Riverrun Innkeeper", NpcRole::Innkeeper),
                Npc::new("Tully Guard", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "The Eyrie",
            "skyblue",
            p,
            vec![
                Npc::new("Vale Trader", NpcRole::Merchant),
                Npc::new("Eyrie Steward", NpcRole::Innkeeper),
                Npc::new("Knight of the Vale", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "Casterly Rock",
            "#990000",
            p,
            vec![
                Npc::new("Lannister Merchant", NpcRole::Merchant),
                Npc::new("Golden Tooth Innkeeper", NpcRole::Innkeeper),
                Npc::new("Lannister Guard", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "Highgarden",
            "#a64d79",
            p,
            vec![
                Npc::new("Reach Trader", NpcRole::Merchant),
                Npc::new("Highgarden Servant", NpcRole::Innkeeper),
                Npc::new("Tyrell Guard", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "Dorne",
            "#ffe599",
            p,
            vec![
                Npc::new("Dornish Merchant", NpcRole::Merchant),
                Npc::new("Sunspear Innkeeper", NpcRole::Innkeeper),
                Npc::new("Martell Guard", NpcRole::Guard),
            ],
        ),
        Location::with_npcs(
            "Iron Islands",
            "#999999",
            p,
            vec![
                Npc::new("Ironborn Trader", NpcRole::Merchant),
                Npc::new("Pyke Servant", NpcRole::Innkeeper),
                Npc::new("Ironborn Warrior", NpcRole::Guard),
            ],
        ),
    ]
}

/// The three bosses, each paired with its lair.
fn boss_roster() -> [(&'static str, Enemy); 3] {
    [
        (
            "King's Landing",
            Enemy::boss(
                "Cersei Lannister",
                "Lannister",
                Stats::new(10, 15, 18, 8),
                BossAbility::WildfirePlot,
            ),
        ),
        (
            "The Wall",
            Enemy::boss(
                "Night King",
                "White Walkers",
                Stats::new(20, 15, 10, 15),
                BossAbility::RaiseDead,
            ),
        ),
        (
            "Dragonstone",
            Enemy::boss(
                "Drogon",
                "Targaryen",
                Stats::new(25, 10, 5, 20),
                BossAbility::Dragonfire,
            ),
        ),
    ]
}

/// Generates the Westeros board: named locations scattered over the grid,
/// wilderness everywhere else, bosses installed in their lairs.
pub fn westeros_board(config: &WorldConfig, rng: &mut StdRng) -> Board {
    let wilderness = Location::new("Wilderness", "#4a6741", config.wilderness_event_probability);
    let mut board = Board::generate(config.board_size, wilderness, named_locations(config), rng);
    for (lair, boss) in boss_roster() {
        board.assign_boss(lair, boss);
    }
    board
}

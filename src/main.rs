//! # Westeros RPG Main Entry Point
//!
//! A plain terminal frontend: parses the character from the command line,
//! then drives the game session with one command per input line. All rules
//! live in the library; this file only translates lines into session calls
//! and prints the results.

use clap::Parser;
use std::io::{self, BufRead, Write};
use westeros::{
    CombatAction, CombatState, Direction, EventReport, GameSession, MoveOutcome, Player, Role,
    WorldConfig, ENEMY_NAMES,
};

/// Command line arguments for the Westeros RPG.
#[derive(Parser, Debug)]
#[command(name = "westeros")]
#[command(about = "A turn-based Westeros RPG with a grid world, boss fights, and quests")]
#[command(version)]
struct Args {
    /// Character name
    #[arg(long, default_value = "Eddard")]
    name: String,

    /// House affiliation
    #[arg(long, default_value = "Stark")]
    house: String,

    /// Role: warrior, diplomat, or maester
    #[arg(long, default_value = "warrior")]
    role: String,

    /// Random seed for world generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let role = match args.role.to_lowercase().as_str() {
        "diplomat" => Role::Diplomat,
        "maester" => Role::Maester,
        _ => Role::Warrior,
    };
    let player = Player::new(args.name.clone(), args.house.clone(), role);
    let config = WorldConfig::new(args.seed.unwrap_or(42));
    let mut session = GameSession::new(player, &config);

    println!("Westeros RPG v{}", westeros::VERSION);
    println!(
        "{} of House {}, the {}. Type 'help' for commands.",
        args.name, args.house, role
    );

    // Combat log lines already shown, so each command prints only the delta.
    let mut log_cursor = 0usize;

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(word) => word.to_lowercase(),
            None => continue,
        };
        let argument = words.next().map(str::to_string);

        match command.as_str() {
            "quit" | "exit" => break,
            "help" => print_help(),
            "status" => print_status(&session),
            "map" => print_map(&session),
            "look" => print_look(&session),
            "quests" => print_quests(&session),
            "items" => print_items(&session),
            "move" => handle_move(&mut session, argument.as_deref(), &mut log_cursor),
            "shop" => print_shop(&session),
            "buy" => match parse_index(argument.as_deref()) {
                Some(index) => report(session.buy_item(index).map(|name| format!("Bought {}.", name))),
                None => println!("Usage: buy <number>"),
            },
            "sell" => match item_id_at(&session, argument.as_deref()) {
                Some(id) => report(
                    session
                        .sell_item(id)
                        .map(|gold| format!("Sold for {} gold.", gold)),
                ),
                None => println!("Usage: sell <number>"),
            },
            "rest" => report(
                session
                    .rest_at_inn()
                    .map(|recovered| format!("You rested and recovered {} health.", recovered)),
            ),
            "rumor" => println!("Guard: '{}'", session.guard_rumor()),
            "quest" => match session.offer_quest() {
                Ok(Some(quest)) => {
                    println!("New quest received: {}", quest.name);
                    println!("{}", quest.description);
                }
                Ok(None) => println!(
                    "Guard: 'You already have enough tasks. Complete some of your current quests first.'"
                ),
                Err(error) => println!("{}", error),
            },
            "use" => match item_id_at(&session, argument.as_deref()) {
                Some(id) => {
                    if session.in_combat() {
                        combat_round(&mut session, CombatAction::UseItem(id), &mut log_cursor);
                    } else {
                        report(session.use_item(id).map(|name| format!("Used {}.", name)));
                    }
                }
                None => println!("Usage: use <number>"),
            },
            "fight" => {
                let name = argument.as_deref().unwrap_or(ENEMY_NAMES[0]);
                match session.fight_marauder(name) {
                    Ok(_) => {
                        log_cursor = 0;
                        show_combat_log(&session, &mut log_cursor);
                    }
                    Err(error) => println!("{}", error),
                }
            }
            "boss" => match session.challenge_boss() {
                Ok(combat) => {
                    println!("You encounter {}, prepare for a boss battle!", combat.enemy().name);
                    log_cursor = 0;
                    show_combat_log(&session, &mut log_cursor);
                }
                Err(error) => println!("{}", error),
            },
            "attack" => combat_round(&mut session, CombatAction::Attack, &mut log_cursor),
            "defend" => combat_round(&mut session, CombatAction::Defend, &mut log_cursor),
            "flee" => combat_round(&mut session, CombatAction::Flee, &mut log_cursor),
            "ability" => {
                match session.use_boss_ability() {
                    Ok(_) => {}
                    Err(error) => println!("{}", error),
                }
                show_combat_log(&session, &mut log_cursor);
            }
            _ => println!("Unknown command '{}'. Type 'help'.", command),
        }

        for message in session.drain_messages() {
            println!("{}", message);
        }
        if !session.player.is_alive() {
            println!("Game Over!");
            break;
        }
    }
}

fn report(result: Result<String, westeros::WesterosError>) {
    match result {
        Ok(message) => println!("{}", message),
        Err(error) => println!("{}", error),
    }
}

fn print_help() {
    println!("World:  move <north|south|east|west>, map, look, status, quests, items");
    println!("Town:   shop, buy <n>, sell <n>, use <n>, rest, rumor, quest");
    println!("Fights: fight [name], boss, attack, defend, use <n>, flee, ability");
    println!("Other:  help, quit");
}

fn print_status(session: &GameSession) {
    let player = &session.player;
    println!(
        "{} of House {} ({}) at {}",
        player.name, player.house, player.role, player.position
    );
    println!(
        "Health {}  Gold {}  Str {}  Int {}  Cha {}  Def {}",
        player.health,
        player.gold,
        player.stats.strength,
        player.stats.intelligence,
        player.stats.charisma,
        player.stats.defense
    );
    let (move_name, magnitude) = player.role.signature_move();
    println!("Signature move: {} ({})", move_name, magnitude);
}

fn print_map(session: &GameSession) {
    for y in 0..session.board.size() {
        let mut row = String::new();
        for x in 0..session.board.size() {
            if session.player.position.x == x && session.player.position.y == y {
                row.push('@');
            } else {
                let cell = match session.board.location_at(x, y) {
                    Some(location) if location.name == "Wilderness" => '.',
                    Some(location) => location.name.chars().next().unwrap_or('?'),
                    None => '?',
                };
                row.push(cell);
            }
            row.push(' ');
        }
        println!("{}", row);
    }
}

fn print_look(session: &GameSession) {
    match session.current_location() {
        Ok(location) => {
            println!("You are in {}.", location.name);
            if location.npcs.is_empty() {
                println!("No NPCs in the wilderness.");
            } else {
                for npc in &location.npcs {
                    println!("  {} ({})", npc.name, npc.role);
                }
            }
            if let Some(boss) = &location.boss {
                println!("{} resides here. Type 'boss' to challenge.", boss.name);
            }
        }
        Err(error) => println!("{}", error),
    }
}

fn print_quests(session: &GameSession) {
    for quest in session.quests.quests() {
        let status = if quest.completed { "Completed" } else { "Active" };
        println!("{} - {}", quest.name, status);
        println!("  {}", quest.description);
    }
}

fn print_items(session: &GameSession) {
    if session.items().is_empty() {
        println!("Inventory is empty.");
        return;
    }
    for (index, item) in session.items().iter().enumerate() {
        println!("  {}: {} (Value: {})", index, item.name, item.value);
    }
}

fn print_shop(session: &GameSession) {
    for (index, item) in session.shop_catalog().iter().enumerate() {
        println!("  {}: {} ({} gold)", index, item.name, item.value);
    }
}

fn handle_move(session: &mut GameSession, argument: Option<&str>, log_cursor: &mut usize) {
    let direction = match argument.map(str::to_lowercase).as_deref() {
        Some("north" | "n") => Direction::North,
        Some("south" | "s") => Direction::South,
        Some("east" | "e") => Direction::East,
        Some("west" | "w") => Direction::West,
        _ => {
            println!("Usage: move <north|south|east|west>");
            return;
        }
    };
    match session.move_player(direction) {
        Ok(MoveOutcome::Moved) => {
            print_look(session);
            match session.check_for_event() {
                Ok(Some(report)) => {
                    print_event(&report);
                    if matches!(report, EventReport::Ambushed { .. }) {
                        *log_cursor = 0;
                        show_combat_log(session, log_cursor);
                    }
                }
                Ok(None) => {}
                Err(error) => println!("{}", error),
            }
        }
        Ok(MoveOutcome::Blocked) => println!("The edge of the map blocks your way."),
        Err(error) => println!("{}", error),
    }
}

fn print_event(report: &EventReport) {
    match report {
        EventReport::GoldFound(amount) => println!("You find a bag of gold! (+{})", amount),
        EventReport::Ambushed { enemy_name } => {
            println!("You are ambushed by bandits! {} attacks!", enemy_name)
        }
        EventReport::ArtifactFound { item_name } => {
            println!("You discover an ancient artifact! ({})", item_name)
        }
        EventReport::Rested { recovered } => println!(
            "A kind stranger offers you food and rest. (+{} health)",
            recovered
        ),
    }
}

fn combat_round(session: &mut GameSession, action: CombatAction, log_cursor: &mut usize) {
    match session.combat_action(action) {
        Ok(state) => {
            show_combat_log(session, log_cursor);
            if state != CombatState::Active {
                println!("Combat ended.");
            }
        }
        Err(error) => println!("{}", error),
    }
}

fn show_combat_log(session: &GameSession, log_cursor: &mut usize) {
    if let Some(combat) = session.combat() {
        let log = combat.log();
        // A fresh session restarts the narration.
        if *log_cursor > log.len() {
            *log_cursor = 0;
        }
        for line in &log[*log_cursor..] {
            println!("{}", line);
        }
        *log_cursor = log.len();
        if combat.state() == CombatState::Active {
            println!(
                "[{} HP {} | {} HP {}]",
                session.player.name,
                session.player.health,
                combat.enemy().name,
                combat.enemy().health
            );
        }
    }
}

fn parse_index(argument: Option<&str>) -> Option<usize> {
    argument.and_then(|word| word.parse().ok())
}

fn item_id_at(session: &GameSession, argument: Option<&str>) -> Option<westeros::ItemId> {
    let index = parse_index(argument)?;
    session.items().get(index).map(|item| item.id)
}

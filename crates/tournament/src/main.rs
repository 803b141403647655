//! Tournament CLI
//!
//! Run matches between checkers engines and track Elo ratings.

use checkers_core::Engine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::env;
use tournament::{EloTracker, MatchConfig, MatchRunner, TournamentResults};

const ELO_FILE: &str = "elo_ratings.json";

fn print_usage() {
    println!("Elemental checkers tournament runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--depth D] [--seed S]");
    println!("  tournament match <engine1> <engine2> --config <file.toml>");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  minimax       - Alpha-beta search with weighted evaluation");
    println!("  random        - Uniform random baseline");
    println!();
    println!("Examples:");
    println!("  tournament match minimax random --games 20 --depth 3");
    println!("  tournament match minimax minimax --games 10 --seed 42");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "minimax" => Box::new(MinimaxEngine::new()),
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}, using minimax", spec);
            Box::new(MinimaxEngine::new())
        }
    }
}

fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn run_match(args: &[String]) -> Result<(), String> {
    let engine1_name = args.first().ok_or("missing engine1")?.clone();
    let engine2_name = args.get(1).ok_or("missing engine2")?.clone();

    let mut config = match parse_flag(args, "--config") {
        Some(path) => MatchConfig::from_toml_file(&path)?,
        None => MatchConfig::default(),
    };
    if let Some(games) = parse_flag(args, "--games") {
        config.num_games = games.parse().map_err(|_| "invalid --games")?;
    }
    if let Some(depth) = parse_flag(args, "--depth") {
        config.depth = depth.parse().map_err(|_| "invalid --depth")?;
    }
    if let Some(seed) = parse_flag(args, "--seed") {
        config.seed = seed.parse().map_err(|_| "invalid --seed")?;
    }

    let mut engine1 = create_engine(&engine1_name);
    let mut engine2 = create_engine(&engine2_name);

    println!(
        "Match: {} vs {} ({} games, depth {})",
        engine1_name, engine2_name, config.num_games, config.depth
    );

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let mut results = TournamentResults::new(
        "match",
        vec![engine1_name.clone(), engine2_name.clone()],
        config,
    );
    results.add_match(&engine1_name, &engine2_name, result.clone());
    results.print_report();
    results.save(std::path::Path::new("match_results.json"))?;

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(&engine1_name, &engine2_name, &result);
    tracker.save(ELO_FILE)?;
    tracker.print_leaderboard();

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let outcome = match args.first().map(String::as_str) {
        Some("match") => run_match(&args[1..]),
        Some("leaderboard") => match EloTracker::load(ELO_FILE) {
            Ok(tracker) => {
                tracker.print_leaderboard();
                Ok(())
            }
            Err(_) => {
                println!("No ratings recorded yet ({} not found)", ELO_FILE);
                Ok(())
            }
        },
        _ => {
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use super::*;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;

#[test]
fn test_self_play_completes() {
    let mut engine1 = MinimaxEngine::new();
    let mut engine2 = MinimaxEngine::new();

    let config = MatchConfig {
        num_games: 2,
        depth: 2,
        max_moves: 60,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2);
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_minimax_beats_random() {
    let mut minimax = MinimaxEngine::new();
    let mut random = RandomEngine::new();

    let config = MatchConfig {
        num_games: 4,
        depth: 3,
        max_moves: 150,
        seed: 7,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut minimax, &mut random);
    // The search should not lose to uniform random play over a short match.
    assert!(result.wins + result.draws >= result.losses);
}

#[test]
fn test_config_toml_round_trip() {
    let config = MatchConfig {
        num_games: 8,
        depth: 5,
        max_moves: 120,
        seed: 42,
        alternate_colors: false,
        verbose: false,
    };

    let text = toml::to_string(&config).unwrap();
    let parsed: MatchConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.num_games, 8);
    assert_eq!(parsed.depth, 5);
    assert_eq!(parsed.seed, 42);
    assert!(!parsed.alternate_colors);
}

//! Whole matches driven through the public API.

mod common;

use bisca::ai::{AiConfig, AiPlayer};
use bisca::domain::rules::DECK_POINTS;
use bisca::domain::round_flow::match_over;

fn lineup(players: usize, seed: u64) -> Vec<Box<dyn AiPlayer + Send>> {
    let specs = [
        ("analytical", "hard"),
        ("random", ""),
        ("trap_setter", "very_hard"),
        ("greedy", "adaptive"),
        ("cautious", "easy"),
        ("unpredictable", "medium"),
    ];
    (0..players)
        .map(|s| {
            let (personality, difficulty) = specs[s];
            if personality == "random" {
                return common::seat("RandomPlayer", AiConfig::with_seed(seed + s as u64));
            }
            let config = AiConfig::from_json(Some(&serde_json::json!({
                "seed": seed + s as u64,
                "personality": personality,
                "difficulty": difficulty,
            })));
            common::seat("Engine", config)
        })
        .collect()
}

#[test]
fn every_card_is_played_and_all_points_are_scored() {
    for players in [2usize, 4, 6] {
        for seed in [1u64, 2, 3] {
            let run = common::run_match(seed, lineup(players, seed));
            assert!(match_over(&run.state), "{players} players, seed {seed}");
            assert_eq!(run.raw_points, DECK_POINTS);
            assert_eq!(run.evaluations.len(), run.state.total_rounds as usize);

            let bonus: u16 = run
                .evaluations
                .iter()
                .map(|e| e.bonus.map_or(0, |b| b.points()))
                .sum();
            let scored: i16 = run.state.players.iter().map(|p| p.score).sum();
            assert_eq!(scored as u16, DECK_POINTS + bonus);
        }
    }
}

#[test]
fn every_seat_is_rated_once_per_round() {
    let run = common::run_match(42, lineup(4, 42));
    for seat in 0..4u8 {
        let stats = run.evaluator.get_stats(seat).unwrap();
        assert_eq!(stats.total_moves, u32::from(run.state.total_rounds));
    }
    assert!(run.evaluations.iter().all(|e| !e.is_degraded()));
}

#[test]
fn bonuses_only_in_first_round_of_team_matches() {
    for seed in 0..8u64 {
        let two = common::run_match(seed, lineup(2, seed));
        assert!(two.evaluations.iter().all(|e| e.bonus.is_none()));
        let four = common::run_match(seed, lineup(4, seed));
        assert!(four.evaluations.iter().skip(1).all(|e| e.bonus.is_none()));
    }
}

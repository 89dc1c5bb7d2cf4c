#![allow(dead_code)]

// tests/common/mod.rs
pub mod logging;

use bisca::ai::{AiConfig, AiPlayer};
use bisca::domain::rules::team_of;
use bisca::domain::{complete_round, deal_game, play_card, table_plays, GameState, Seat};
use bisca::evaluation::{PlayerMove, RoundEvaluation, RoundEvaluator};

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    logging::init();
}

pub struct MatchRun {
    pub state: GameState,
    pub evaluator: RoundEvaluator,
    pub evaluations: Vec<RoundEvaluation>,
    /// Card points of every round, without stake or bonuses.
    pub raw_points: u16,
}

/// Build a seat by registry name.
pub fn seat(name: &str, config: AiConfig) -> Box<dyn AiPlayer + Send> {
    let factory = bisca::ai::registry::by_name(name).expect("registered AI");
    (factory.make)(&config)
}

/// Play a whole match with one AI per seat, applying results the way a
/// caller is expected to.
pub fn run_match(seed: u64, mut seats: Vec<Box<dyn AiPlayer + Send>>) -> MatchRun {
    let players = seats.len();
    let mut state = deal_game(players, seed).expect("deal");
    let mut evaluator = RoundEvaluator::for_game(&state).expect("evaluator");
    for (s, ai) in seats.iter_mut().enumerate() {
        ai.initialize(&state, s as Seat).expect("initialize");
    }

    let mut evaluations = Vec::new();
    let mut raw_points = 0u16;
    for _ in 0..state.total_rounds {
        for _ in 0..players {
            let s = state.current_seat;
            let table = table_plays(&state);
            let ai = &mut seats[s as usize];
            let index = if table.is_empty() {
                ai.choose_leading_card()
            } else {
                ai.choose_responding_card_on_table(&table)
            }
            .expect("choice");
            play_card(&mut state, s, index).expect("legal play");
        }

        let plays = table_plays(&state);
        raw_points += plays.iter().map(|(_, c)| u16::from(c.points())).sum::<u16>();
        let moves: Vec<PlayerMove> = plays
            .iter()
            .map(|&(s, c)| PlayerMove::new(s, c, team_of(s, players)))
            .collect();
        let evaluation = evaluator
            .try_evaluate_round(&moves, state.round_stake)
            .expect("well-formed round");
        complete_round(
            &mut state,
            Some(evaluation.winning_player_id),
            evaluation.points_earned,
        )
        .expect("complete round");
        evaluations.push(evaluation);

        for ai in seats.iter_mut() {
            ai.update_memory(&state).expect("update memory");
            ai.adapt_personality();
        }
    }

    MatchRun {
        state,
        evaluator,
        evaluations,
        raw_points,
    }
}

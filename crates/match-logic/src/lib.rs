//! Match Logic for Prisoner's Arena
//!
//! Core game logic for the Iterated Prisoner's Dilemma tournament:
//! - Payoff table and round outcomes
//! - Built-in strategies and the agents that carry them
//! - The banker, which runs a fixed-length match between two agents
//! - The round-robin tournament tallying wins across a roster

mod error;
mod random;
mod strategy;
mod agent;
mod human;
mod game;
mod pairing;
mod tournament;
pub mod report;

pub use error::{ArenaError, Result};
pub use random::SeededRng;
pub use strategy::{describe_strategy, execute_strategy, Move, Strategy};
pub use agent::{Agent, Brain};
pub use human::{ConsolePrompt, HumanPrompt, MovePrompt};
pub use game::{
    Banker, MatchObserver, MatchResult, Outcome, RoundResult, Verdict, DEFAULT_ROUNDS,
};
pub use pairing::{calculate_match_count, round_robin_pairs};
pub use tournament::{PlayerSpec, Standing, Tournament, TournamentConfig, TournamentReport};

/// Payoff table for the Prisoner's Dilemma, indexed by `[move_a][move_b]`.
///
/// Total over the closed `Move` enum: every pair resolves to exactly one entry.
const PAYOFF: [[RoundResult; 2]; 2] = [
    [
        RoundResult {
            move_a: Move::Cooperate,
            move_b: Move::Cooperate,
            score_a: 3,
            score_b: 3,
            outcome: Outcome::BothCooperate,
        },
        RoundResult {
            move_a: Move::Cooperate,
            move_b: Move::Defect,
            score_a: 0,
            score_b: 5,
            outcome: Outcome::PlayerBWin,
        },
    ],
    [
        RoundResult {
            move_a: Move::Defect,
            move_b: Move::Cooperate,
            score_a: 5,
            score_b: 0,
            outcome: Outcome::PlayerAWin,
        },
        RoundResult {
            move_a: Move::Defect,
            move_b: Move::Defect,
            score_a: 1,
            score_b: 1,
            outcome: Outcome::BothDefect,
        },
    ],
];

/// Resolve a pair of simultaneous moves into the round's result
pub fn payoff(a: Move, b: Move) -> RoundResult {
    PAYOFF[a.index()][b.index()]
}

/// Payoff matrix for the Prisoner's Dilemma
/// Returns (score_a, score_b)
pub fn payoff_scores(a: Move, b: Move) -> (u8, u8) {
    let result = payoff(a, b);
    (result.score_a, result.score_b)
}

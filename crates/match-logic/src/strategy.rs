//! Strategy definitions and execution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::ArenaError;
use crate::random::SeededRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    /// Row/column of this move in the payoff table
    pub(crate) const fn index(self) -> usize {
        match self {
            Move::Cooperate => 0,
            Move::Defect => 1,
        }
    }

    /// Single-letter token, as typed by interactive players
    pub fn symbol(self) -> &'static str {
        match self {
            Move::Cooperate => "C",
            Move::Defect => "D",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses a move token. Surrounding whitespace and case are ignored.
impl FromStr for Move {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Move::Cooperate),
            "D" => Ok(Move::Defect),
            _ => Err(ArenaError::InvalidMove(s.trim().to_string())),
        }
    }
}

/// Built-in strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Fair coin each round.
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::AlwaysCooperate,
        Strategy::AlwaysDefect,
        Strategy::TitForTat,
        Strategy::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::AlwaysCooperate => "AlwaysCooperate",
            Strategy::AlwaysDefect => "AlwaysDefect",
            Strategy::TitForTat => "TitForTat",
            Strategy::Random => "Random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase().replace(['_', ' '], "-");
        match token.as_str() {
            "cooperate" | "always-cooperate" | "alwayscooperate" => Ok(Strategy::AlwaysCooperate),
            "defect" | "always-defect" | "alwaysdefect" => Ok(Strategy::AlwaysDefect),
            "tft" | "tit-for-tat" | "titfortat" => Ok(Strategy::TitForTat),
            "random" => Ok(Strategy::Random),
            _ => Err(ArenaError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Execute a strategy for one round
///
/// # Arguments
/// * `strategy` - The strategy to execute
/// * `opponent_history` - Opponent's past moves, oldest first
/// * `rng` - Random source owned by the deciding agent
///
/// Only the opponent's history is visible; a strategy never sees its own.
pub fn execute_strategy(
    strategy: Strategy,
    opponent_history: &[Move],
    rng: &mut SeededRng,
) -> Move {
    match strategy {
        Strategy::AlwaysCooperate => Move::Cooperate,
        Strategy::AlwaysDefect => Move::Defect,
        Strategy::TitForTat => execute_tit_for_tat(opponent_history),
        Strategy::Random => execute_random(rng),
    }
}

/// Tit-for-Tat: Copy opponent's last move, start with cooperate
fn execute_tit_for_tat(opponent_history: &[Move]) -> Move {
    opponent_history.last().copied().unwrap_or(Move::Cooperate)
}

/// Random: uniform choice, independent across calls
fn execute_random(rng: &mut SeededRng) -> Move {
    if rng.next_bool() {
        Move::Cooperate
    } else {
        Move::Defect
    }
}

/// Get a human-readable description of a strategy
pub fn describe_strategy(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::AlwaysCooperate => "Never defects. Always cooperates.",
        Strategy::AlwaysDefect => "Never cooperates. Always defects.",
        Strategy::TitForTat => "Copies opponent's last move. Starts by cooperating.",
        Strategy::Random => "Randomly cooperates or defects each round.",
    }
}

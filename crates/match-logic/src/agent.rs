//! Agents: a named strategy carrying its own move history and score

use std::fmt;

use crate::error::Result;
use crate::human::MovePrompt;
use crate::random::SeededRng;
use crate::strategy::{execute_strategy, Move, Strategy};

/// What drives an agent's decisions
pub enum Brain {
    /// One of the built-in strategies. Never blocks, never fails.
    Builtin { strategy: Strategy, rng: SeededRng },
    /// A player answering prompts, typically on the console.
    Interactive(Box<dyn MovePrompt>),
}

impl fmt::Debug for Brain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brain::Builtin { strategy, rng } => f
                .debug_struct("Builtin")
                .field("strategy", strategy)
                .field("rng", rng)
                .finish(),
            Brain::Interactive(_) => f.write_str("Interactive"),
        }
    }
}

/// A named player in the arena.
///
/// History holds only this agent's own moves and grows by one per round
/// played. Score only ever accumulates. Both persist across every match the
/// agent takes part in.
#[derive(Debug)]
pub struct Agent {
    name: String,
    history: Vec<Move>,
    score: u32,
    brain: Brain,
}

impl Agent {
    /// Create an agent running a built-in strategy with its own random source
    pub fn new(name: impl Into<String>, strategy: Strategy, rng: SeededRng) -> Self {
        Self::with_brain(name, Brain::Builtin { strategy, rng })
    }

    /// Create an agent running a built-in strategy.
    ///
    /// Random agents built this way share a fixed seed; use [`Agent::new`]
    /// to inject one.
    pub fn builtin(name: impl Into<String>, strategy: Strategy) -> Self {
        Self::new(name, strategy, SeededRng::new(0, 0))
    }

    /// Create an agent whose moves come from a prompt
    pub fn human(name: impl Into<String>, prompt: impl MovePrompt + 'static) -> Self {
        Self::with_brain(name, Brain::Interactive(Box::new(prompt)))
    }

    fn with_brain(name: impl Into<String>, brain: Brain) -> Self {
        Self {
            name: name.into(),
            history: Vec::new(),
            score: 0,
            brain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Built-in strategy, or `None` for interactive agents
    pub fn strategy(&self) -> Option<Strategy> {
        match &self.brain {
            Brain::Builtin { strategy, .. } => Some(*strategy),
            Brain::Interactive(_) => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.brain, Brain::Interactive(_))
    }

    /// Decide the next move from the opponent's history.
    ///
    /// Leaves history and score untouched; the banker records the move once
    /// both players have chosen. Only interactive agents can fail.
    pub fn choose(&mut self, opponent_history: &[Move]) -> Result<Move> {
        match &mut self.brain {
            Brain::Builtin { strategy, rng } => {
                Ok(execute_strategy(*strategy, opponent_history, rng))
            }
            Brain::Interactive(prompt) => prompt.ask(&self.name, opponent_history),
        }
    }

    /// Append a played move and the points it earned
    pub(crate) fn record(&mut self, played: Move, points: u8) {
        self.history.push(played);
        self.score = self.score.saturating_add(points as u32);
    }
}

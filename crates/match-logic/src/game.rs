//! Match execution engine

use serde::{Deserialize, Serialize};
use crate::agent::Agent;
use crate::error::Result;
use crate::payoff;
use crate::strategy::Move;

/// Rounds per match when none is given
pub const DEFAULT_ROUNDS: u32 = 3;

/// Classification of a round by the moves played
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    BothCooperate,
    PlayerAWin,
    PlayerBWin,
    BothDefect,
}

impl Outcome {
    /// Two-letter code used in the outcome log
    pub fn symbol(self) -> &'static str {
        match self {
            Outcome::BothCooperate => "BC",
            Outcome::PlayerAWin => "1W",
            Outcome::PlayerBWin => "2W",
            Outcome::BothDefect => "BD",
        }
    }
}

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub move_a: Move,
    pub move_b: Move,
    pub score_a: u8,
    pub score_b: u8,
    pub outcome: Outcome,
}

/// Who came out ahead
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Draw,
    PlayerA,
    PlayerB,
}

impl Verdict {
    pub fn from_scores(score_a: u32, score_b: u32) -> Self {
        match score_a.cmp(&score_b) {
            std::cmp::Ordering::Equal => Verdict::Draw,
            std::cmp::Ordering::Greater => Verdict::PlayerA,
            std::cmp::Ordering::Less => Verdict::PlayerB,
        }
    }
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub player_a: String,
    pub player_b: String,
    pub rounds: Vec<RoundResult>,
    /// Points earned in this match only
    pub match_score_a: u32,
    pub match_score_b: u32,
    /// Agents' running totals after this match, including earlier matches
    pub total_score_a: u32,
    pub total_score_b: u32,
    /// Decided on the running totals
    pub verdict: Verdict,
}

impl MatchResult {
    /// Name of the winner, `None` on a draw
    pub fn winner(&self) -> Option<&str> {
        match self.verdict {
            Verdict::Draw => None,
            Verdict::PlayerA => Some(&self.player_a),
            Verdict::PlayerB => Some(&self.player_b),
        }
    }
}

/// Hooks called as a match unfolds.
///
/// Every method defaults to doing nothing. `round_started` fires before
/// either agent is asked for a move, so an interactive player sees the
/// transcript up to the current round before being prompted.
pub trait MatchObserver {
    fn match_started(&mut self, _player_a: &str, _player_b: &str) {}

    fn round_started(&mut self, _round: u32) {}

    fn round_played(
        &mut self,
        _round: u32,
        _player_a: &str,
        _player_b: &str,
        _result: &RoundResult,
    ) {
    }

    fn match_finished(&mut self, _result: &MatchResult) {}
}

impl MatchObserver for () {}

/// Referee for one match between two agents.
///
/// Borrows both agents for the duration of the match; whatever they
/// accumulate stays with them afterwards.
#[derive(Debug)]
pub struct Banker<'a> {
    player_a: &'a mut Agent,
    player_b: &'a mut Agent,
    rounds: u32,
    log: Vec<RoundResult>,
}

impl<'a> Banker<'a> {
    pub fn new(player_a: &'a mut Agent, player_b: &'a mut Agent) -> Self {
        Self::with_rounds(player_a, player_b, DEFAULT_ROUNDS)
    }

    pub fn with_rounds(player_a: &'a mut Agent, player_b: &'a mut Agent, rounds: u32) -> Self {
        Self {
            player_a,
            player_b,
            rounds,
            log: Vec::new(),
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Rounds played so far, oldest first
    pub fn log(&self) -> &[RoundResult] {
        &self.log
    }

    pub fn player_a(&self) -> &Agent {
        &*self.player_a
    }

    pub fn player_b(&self) -> &Agent {
        &*self.player_b
    }

    /// Play one round.
    ///
    /// Both agents choose against the histories as they stood before this
    /// round, so neither sees the other's current move. Errors only come
    /// from interactive agents.
    pub fn play_round(&mut self) -> Result<RoundResult> {
        let move_a = self.player_a.choose(self.player_b.history())?;
        let move_b = self.player_b.choose(self.player_a.history())?;

        let result = payoff(move_a, move_b);
        self.player_a.record(move_a, result.score_a);
        self.player_b.record(move_b, result.score_b);

        log::debug!(
            "{} chose {}, {} chose {} => {}: {} ({})",
            self.player_a.name(),
            move_a,
            self.player_b.name(),
            move_b,
            result.score_a,
            result.score_b,
            result.outcome.symbol(),
        );

        self.log.push(result);
        Ok(result)
    }

    /// Play every round in order and summarize
    pub fn run_game(&mut self) -> Result<MatchResult> {
        self.run_game_observed(&mut ())
    }

    /// Like [`Banker::run_game`], reporting each step to `observer` as it happens
    pub fn run_game_observed<O>(&mut self, observer: &mut O) -> Result<MatchResult>
    where
        O: MatchObserver + ?Sized,
    {
        observer.match_started(self.player_a.name(), self.player_b.name());
        for round in 1..=self.rounds {
            log::debug!("Playing round: {}", round);
            observer.round_started(round);
            let played = self.play_round()?;
            observer.round_played(round, self.player_a.name(), self.player_b.name(), &played);
        }

        let result = self.summary();
        match result.winner() {
            Some(winner) => log::info!(
                "{} vs {}: {} wins ({}-{})",
                result.player_a,
                result.player_b,
                winner,
                result.total_score_a,
                result.total_score_b,
            ),
            None => log::info!(
                "{} vs {}: draw ({}-{})",
                result.player_a,
                result.player_b,
                result.total_score_a,
                result.total_score_b,
            ),
        }
        observer.match_finished(&result);
        Ok(result)
    }

    /// Snapshot of the match as it stands
    pub fn summary(&self) -> MatchResult {
        let match_score_a = self.log.iter().map(|r| r.score_a as u32).sum();
        let match_score_b = self.log.iter().map(|r| r.score_b as u32).sum();
        let total_score_a = self.player_a.score();
        let total_score_b = self.player_b.score();

        MatchResult {
            player_a: self.player_a.name().to_string(),
            player_b: self.player_b.name().to_string(),
            rounds: self.log.clone(),
            match_score_a,
            match_score_b,
            total_score_a,
            total_score_b,
            verdict: Verdict::from_scores(total_score_a, total_score_b),
        }
    }
}

//! Console rendering of match and tournament results
//!
//! String builders, plus [`Transcript`], which streams them to a writer while
//! a tournament runs.

use std::fmt::Write;
use std::io;

use crate::game::{MatchObserver, MatchResult, RoundResult, Verdict};
use crate::tournament::Standing;

/// Outcome codes per line of the outcome log
pub const LOG_WRAP: usize = 30;

/// One line describing a played round
pub fn render_round(player_a: &str, player_b: &str, round: &RoundResult) -> String {
    format!(
        "{} chose {}, {} chose {} => {}: {} ({})",
        player_a,
        round.move_a,
        player_b,
        round.move_b,
        round.score_a,
        round.score_b,
        round.outcome.symbol(),
    )
}

/// Outcome codes, `LOG_WRAP` per line
pub fn render_outcome_log(rounds: &[RoundResult]) -> String {
    let mut out = String::new();
    for line in rounds.chunks(LOG_WRAP) {
        for round in line {
            let _ = write!(out, " {} ", round.outcome.symbol());
        }
        out.push('\n');
    }
    out
}

pub fn render_match_header(player_a: &str, player_b: &str) -> String {
    format!("Playing match between {} and {}\n", player_a, player_b)
}

pub fn render_round_header(round: u32) -> String {
    format!("Playing round: {}\n", round)
}

/// Outcome log, coins and verdict
pub fn render_match_footer(result: &MatchResult) -> String {
    let mut out = render_outcome_log(&result.rounds);
    let _ = writeln!(out, "Player1 {} has {} coins", result.player_a, result.total_score_a);
    let _ = writeln!(out, "Player2 {} has {} coins", result.player_b, result.total_score_b);
    let _ = match result.verdict {
        Verdict::Draw => writeln!(out, "Draw!"),
        Verdict::PlayerA => writeln!(out, "Player 1 {} WINS", result.player_a),
        Verdict::PlayerB => writeln!(out, "Player 2 {} WINS", result.player_b),
    };
    out
}

/// Full match transcript: rounds, outcome log, coins and verdict
pub fn render_match(result: &MatchResult) -> String {
    let mut out = render_match_header(&result.player_a, &result.player_b);
    for (i, round) in result.rounds.iter().enumerate() {
        out.push_str(&render_round_header(i as u32 + 1));
        let _ = writeln!(out, "{}", render_round(&result.player_a, &result.player_b, round));
    }
    out.push_str(&render_match_footer(result));
    out
}

/// Writes the match transcript as it happens.
///
/// Observer hooks cannot fail, so the first write error is kept and
/// returned by [`Transcript::finish`]; nothing more is written after it.
pub struct Transcript<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: io::Write> Transcript<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            self.error = Some(err);
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }
}

impl<W: io::Write> MatchObserver for Transcript<W> {
    fn match_started(&mut self, player_a: &str, player_b: &str) {
        self.emit(&render_match_header(player_a, player_b));
    }

    fn round_started(&mut self, round: u32) {
        self.emit(&render_round_header(round));
    }

    fn round_played(&mut self, _: u32, player_a: &str, player_b: &str, result: &RoundResult) {
        self.emit(&format!("{}\n", render_round(player_a, player_b, result)));
    }

    fn match_finished(&mut self, result: &MatchResult) {
        self.emit(&render_match_footer(result));
    }
}

/// Final win table
pub fn render_standings(standings: &[Standing]) -> String {
    let mut out = String::from("\nTournament Results:\n");
    for standing in standings {
        let _ = writeln!(out, "{}: {} wins", standing.name, standing.wins);
    }
    out
}

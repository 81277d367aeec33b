//! Interactive players

use std::io::{self, BufRead, Write};

use crate::error::{ArenaError, Result};
use crate::strategy::Move;

/// Source of moves for an interactive agent
pub trait MovePrompt {
    /// Block until a valid move is supplied for `name`
    fn ask(&mut self, name: &str, opponent_history: &[Move]) -> Result<Move>;
}

/// Line-oriented prompt: writes a question, reads an answer.
///
/// Answers are trimmed and uppercased; anything other than `C` or `D`
/// re-prompts. End of input is the only way out without a move.
pub struct HumanPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MovePrompt for HumanPrompt<R, W> {
    fn ask(&mut self, name: &str, opponent_history: &[Move]) -> Result<Move> {
        if let Some(last) = opponent_history.last() {
            writeln!(self.output, "Opponent played {} last round", last)?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}, cooperate (C) or defect (D)? ", name)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ArenaError::InputClosed { name: name.to_string() });
            }

            match line.parse::<Move>() {
                Ok(chosen) => return Ok(chosen),
                Err(err) => log::warn!("{}: {}", name, err),
            }
        }
    }
}

/// Prompt bound to the process console.
///
/// Takes the stdin lock per question, so several console players can share
/// one terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsolePrompt;

impl MovePrompt for ConsolePrompt {
    fn ask(&mut self, name: &str, opponent_history: &[Move]) -> Result<Move> {
        HumanPrompt::new(io::stdin().lock(), io::stdout().lock()).ask(name, opponent_history)
    }
}

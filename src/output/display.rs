//! Terminal renderer

use super::Renderer;
use super::formatters::{format_board, format_row, solved_quip};
use crate::core::{GuessError, Score, SessionState};
use colored::Colorize;
use std::io::{self, Stdout, Write};

/// Line-based renderer writing colored text to any writer
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer, e.g. to inspect captured output
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "Wordie...".bright_cyan().bold())
    }

    fn reveal_secret(&mut self, secret: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            "DEBUG enabled, solution is:".bright_black(),
            secret
        )
    }

    fn board(&mut self, tiles: &[Option<char>]) -> io::Result<()> {
        writeln!(self.out, "{}", format_board(tiles))
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    fn scored(&mut self, score: &Score) -> io::Result<()> {
        writeln!(self.out, "{}", format_row(score))
    }

    fn rejected(&mut self, error: &GuessError) -> io::Result<()> {
        writeln!(self.out, "{} {error}", "error:".red().bold())
    }

    fn finished(&mut self, state: SessionState, secret: &str) -> io::Result<()> {
        match state {
            SessionState::Solved { guesses } => {
                writeln!(self.out, "{}", "SOLVED!".bright_green().bold())?;
                if let Some(quip) = solved_quip(guesses) {
                    writeln!(self.out, "{}", quip.bright_yellow())?;
                }
                writeln!(
                    self.out,
                    "Solved in {guesses} {}",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
            }
            SessionState::Exhausted => writeln!(
                self.out,
                "{} {}",
                "GAME OVER. The wordie was:".red().bold(),
                secret.bright_white().bold()
            ),
            SessionState::InProgress => Ok(()),
        }
    }
}

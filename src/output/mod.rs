//! Terminal output
//!
//! The `Renderer` seam the game loop draws through, plus the colored
//! terminal implementation.

pub mod display;
pub mod formatters;

pub use display::TerminalRenderer;

use crate::core::{GuessError, Score, SessionState};
use std::io;

/// Everything the game loop shows the player
pub trait Renderer {
    /// Title line printed once at start
    fn banner(&mut self) -> io::Result<()>;

    /// Debug mode only
    fn reveal_secret(&mut self, secret: &str) -> io::Result<()>;

    /// The pre-guess board, `None` for letters not yet placed
    fn board(&mut self, tiles: &[Option<char>]) -> io::Result<()>;

    fn prompt(&mut self) -> io::Result<()>;

    /// One scored guess
    fn scored(&mut self, score: &Score) -> io::Result<()>;

    /// A guess that was turned away without costing an attempt
    fn rejected(&mut self, error: &GuessError) -> io::Result<()>;

    /// End-of-game message; nothing for `InProgress`
    fn finished(&mut self, state: SessionState, secret: &str) -> io::Result<()>;
}

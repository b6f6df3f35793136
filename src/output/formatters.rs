//! Formatting utilities for terminal output

use crate::core::{Classification, Score, ScoredLetter};
use colored::{ColoredString, Colorize};

/// Placeholder drawn for a letter that has not been placed yet
pub const BLANK_TILE: char = '_';

/// Format the board as space-separated tiles, e.g. "_ l _ _ _"
#[must_use]
pub fn format_board(tiles: &[Option<char>]) -> String {
    tiles
        .iter()
        .map(|tile| tile.unwrap_or(BLANK_TILE).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one scored letter as a padded, colored cell
#[must_use]
pub fn format_tile(letter: &ScoredLetter) -> ColoredString {
    let cell = format!(" {} ", letter.value);
    let cell = cell.as_str();
    match letter.classification {
        Classification::Exact => cell.black().on_bright_green(),
        Classification::Present => cell.black().on_bright_yellow(),
        Classification::Absent => cell.bright_white(),
    }
}

/// Format a whole scored guess as one row of cells
#[must_use]
pub fn format_row(score: &Score) -> String {
    score
        .letters()
        .iter()
        .map(|letter| format_tile(letter).to_string())
        .collect()
}

/// Extra remark for a win in a memorable number of guesses
#[must_use]
pub const fn solved_quip(guesses: usize) -> Option<&'static str> {
    match guesses {
        3 => Some("GET OUTTA HERE FOURS!"),
        4 => Some("STUPID FOURS!"),
        _ => None,
    }
}

//! Word lists for the game
//!
//! Provides the embedded dictionary and the `WordSource` seam the Session
//! validates guesses through.

mod embedded;
mod list;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::WordList;

use thiserror::Error;

/// Failure to supply a secret word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("dictionary has no words of length {0}")]
    NoWordsOfLength(usize),
}

/// Supplier of secrets and judge of which guesses are real words
pub trait WordSource {
    /// Pick a secret word of `length` code points, uniformly at random
    ///
    /// # Errors
    /// Returns `WordListError::NoWordsOfLength` if no word qualifies.
    fn pick_secret(&self, length: usize) -> Result<String, WordListError>;

    /// Whether the normalized `word` is in the vocabulary
    fn contains(&self, word: &str) -> bool;
}

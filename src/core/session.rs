//! Game session state machine
//!
//! A Session owns the Pallet and the guess budget. Each accepted guess is
//! scored, its exact letters are revealed, and the session either keeps going,
//! becomes `Solved`, or becomes `Exhausted`. Rejected guesses change nothing.

use super::{GuessError, Pallet, PalletError, Score};
use crate::config::GameConfig;
use crate::wordlists::WordSource;
use tracing::{debug, info};

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Solved { guesses: usize },
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub score: Score,
    pub state: SessionState,
    pub attempts_used: usize,
}

/// Case-fold and strip surrounding whitespace, including the newline
///
/// Folding is per code point and never changes the letter count: a letter
/// whose lower case spans several code points (like 'İ') is kept as is.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().chars().map(fold_letter).collect()
}

fn fold_letter(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// One game against one secret word
pub struct Session<'a, S: WordSource + ?Sized> {
    secret: String,
    pallet: Pallet,
    attempts_used: usize,
    state: SessionState,
    config: GameConfig,
    vocabulary: &'a S,
}

impl<'a, S: WordSource + ?Sized> Session<'a, S> {
    /// Start a game for `secret`
    ///
    /// # Errors
    /// Returns `PalletError::InvalidWord` if `secret` is empty after normalizing.
    pub fn new(secret: &str, config: GameConfig, vocabulary: &'a S) -> Result<Self, PalletError> {
        // Guesses are normalized, so the secret must be too
        let secret = normalize(secret);
        let pallet = Pallet::new(&secret)?;

        debug!(
            word_length = pallet.len(),
            attempts = config.attempts_allowed.get(),
            vocabulary_check = config.vocabulary_check_enabled,
            "session started"
        );

        Ok(Self {
            secret,
            pallet,
            attempts_used: 0,
            state: SessionState::InProgress,
            config,
            vocabulary,
        })
    }

    /// Submit a raw guess
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the session is terminal
    /// - `GuessError::LengthMismatch` if the normalized guess has the wrong number of letters
    /// - `GuessError::UnknownWord` if vocabulary checking is on and the guess is not a word
    ///
    /// None of these consume an attempt.
    pub fn submit(&mut self, raw: &str) -> Result<Turn, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::GameOver);
        }

        let guess = normalize(raw);
        let letters: Vec<char> = guess.chars().collect();

        if letters.len() != self.pallet.len() {
            debug!(got = letters.len(), "guess rejected: length");
            return Err(GuessError::LengthMismatch {
                expected: self.pallet.len(),
                got: letters.len(),
            });
        }

        if self.config.vocabulary_check_enabled && !self.vocabulary.contains(&guess) {
            debug!(%guess, "guess rejected: not a word");
            return Err(GuessError::UnknownWord(guess));
        }

        self.attempts_used += 1;

        let score = Score::calculate(&self.pallet, &letters);
        for position in score.exact_positions() {
            self.pallet.reveal(position);
        }

        self.state = if self.pallet.is_solved() {
            info!(guesses = self.attempts_used, "solved");
            SessionState::Solved {
                guesses: self.attempts_used,
            }
        } else if self.attempts_used >= self.config.attempts_allowed.get() {
            info!(attempts = self.attempts_used, "attempts exhausted");
            SessionState::Exhausted
        } else {
            SessionState::InProgress
        };

        debug!(
            attempt = self.attempts_used,
            feedback = %score.to_emoji(),
            "guess scored"
        );

        Ok(Turn {
            score,
            state: self.state,
            attempts_used: self.attempts_used,
        })
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn pallet(&self) -> &Pallet {
        &self.pallet
    }

    /// Board view of the Pallet for renderers
    #[must_use]
    pub fn board(&self) -> Vec<Option<char>> {
        self.pallet.render()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.config
            .attempts_allowed
            .get()
            .saturating_sub(self.attempts_used)
    }
}

//! Game configuration
//!
//! Everything that used to be decided by peeking at the environment lives
//! here and is handed to the Session when it is built.

use std::num::NonZeroUsize;

/// Guess budget of a standard game
pub const DEFAULT_ATTEMPTS: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Length of the secret words picked for a standard game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Reject guesses that are not in the vocabulary
    pub vocabulary_check_enabled: bool,
    /// Print the secret before the first prompt
    pub reveal_secret_on_start: bool,
    pub attempts_allowed: NonZeroUsize,
    pub word_length: usize,
}

impl GameConfig {
    /// Debug mode: the secret is shown and any word of the right length is accepted
    #[must_use]
    pub const fn debug() -> Self {
        Self {
            vocabulary_check_enabled: false,
            reveal_secret_on_start: true,
            attempts_allowed: DEFAULT_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }

    /// Standard or debug settings depending on the toggle
    #[must_use]
    pub fn from_debug_toggle(enabled: bool) -> Self {
        if enabled { Self::debug() } else { Self::default() }
    }

    #[must_use]
    pub const fn with_attempts(mut self, attempts: NonZeroUsize) -> Self {
        self.attempts_allowed = attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vocabulary_check_enabled: true,
            reveal_secret_on_start: false,
            attempts_allowed: DEFAULT_ATTEMPTS,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}

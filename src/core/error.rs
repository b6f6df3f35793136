//! Error types for the game core

use thiserror::Error;

/// Failure to build a Pallet from the secret word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PalletError {
    #[error("empty word for pallet init")]
    InvalidWord,
}

/// A rejected guess. None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("bad length: {got}, use length: {expected}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("guess not found in dictionary: {0}")]
    UnknownWord(String),

    #[error("the game is already over")]
    GameOver,
}

impl GuessError {
    /// Whether the player may simply try again
    #[must_use]
    pub const fn is_mulligan(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::UnknownWord(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let err = GuessError::LengthMismatch {
            expected: 5,
            got: 3,
        };
        assert_eq!(err.to_string(), "bad length: 3, use length: 5");
    }

    #[test]
    fn mulligans() {
        assert!(GuessError::UnknownWord("zzzzz".into()).is_mulligan());
        assert!(
            GuessError::LengthMismatch {
                expected: 5,
                got: 0
            }
            .is_mulligan()
        );
        assert!(!GuessError::GameOver.is_mulligan());
    }
}

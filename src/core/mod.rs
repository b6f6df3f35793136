//! Core game types
//!
//! The Pallet records the secret word, `Score` classifies guesses against it,
//! and the Session drives one game from first guess to a terminal state.
//! Nothing here touches the terminal.

mod error;
mod pallet;
mod score;
mod session;

pub use error::{GuessError, PalletError};
pub use pallet::{Letter, Matches, Pallet};
pub use score::{Classification, Score, ScoredLetter};
pub use session::{Session, SessionState, Turn, normalize};

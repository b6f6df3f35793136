//! Wordie
//!
//! A terminal word-guessing game. Guesses are scored letter by letter against
//! a secret word, with duplicate letters credited no more often than they
//! occur in the secret.
//!
//! # Quick Start
//!
//! ```rust
//! use wordie::config::GameConfig;
//! use wordie::core::{Session, SessionState};
//! use wordie::wordlists::WordList;
//!
//! let words = WordList::new(["crane", "slate"]);
//! let mut session = Session::new("crane", GameConfig::default(), &words).unwrap();
//!
//! let turn = session.submit("slate").unwrap();
//! println!("{}", turn.score.to_emoji());
//!
//! let turn = session.submit("crane").unwrap();
//! assert_eq!(turn.state, SessionState::Solved { guesses: 2 });
//! ```

// Core domain types
pub mod core;

// Game settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging setup
pub mod logging;

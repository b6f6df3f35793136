//! Command implementations
//!
//! The interactive game loop driving a Session from player input.

mod play;

pub use play::run_game;

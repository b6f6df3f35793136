//! Wordie - CLI
//!
//! Plays one game of Wordie in the terminal. Set `DEBUG` to any non-empty
//! value to see the solution up front and skip the dictionary check.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::debug;
use wordie::{
    commands::run_game,
    config::GameConfig,
    core::Session,
    logging,
    output::TerminalRenderer,
    wordlists::{WordList, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordie",
    about = "Guess the secret word, one scored guess at a time",
    version,
    author
)]
struct Cli {
    /// Debug mode toggle; any non-empty value enables it
    #[arg(long, env = "DEBUG", hide = true)]
    debug: Option<String>,
}

impl Cli {
    fn debug_enabled(&self) -> bool {
        self.debug.as_deref().is_some_and(|value| !value.is_empty())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let config = GameConfig::from_debug_toggle(cli.debug_enabled());
    let words = WordList::embedded();
    debug!(words = words.len(), "dictionary loaded");

    let secret = words
        .pick_secret(config.word_length)
        .context("failed to pick a secret word")?;
    let mut session =
        Session::new(&secret, config, &words).context("failed to start the game")?;

    let mut renderer = TerminalRenderer::stdout();
    run_game(&mut session, io::stdin().lock(), &mut renderer).context("failed to draw the game")?;

    Ok(())
}

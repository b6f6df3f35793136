//! Interactive game loop
//!
//! Reads one guess per line, scores it through the Session and draws the
//! result, until the game reaches a terminal state or input runs out.

use crate::core::{Session, SessionState};
use crate::output::Renderer;
use crate::wordlists::WordSource;
use std::io::{self, BufRead};
use tracing::{info, warn};

/// Play one game to completion
///
/// Returns the final state. `InProgress` means input ended before the game did.
///
/// # Errors
///
/// Returns an error if the renderer fails to write. Input read failures are
/// not errors: they count as an empty guess.
pub fn run_game<S, I, R>(
    session: &mut Session<'_, S>,
    mut input: I,
    renderer: &mut R,
) -> io::Result<SessionState>
where
    S: WordSource + ?Sized,
    I: BufRead,
    R: Renderer,
{
    renderer.banner()?;
    if session.config().reveal_secret_on_start {
        renderer.reveal_secret(session.secret())?;
    }
    renderer.board(&session.board())?;

    while !session.state().is_terminal() {
        renderer.prompt()?;

        let Some(line) = read_guess(&mut input) else {
            info!(
                attempts = session.attempts_used(),
                "input closed before the game ended"
            );
            break;
        };

        match session.submit(&line) {
            Ok(turn) => renderer.scored(&turn.score)?,
            // Mulligan: nothing changed, ask again
            Err(err) => renderer.rejected(&err)?,
        }
    }

    renderer.finished(session.state(), session.secret())?;
    Ok(session.state())
}

/// Next line of input, `None` at end of input
fn read_guess(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(e) => {
            warn!(error = %e, "failed to read guess");
            Some(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::output::TerminalRenderer;
    use crate::wordlists::WordList;
    use std::io::{Cursor, Read};

    /// Reader that fails a fixed number of times, then reports end of input
    struct FlakyInput {
        failures_left: usize,
    }

    impl Read for FlakyInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let available = self.fill_buf()?.len();
            let n = available.min(buf.len());
            self.consume(n);
            Ok(n)
        }
    }

    impl BufRead for FlakyInput {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(io::Error::other("terminal went away"));
            }
            Ok(&[])
        }

        fn consume(&mut self, _amt: usize) {}
    }

    fn play(secret: &str, config: GameConfig, input: &str) -> (SessionState, usize, String) {
        colored::control::set_override(false);

        let words = WordList::new(["crane", "slate", "irate", "audio", "llama", "allow"]);
        let mut session = Session::new(secret, config, &words).unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new());

        let state = run_game(&mut session, Cursor::new(input), &mut renderer).unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();
        (state, session.attempts_used(), output)
    }

    #[test]
    fn solved_game_transcript() {
        let (state, attempts, output) = play("crane", GameConfig::default(), "slate\ncrane\n");

        assert_eq!(state, SessionState::Solved { guesses: 2 });
        assert_eq!(attempts, 2);
        assert_eq!(
            output,
            "Wordie...\n\
             _ _ _ _ _\n\
             >  s  l  a  t  e \n\
             >  c  r  a  n  e \n\
             SOLVED!\n\
             Solved in 2 guesses\n"
        );
    }

    #[test]
    fn mulligans_do_not_count() {
        let (state, attempts, output) = play(
            "crane",
            GameConfig::default(),
            "cr\nzzzzz\nCRANE\n",
        );

        assert_eq!(state, SessionState::Solved { guesses: 1 });
        assert_eq!(attempts, 1);
        assert!(output.contains("error: bad length: 2, use length: 5"));
        assert!(output.contains("error: guess not found in dictionary: zzzzz"));
    }

    #[test]
    fn exhausted_game_reveals_secret() {
        let input = "slate\nirate\naudio\nllama\nallow\ncrane\n";
        let (state, attempts, output) = play("crane", GameConfig::default(), input);

        assert_eq!(state, SessionState::Exhausted);
        assert_eq!(attempts, 5);
        assert!(output.ends_with("GAME OVER. The wordie was: crane\n"));
        // The sixth line is never read as a guess
        assert!(!output.contains("SOLVED!"));
    }

    #[test]
    fn solved_in_three_gets_quip() {
        let (_, _, output) = play("crane", GameConfig::default(), "slate\nirate\ncrane\n");
        assert!(output.contains("SOLVED!\nGET OUTTA HERE FOURS!\n"));
    }

    #[test]
    fn debug_mode_shows_secret_and_accepts_any_word() {
        let (state, attempts, output) = play("crane", GameConfig::debug(), "qqqqq\n");

        assert!(output.starts_with("Wordie...\nDEBUG enabled, solution is: crane\n"));
        assert_eq!(state, SessionState::InProgress);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn input_closed_leaves_game_in_progress() {
        let (state, attempts, output) = play("crane", GameConfig::default(), "slate\n");

        assert_eq!(state, SessionState::InProgress);
        assert_eq!(attempts, 1);
        assert!(!output.contains("GAME OVER"));
    }

    #[test]
    fn read_failures_count_as_empty_guesses() {
        colored::control::set_override(false);

        let words = WordList::new(["crane"]);
        let mut session = Session::new("crane", GameConfig::default(), &words).unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new());

        let state = run_game(
            &mut session,
            FlakyInput { failures_left: 3 },
            &mut renderer,
        )
        .unwrap();
        let output = String::from_utf8(renderer.into_inner()).unwrap();

        assert_eq!(state, SessionState::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(
            output.matches("> error: bad length: 0, use length: 5\n").count(),
            3
        );
    }
}

//! Interactive play loop.
//!
//! Reads one guess per line. A blank line moves on once a round is over,
//! and `quit` abandons the session.

use crate::render::{render_summary, render_view};
use anyhow::Result;
use money_hangman::{GameSession, Letter, PuzzleSource, SessionEnded, SessionSummary, SessionView};
use serde_json::json;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How views are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable screens, optionally colored.
    Text {
        /// Emit ANSI colors.
        color: bool,
    },
    /// One JSON object per line.
    Json,
}

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Next,
    Guess(Letter),
    Invalid(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    if trimmed.is_empty() {
        return Input::Next;
    }
    match trimmed.parse::<Letter>() {
        Ok(letter) => Input::Guess(letter),
        Err(e) => Input::Invalid(e.to_string()),
    }
}

struct Screen<W> {
    out: W,
    mode: OutputMode,
}

impl<W: Write> Screen<W> {
    fn view(&mut self, view: &SessionView) -> Result<()> {
        match self.mode {
            OutputMode::Text { color } => writeln!(self.out, "{}", render_view(view, color))?,
            OutputMode::Json => writeln!(self.out, "{}", serde_json::to_string(view)?)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        match self.mode {
            OutputMode::Text { .. } => writeln!(self.out, "{}", message)?,
            OutputMode::Json => writeln!(self.out, "{}", json!({ "notice": message }))?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn summary(&mut self, summary: &SessionSummary) -> Result<()> {
        match self.mode {
            OutputMode::Text { .. } => writeln!(self.out, "{}", render_summary(summary))?,
            OutputMode::Json => writeln!(self.out, "{}", json!({ "summary": summary }))?,
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Runs `session` against line-based input until the puzzles run out,
/// the player quits, or input ends.
#[instrument(skip_all, fields(mode = ?mode))]
pub fn run<S, R, W>(
    mut session: GameSession<S>,
    input: R,
    output: W,
    mode: OutputMode,
) -> Result<SessionSummary>
where
    S: PuzzleSource,
    R: BufRead,
    W: Write,
{
    let mut screen = Screen { out: output, mode };
    screen.view(&session.view()?)?;

    for line in input.lines() {
        let line = line?;
        debug!(%line, "Input received");

        let outcome: Result<SessionView, SessionEnded> = match parse_input(&line) {
            Input::Quit => {
                info!("Player quit");
                break;
            }
            Input::Next => {
                if session.current().is_some_and(|current| !current.is_terminal()) {
                    screen.notice("Type a letter to guess.")?;
                    continue;
                }
                session.advance()
            }
            Input::Guess(letter) => session.submit_guess(letter),
            Input::Invalid(message) => {
                warn!(%message, "Invalid input");
                screen.notice(&message)?;
                continue;
            }
        };

        match outcome {
            Ok(view) => screen.view(&view)?,
            Err(SessionEnded) => break,
        }
    }

    let summary = session.finish();
    screen.summary(&summary)?;
    Ok(summary)
}

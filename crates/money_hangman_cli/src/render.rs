//! Text rendering of session views.

use crossterm::style::Stylize;
use money_hangman::{Figure, GuessResult, Segment, SessionSummary, SessionView};
use tracing::instrument;

/// Draws `c` in red when `red` is set and colors are enabled.
fn paint(c: char, red: bool, color: bool) -> String {
    if red && color {
        c.to_string().red().to_string()
    } else {
        c.to_string()
    }
}

/// Draws the gallows and whichever body parts the figure shows.
///
/// Body parts turn red in the failure state; the noose is always red.
#[instrument(skip(figure))]
pub fn render_figure(figure: &Figure, color: bool) -> Vec<String> {
    let failed = figure.is_failure_state();
    let part = |segment: Segment, c: char| {
        if figure.shows(segment) {
            paint(c, segment == Segment::Noose || (failed && segment.is_body()), color)
        } else {
            " ".to_string()
        }
    };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  |   {}", part(Segment::Noose, '|')),
        format!("  |   {}", part(Segment::Head, 'O')),
        format!(
            "  |  {}{}{}",
            part(Segment::Hand1, '/'),
            part(Segment::Torso, '|'),
            part(Segment::Hand2, '\\')
        ),
        format!("  |   {}", part(Segment::Torso, '|')),
        format!("  |  {} {}", part(Segment::Leg1, '/'), part(Segment::Leg2, '\\')),
        "  |".to_string(),
        "=======".to_string(),
    ]
}

/// Feedback line for the latest guess.
pub fn result_message(result: GuessResult) -> &'static str {
    match result {
        GuessResult::Hit => "Correct!",
        GuessResult::Miss => "Not in the answer.",
        GuessResult::Won => "You solved it!",
        GuessResult::Lost => "Game Over!",
        GuessResult::DuplicateGuess => "You already tried that letter.",
        GuessResult::AlreadyTerminal => "This round is over.",
    }
}

fn spaced(text: impl IntoIterator<Item = char>) -> String {
    text.into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full text screen for a view.
#[instrument(skip(view))]
pub fn render_view(view: &SessionView, color: bool) -> String {
    let mut lines = vec![format!("Puzzle {}    XP {}", view.puzzle_number(), view.xp())];
    lines.extend(render_figure(&view.figure(), color));
    lines.push(String::new());
    lines.push(format!("Answer:  {}", spaced(view.masked_text().chars())));
    if let Some(hint) = view.hint() {
        lines.push(format!("Hint:    {}", hint));
    }

    lines.push(format!(
        "Misses:  {}  ({} left)",
        spaced(view.incorrect_letters().iter().map(|l| l.as_char())),
        view.remaining_attempts()
    ));

    if !view.available_letters().is_empty() {
        lines.push(format!(
            "Letters: {}",
            spaced(view.available_letters().iter().map(|l| l.as_char()))
        ));
    }

    if let Some(result) = view.last_result() {
        let message = result_message(*result);
        if *result == GuessResult::Lost && color {
            lines.push(message.red().bold().to_string());
        } else {
            lines.push(message.to_string());
        }
    }

    if let Some(answer) = view.answer() {
        lines.push(format!("The answer was {}.", answer));
        lines.push("Press Enter for the next puzzle.".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Closing line for a session.
pub fn render_summary(summary: &SessionSummary) -> String {
    format!(
        "Session over: {} won, {} lost, {} XP",
        summary.puzzles_won, summary.puzzles_lost, summary.xp
    )
}

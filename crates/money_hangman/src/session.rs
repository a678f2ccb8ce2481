//! Game session: a run of puzzles sharing one XP total.
//!
//! The session owns the active [`PuzzleState`] and the [`ScoreTracker`],
//! and hands the presentation layer a fresh [`SessionView`] after every
//! operation. Guesses are processed synchronously in submission order.

use crate::{
    Figure, GuessResult, Letter, MaskedCell, PuzzleSource, PuzzleState, PuzzleStatus, ScoreTracker,
    Segment, XpPolicy,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// No puzzles remain; control goes back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No more puzzles in this session")]
pub struct SessionEnded;

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// 1-based position of the current puzzle in the session.
    puzzle_number: usize,
    /// Answer with unguessed letters blanked.
    masked_answer: Vec<MaskedCell>,
    /// Masked answer as text.
    masked_text: String,
    /// Hint for the current puzzle.
    hint: Option<String>,
    /// Misses so far.
    incorrect_count: u8,
    /// Misses left.
    remaining_attempts: u8,
    /// Figure segments to draw.
    segments: BTreeSet<Segment>,
    /// Body segments should be drawn in the failure style.
    is_failure_state: bool,
    /// Session XP total.
    xp: u64,
    /// Round status.
    status: PuzzleStatus,
    /// Letters tried this round, in order.
    guessed_letters: Vec<Letter>,
    /// Tried letters missing from the answer, in order.
    incorrect_letters: Vec<Letter>,
    /// Letters that can still be guessed; empty once the round is over.
    available_letters: Vec<Letter>,
    /// Result of the most recent guess this round.
    last_result: Option<GuessResult>,
    /// Full answer, present once the round is over.
    answer: Option<String>,
    /// Rounds won so far.
    puzzles_won: u32,
    /// Rounds lost so far.
    puzzles_lost: u32,
}

impl SessionView {
    /// Rebuilds the figure this view describes.
    pub fn figure(&self) -> Figure {
        Figure::for_attempts(self.incorrect_count)
    }
}

/// Totals for a finished or abandoned session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Final XP.
    pub xp: u64,
    /// Puzzles started.
    pub puzzles_played: usize,
    /// Puzzles won.
    pub puzzles_won: u32,
    /// Puzzles lost.
    pub puzzles_lost: u32,
}

/// Plays puzzles from `S` in order, keeping score.
#[derive(Debug)]
pub struct GameSession<S> {
    source: S,
    policy: XpPolicy,
    current: Option<PuzzleState>,
    score: ScoreTracker,
    puzzle_number: usize,
    puzzles_won: u32,
    puzzles_lost: u32,
    last_result: Option<GuessResult>,
}

impl<S: PuzzleSource> GameSession<S> {
    /// Starts a session on the first puzzle from `source`.
    #[instrument(skip(source))]
    pub fn new(mut source: S, policy: XpPolicy) -> Result<Self, SessionEnded> {
        let first = source.next_puzzle().ok_or_else(|| {
            warn!("Puzzle source is empty");
            SessionEnded
        })?;

        info!(remaining = ?source.remaining(), "Session started");

        Ok(Self {
            source,
            policy,
            current: Some(PuzzleState::new(first)),
            score: ScoreTracker::new(),
            puzzle_number: 1,
            puzzles_won: 0,
            puzzles_lost: 0,
            last_result: None,
        })
    }

    /// Forwards a guess to the current puzzle and applies its XP delta.
    #[instrument(skip(self, letter), fields(letter = %letter, puzzle = self.puzzle_number))]
    pub fn submit_guess(&mut self, letter: Letter) -> Result<SessionView, SessionEnded> {
        let current = self.current.as_mut().ok_or(SessionEnded)?;
        let result = current.guess(letter);

        let xp = self.score.apply_result(&self.policy, result);
        match result {
            GuessResult::Won => self.puzzles_won += 1,
            GuessResult::Lost => self.puzzles_lost += 1,
            _ => {}
        }
        self.last_result = Some(result);

        info!(%result, xp, "Guess submitted");
        self.view()
    }

    /// Moves to the next puzzle once the current one is over.
    ///
    /// While the current puzzle is still in progress this returns its view
    /// unchanged. Once the session has ended it stays ended, even if the
    /// source would yield again.
    #[instrument(skip(self), fields(puzzle = self.puzzle_number))]
    pub fn advance(&mut self) -> Result<SessionView, SessionEnded> {
        let Some(current) = &self.current else {
            debug!("Advance requested after the session ended");
            return Err(SessionEnded);
        };

        if !current.is_terminal() {
            warn!("Advance requested before the puzzle ended");
            return self.view();
        }

        match self.source.next_puzzle() {
            Some(puzzle) => {
                self.current = Some(PuzzleState::new(puzzle));
                self.puzzle_number += 1;
                self.last_result = None;
                info!(puzzle = self.puzzle_number, "Advanced to next puzzle");
                self.view()
            }
            None => {
                self.current = None;
                self.last_result = None;
                info!(xp = self.score.xp(), "Session ended");
                Err(SessionEnded)
            }
        }
    }

    /// Snapshot of the current puzzle and score.
    #[instrument(skip(self))]
    pub fn view(&self) -> Result<SessionView, SessionEnded> {
        let current = self.current.as_ref().ok_or(SessionEnded)?;
        let figure = Figure::for_attempts(current.incorrect_count());
        let terminal = current.is_terminal();

        let available_letters = if terminal {
            Vec::new()
        } else {
            Letter::alphabet()
                .filter(|letter| !current.guessed_letters().contains(letter))
                .collect()
        };

        Ok(SessionView {
            puzzle_number: self.puzzle_number,
            masked_answer: current.masked_answer(),
            masked_text: current.masked_string(),
            hint: current.hint().map(str::to_string),
            incorrect_count: current.incorrect_count(),
            remaining_attempts: current.remaining_attempts(),
            is_failure_state: figure.is_failure_state(),
            segments: figure.segments().clone(),
            xp: self.score.xp(),
            status: current.status(),
            guessed_letters: current.guessed_letters().to_vec(),
            incorrect_letters: current.incorrect_letters(),
            available_letters,
            last_result: self.last_result,
            answer: terminal.then(|| current.puzzle().answer_text()),
            puzzles_won: self.puzzles_won,
            puzzles_lost: self.puzzles_lost,
        })
    }

    /// The active puzzle, if the session has not ended.
    pub fn current(&self) -> Option<&PuzzleState> {
        self.current.as_ref()
    }

    /// Session score.
    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    /// XP deltas in use.
    pub fn policy(&self) -> &XpPolicy {
        &self.policy
    }

    /// Returns true once the source is exhausted and the last puzzle left.
    pub fn is_ended(&self) -> bool {
        self.current.is_none()
    }

    /// Current totals.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            xp: self.score.xp(),
            puzzles_played: self.puzzle_number,
            puzzles_won: self.puzzles_won,
            puzzles_lost: self.puzzles_lost,
        }
    }

    /// Tears the session down, returning its totals.
    #[instrument(skip(self))]
    pub fn finish(self) -> SessionSummary {
        let summary = self.summary();
        info!(?summary, "Session finished");
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordBank;

    fn session(answers: &[&str]) -> GameSession<WordBank> {
        let bank = WordBank::from_entries(answers.iter().map(|a| (*a, None))).unwrap();
        GameSession::new(bank, XpPolicy::new(10, -5, 50, -20)).unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    /// Source that pauses once (yields `None`) before offering more puzzles.
    struct Intermittent(std::collections::VecDeque<Option<crate::Puzzle>>);

    impl PuzzleSource for Intermittent {
        fn next_puzzle(&mut self) -> Option<crate::Puzzle> {
            self.0.pop_front().flatten()
        }
    }

    #[test]
    fn test_empty_source_is_ended() {
        let result = GameSession::new(WordBank::default(), XpPolicy::new(10, -5, 50, -20));
        assert!(matches!(result, Err(SessionEnded)));
    }

    #[test]
    fn test_initial_view() {
        let view = session(&["SAVE"]).view().unwrap();
        assert_eq!(view.masked_text(), "____");
        assert_eq!(*view.puzzle_number(), 1);
        assert_eq!(view.segments(), &BTreeSet::from([Segment::Gallows]));
        assert_eq!(view.available_letters().len(), 26);
        assert_eq!(*view.last_result(), None);
        assert_eq!(*view.answer(), None);
    }

    #[test]
    fn test_guess_updates_xp_and_view() {
        let mut session = session(&["SAVE"]);
        let view = session.submit_guess(letter('s')).unwrap();
        assert_eq!(*view.xp(), 10);
        assert_eq!(view.masked_text(), "S___");
        assert_eq!(*view.last_result(), Some(GuessResult::Hit));
        assert!(!view.available_letters().contains(&letter('S')));

        let view = session.submit_guess(letter('q')).unwrap();
        assert_eq!(*view.xp(), 5);
        assert_eq!(*view.incorrect_count(), 1);
    }

    #[test]
    fn test_miss_at_zero_xp_stays_zero() {
        let mut session = session(&["SAVE"]);
        let view = session.submit_guess(letter('q')).unwrap();
        assert_eq!(*view.xp(), 0);
    }

    #[test]
    fn test_duplicate_guess_is_free() {
        let mut session = session(&["SAVE"]);
        session.submit_guess(letter('s')).unwrap();
        let view = session.submit_guess(letter('s')).unwrap();
        assert_eq!(*view.xp(), 10);
        assert_eq!(*view.last_result(), Some(GuessResult::DuplicateGuess));
    }

    #[test]
    fn test_advance_before_end_is_noop() {
        let mut session = session(&["SAVE", "TAX"]);
        session.submit_guess(letter('s')).unwrap();
        let view = session.advance().unwrap();
        assert_eq!(*view.puzzle_number(), 1);
        assert_eq!(view.masked_text(), "S___");
    }

    #[test]
    fn test_advance_moves_on_and_keeps_xp() {
        let mut session = session(&["AT", "TAX"]);
        session.submit_guess(letter('a')).unwrap();
        let view = session.submit_guess(letter('t')).unwrap();
        assert_eq!(*view.status(), PuzzleStatus::Won);
        assert_eq!(view.answer().as_deref(), Some("AT"));
        assert!(view.available_letters().is_empty());
        assert_eq!(*view.xp(), 60);

        let view = session.advance().unwrap();
        assert_eq!(*view.puzzle_number(), 2);
        assert_eq!(view.masked_text(), "___");
        assert_eq!(*view.xp(), 60);
        assert_eq!(*view.puzzles_won(), 1);
        assert_eq!(*view.last_result(), None);
    }

    #[test]
    fn test_session_ends_after_last_puzzle() {
        let mut session = session(&["A"]);
        session.submit_guess(letter('a')).unwrap();
        assert_eq!(session.advance(), Err(SessionEnded));
        assert!(session.is_ended());
        assert_eq!(session.submit_guess(letter('b')), Err(SessionEnded));
        assert_eq!(session.view(), Err(SessionEnded));

        let summary = session.finish();
        assert_eq!(summary.puzzles_played, 1);
        assert_eq!(summary.puzzles_won, 1);
        assert_eq!(summary.xp, 50);
    }

    #[test]
    fn test_view_lists_incorrect_letters() {
        let mut session = session(&["SAVE"]);
        session.submit_guess(letter('q')).unwrap();
        session.submit_guess(letter('s')).unwrap();
        let view = session.submit_guess(letter('z')).unwrap();
        assert_eq!(view.incorrect_letters(), &vec![letter('Q'), letter('Z')]);
        assert_eq!(view.guessed_letters().len(), 3);
    }

    #[test]
    fn test_ended_session_stays_ended() {
        let puzzle = |answer: &str| Some(crate::Puzzle::new(answer, None).unwrap());
        let source = Intermittent([puzzle("A"), None, puzzle("TAX")].into());
        let mut session = GameSession::new(source, XpPolicy::new(10, -5, 50, -20)).unwrap();

        session.submit_guess(letter('a')).unwrap();
        assert_eq!(session.advance(), Err(SessionEnded));
        assert_eq!(session.advance(), Err(SessionEnded));
        assert_eq!(session.advance(), Err(SessionEnded));

        assert!(session.is_ended());
        assert_eq!(session.view(), Err(SessionEnded));
        assert_eq!(session.summary().puzzles_played, 1);
    }
}

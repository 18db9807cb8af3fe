//! Per-session solver state.
//!
//! A [`SolverState`] is a value: every turn derives a new state from the
//! previous one instead of mutating it, so a ranking pass that is still
//! reading an older candidate set is never affected by pruning.

use std::sync::Arc;

use log::{debug, warn};

use crate::error::{InputError, PatternError, Result};
use crate::feedback::{classify, FeedbackPattern};
use crate::offload::ScoringRequest;
use crate::prune::prune;
use crate::rank::rank_parallel;
use crate::topk::Scored;
use crate::word::{check_uniform, Word};

/// Session-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub word_len: usize,
    pub top_n: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_len: 5,
            top_n: 10,
        }
    }
}

/// One played guess and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub observed: FeedbackPattern,
}

#[derive(Debug, Clone)]
pub struct SolverState {
    word_len: usize,
    all_words: Arc<[Word]>,
    possible_solutions: Arc<[Word]>,
    history: Vec<Turn>,
    top: Vec<Scored>,
}

impl SolverState {
    /// Start a session where every word of the vocabulary is a candidate.
    pub fn new(words: Vec<Word>, word_len: usize) -> std::result::Result<Self, InputError> {
        if words.is_empty() {
            return Err(InputError::EmptyVocabulary);
        }
        check_uniform(&words, word_len)?;
        let all_words: Arc<[Word]> = words.into();
        Ok(Self {
            word_len,
            possible_solutions: Arc::clone(&all_words),
            all_words,
            history: Vec::new(),
            top: Vec::new(),
        })
    }

    /// Start a session with a separate candidate-solution list.
    pub fn with_solutions(
        words: Vec<Word>,
        solutions: Vec<Word>,
        word_len: usize,
    ) -> std::result::Result<Self, InputError> {
        let mut state = Self::new(words, word_len)?;
        check_uniform(&solutions, word_len)?;
        state.possible_solutions = solutions.into();
        Ok(state)
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    pub fn possible_solutions(&self) -> &[Word] {
        &self.possible_solutions
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Latest recommendations, highest entropy first.
    pub fn top(&self) -> &[Scored] {
        &self.top
    }

    /// 1-based number of the turn about to be played.
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    pub fn remaining_count(&self) -> usize {
        self.possible_solutions.len()
    }

    pub fn is_candidate(&self, word: &Word) -> bool {
        self.possible_solutions.contains(word)
    }

    /// The last observed pattern was all correct.
    pub fn is_solved(&self) -> bool {
        self.history.last().is_some_and(|t| t.observed.is_win())
    }

    /// No candidate is consistent with the observed feedback.
    pub fn is_degenerate(&self) -> bool {
        self.possible_solutions.is_empty()
    }

    /// Record `guess` and its observed feedback, narrowing the candidates.
    ///
    /// The returned state has no recommendations until a new ranking is
    /// merged with [`SolverState::with_top`].
    pub fn apply_turn(&self, guess: &Word, observed: FeedbackPattern) -> Result<Self> {
        guess.expect_len(self.word_len)?;
        if observed.word_len() != self.word_len {
            return Err(PatternError::WrongLength {
                expected: self.word_len,
                found: observed.word_len(),
            }
            .into());
        }

        let possible_solutions: Arc<[Word]> =
            prune(&self.possible_solutions, guess, observed).into();
        debug!(
            "{} {}: {} -> {} candidates",
            guess,
            observed.to_symbols(),
            self.possible_solutions.len(),
            possible_solutions.len()
        );
        if possible_solutions.is_empty() {
            warn!("no candidate is consistent with the feedback so far");
        }

        let mut history = self.history.clone();
        history.push(Turn {
            guess: guess.clone(),
            observed,
        });

        Ok(Self {
            word_len: self.word_len,
            all_words: Arc::clone(&self.all_words),
            possible_solutions,
            history,
            top: Vec::new(),
        })
    }

    /// Merge a finished ranking into the state.
    pub fn with_top(self, top: Vec<Scored>) -> Self {
        Self { top, ..self }
    }

    /// Request for ranking the current candidates off-thread.
    pub fn scoring_request(&self, top_n: usize) -> ScoringRequest {
        ScoringRequest {
            all_words: Arc::clone(&self.all_words),
            possible_solutions: Arc::clone(&self.possible_solutions),
            word_len: self.word_len,
            top_n,
        }
    }

    /// Rank the vocabulary against the current candidates on this thread.
    pub fn compute_top(&self, top_n: usize) -> Result<Vec<Scored>> {
        Ok(rank_parallel(
            &self.all_words,
            &self.possible_solutions,
            self.word_len,
            top_n,
        )?)
    }

    /// [`SolverState::apply_turn`] followed by a fresh ranking.
    pub fn advance(&self, guess: &Word, observed: FeedbackPattern, top_n: usize) -> Result<Self> {
        let next = self.apply_turn(guess, observed)?;
        let top = next.compute_top(top_n)?;
        Ok(next.with_top(top))
    }

    /// Pick the guess to play from the current ranking: among the guesses
    /// tied for the highest entropy, prefer one that could be the answer.
    /// With one or two candidates left, just play a candidate.
    pub fn best_guess(&self) -> Option<Word> {
        if self.possible_solutions.len() <= 2 {
            return self.possible_solutions.first().cloned();
        }
        let best = self.top.first()?;
        let pick = self
            .top
            .iter()
            .take_while(|s| (best.entropy - s.entropy).abs() < 1e-12)
            .find(|s| self.is_candidate(&s.guess))
            .unwrap_or(best);
        Some(pick.guess.clone())
    }
}

/// Play against a known `target` until it is found, no candidate remains, or
/// `max_turns` guesses have been made. Returns the final state; its history
/// is the game.
pub fn solve_for_target(
    state: SolverState,
    target: &Word,
    top_n: usize,
    max_turns: usize,
) -> Result<SolverState> {
    target.expect_len(state.word_len())?;
    let top_n = top_n.max(1);

    let mut state = if state.top().is_empty() {
        let top = state.compute_top(top_n)?;
        state.with_top(top)
    } else {
        state
    };

    while state.history().len() < max_turns && !state.is_solved() && !state.is_degenerate() {
        let Some(guess) = state.best_guess() else {
            break;
        };
        let observed = classify(&guess, target)?;
        state = if observed.is_win() {
            state.apply_turn(&guess, observed)?
        } else {
            state.advance(&guess, observed, top_n)?
        };
    }
    Ok(state)
}

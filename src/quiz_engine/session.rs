//! Player progress through one quiz, as an immutable value.
//!
//! Every command consumes the current [`QuizState`] and returns the next one;
//! nothing is mutated in place. [`QuizController`](super::controller::QuizController)
//! drives the loading transitions and publishes each new state.
//!
//! ```text
//!  Idle ──begin_loading──▶ Loading ──finish_loading──▶ Active ──answer…──▶ Complete
//!   ▲                        │                          (or Idle when no
//!   └──────fail_loading──────┘                           questions were built)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{models::QuizQuestion, outcome::QuizOutcome};

/// Coarse state derived from the flags, in the precedence the results,
/// loading and question screens are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Idle,
    Loading,
    Active,
    Complete,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizPhase::Idle     => write!(f, "Idle"),
            QuizPhase::Loading  => write!(f, "Loading"),
            QuizPhase::Active   => write!(f, "Active"),
            QuizPhase::Complete => write!(f, "Complete"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    is_loading: bool,
    has_error: bool,
    is_complete: bool,
}

impl QuizState {
    pub fn new() -> Self {
        QuizState::default()
    }

    /// A state that is already answering `questions`; handy for tests and
    /// for callers that generate questions themselves.
    pub fn with_questions(questions: Vec<QuizQuestion>) -> Self {
        QuizState::new().begin_loading().finish_loading(questions)
    }

    // ── read-only views ──────────────────────────────────────────────────────

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// `None` before loading, after the last answer, or for an empty quiz.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// 1-based position for "Question 3 of 10" style labels.
    pub fn question_number(&self) -> Option<usize> {
        self.current_question().map(|_| self.current_index + 1)
    }

    pub fn phase(&self) -> QuizPhase {
        if self.is_complete {
            QuizPhase::Complete
        } else if self.is_loading {
            QuizPhase::Loading
        } else if !self.questions.is_empty() {
            QuizPhase::Active
        } else {
            QuizPhase::Idle
        }
    }

    /// Final score, available only once every question has been answered.
    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.is_complete.then(|| QuizOutcome::new(self.score, self.questions.len()))
    }

    // ── transitions ──────────────────────────────────────────────────────────

    /// A fetch has started: raise the loading flag and clear any stale error.
    pub fn begin_loading(self) -> Self {
        QuizState { is_loading: true, has_error: false, ..self }
    }

    /// The fetch succeeded and `questions` were generated from it.
    ///
    /// An empty list is accepted; the state then reads as `Idle` again.
    pub fn finish_loading(self, questions: Vec<QuizQuestion>) -> Self {
        QuizState {
            questions,
            current_index: 0,
            score: 0,
            is_loading: false,
            has_error: false,
            is_complete: false,
        }
    }

    /// The fetch failed. Progress already recorded is left alone.
    pub fn fail_loading(self) -> Self {
        QuizState { is_loading: false, has_error: true, ..self }
    }

    /// Submit `choice` for the current question.
    ///
    /// Exact string comparison against the correct answer; a match adds one
    /// point. The index always advances, and reaching the end completes the
    /// quiz. Without a current question (loading, complete, or empty) this
    /// returns the state unchanged.
    pub fn answer(self, choice: &str) -> Self {
        if self.is_loading {
            return self;
        }
        let Some(question) = self.current_question() else {
            tracing::debug!(phase = %self.phase(), "answer ignored: no current question");
            return self;
        };

        let score = self.score + usize::from(question.is_correct(choice));
        let current_index = self.current_index + 1;
        let is_complete = current_index == self.questions.len();

        QuizState { score, current_index, is_complete, ..self }
    }

    /// Drop the question list and all progress, and start loading a fresh
    /// quiz.
    pub fn reset(self) -> Self {
        QuizState::new().begin_loading()
    }
}

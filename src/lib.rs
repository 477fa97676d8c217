//! # quizzard
//!
//! A wizarding-world trivia engine: turns fetched characters and spells into
//! a short, shuffled multiple-choice quiz and tracks one player through it.
//!
//! ## How it works
//!
//! 1. A [`QuizDataSource`] supplies the raw characters and spells
//!    ([`HpApiClient`] for the public API, [`InMemorySource`] offline).
//! 2. [`generate_questions`] runs four rounds over the house, actor, patronus
//!    and spell builders, shuffles everything it managed to build and keeps at
//!    most ten. Categories the data cannot support are skipped silently.
//! 3. [`QuizController`] owns the resulting [`QuizState`] and applies
//!    `start`, `answer` and `reset`, publishing each new state on a
//!    `tokio::sync::watch` channel for the UI to render.
//!
//! ## Quick start
//!
//! ```rust
//! use quizzard::{generate_quiz, Character, QuizRequest, QuizState, Spell};
//!
//! let characters = vec![
//!     Character::new("Harry Potter").with_house("Gryffindor"),
//!     Character::new("Draco Malfoy").with_house("Slytherin"),
//! ];
//! let spells = vec![Spell::new("1", "Lumos", "Lights the wand tip")];
//!
//! // Same seed, same quiz.
//! let questions = generate_quiz(QuizRequest::new(characters, spells).with_seed(7));
//! assert!(!questions.is_empty());
//!
//! let mut state = QuizState::with_questions(questions);
//! while let Some(q) = state.current_question() {
//!     let pick = q.options[0].clone();
//!     state = state.answer(&pick);
//! }
//! let outcome = state.outcome().unwrap();
//! println!("{outcome} ({}%, {})", outcome.percentage(), outcome.grade());
//! ```

#![forbid(unsafe_code)]

pub mod quiz_engine;

pub use quiz_engine::{
    generate_questions, generate_quiz, Character, FetchError, Grade, House, HpApiClient,
    HpApiConfig, InMemorySource, QuestionCategory, QuizConfig, QuizController, QuizDataSource,
    QuizOutcome, QuizPhase, QuizQuestion, QuizRequest, QuizState, Spell,
};

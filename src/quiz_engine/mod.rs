//! Core quiz engine: question generation and the session state machine.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Entities (characters, spells), houses, categories, questions |
//! | `shuffle`    | Fisher-Yates shuffle, uniform pick, sampling without replacement |
//! | `categories` | One question builder per category (house, actor, patronus, spell) |
//! | `generator`  | `generate_questions()` rounds, shuffle and cap; `generate_quiz()` |
//! | `config`     | Quiz shape and API base URL |
//! | `session`    | Immutable `QuizState` and its transitions |
//! | `controller` | Async driver that loads data and publishes state changes |
//! | `source`     | `QuizDataSource` trait, in-memory and HTTP implementations |
//! | `outcome`    | Percentage and grade of a finished quiz |
//! | `error`      | `FetchError` |

pub mod categories;
pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod models;
pub mod outcome;
pub mod session;
pub mod shuffle;
pub mod source;

pub use config::{HpApiConfig, QuizConfig};
pub use controller::QuizController;
pub use error::FetchError;
pub use generator::{generate_questions, generate_quiz, QuizRequest};
pub use models::{Character, House, QuestionCategory, QuizQuestion, Spell};
pub use outcome::{Grade, QuizOutcome};
pub use session::{QuizPhase, QuizState};
pub use source::{HpApiClient, InMemorySource, QuizDataSource};

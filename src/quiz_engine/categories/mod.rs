//! One question builder per category.
//!
//! Every builder follows the same signature:
//!
//! ```ignore
//! pub fn build<R: Rng>(rng: &mut R, entities: &[Entity]) -> Option<QuizQuestion>
//! ```
//!
//! and returns `None` when the input cannot support a question (too few
//! eligible records or distractors). Callers skip the category for that
//! round; nothing is retried or padded.

use rand::Rng;

use crate::quiz_engine::{
    models::{QuestionCategory, QuizQuestion},
    shuffle::{sample, shuffle},
};

/// Fixed set of four house names as options.
pub mod house;
/// Actor and patronus: distinct values sampled from other characters.
pub mod character_field;
/// Spell descriptions sampled from other spells.
pub mod spell;

/// Distractors per question (options minus the correct answer).
pub const DISTRACTOR_COUNT: usize = 3;

/// Minimum eligible records for the sampled categories (actor, patronus, spell).
pub const MIN_ELIGIBLE: usize = 4;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Sample the distractors from `pool`, mix in the correct answer and shuffle.
///
/// Returns `None` if `pool` has fewer than [`DISTRACTOR_COUNT`] entries.
pub(crate) fn with_sampled_distractors<R: Rng>(
    rng: &mut R,
    prompt: String,
    correct: &str,
    pool: &[String],
    category: QuestionCategory,
) -> Option<QuizQuestion> {
    if pool.len() < DISTRACTOR_COUNT {
        tracing::trace!(%category, pool = pool.len(), "not enough distractors");
        return None;
    }
    let mut options = sample(rng, pool, DISTRACTOR_COUNT);
    options.push(correct.to_string());
    Some(QuizQuestion {
        prompt,
        options: shuffle(rng, &options),
        correct_answer: correct.to_string(),
        category,
    })
}

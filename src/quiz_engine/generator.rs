use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    categories,
    config::QuizConfig,
    models::{Character, QuestionCategory, QuizQuestion, Spell},
    shuffle::shuffle_in_place,
};

/// Input for [`generate_quiz`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    pub characters: Vec<Character>,
    pub spells: Vec<Spell>,
    /// `Some(seed)` reproduces the same quiz for the same entities.
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub config: QuizConfig,
}

impl QuizRequest {
    pub fn new(characters: Vec<Character>, spells: Vec<Spell>) -> Self {
        QuizRequest { characters, spells, ..QuizRequest::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Build a quiz with an entropy-seeded or explicitly seeded RNG.
pub fn generate_quiz(request: QuizRequest) -> Vec<QuizQuestion> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_questions(&mut rng, &request.characters, &request.spells, request.config)
}

/// Core generation: `config.rounds` passes over every category in
/// [`QuestionCategory::ROUND_ORDER`], then a full shuffle and a cut to
/// `config.quiz_length`.
///
/// Categories that cannot be built are skipped silently, so the result may
/// be shorter than `quiz_length` or empty. It never panics on thin data.
pub fn generate_questions<R: Rng>(
    rng: &mut R,
    characters: &[Character],
    spells: &[Spell],
    config: QuizConfig,
) -> Vec<QuizQuestion> {
    let mut questions = Vec::with_capacity(config.rounds * QuestionCategory::ROUND_ORDER.len());

    for _ in 0..config.rounds {
        for category in QuestionCategory::ROUND_ORDER {
            let built = match category {
                QuestionCategory::House    => categories::house::build(rng, characters),
                QuestionCategory::Actor    => categories::character_field::build_actor(rng, characters),
                QuestionCategory::Patronus => categories::character_field::build_patronus(rng, characters),
                QuestionCategory::Spell    => categories::spell::build(rng, spells),
            };
            questions.extend(built);
        }
    }

    let generated = questions.len();
    shuffle_in_place(rng, &mut questions);
    questions.truncate(config.quiz_length);

    tracing::debug!(generated, kept = questions.len(), "generated quiz questions");
    questions
}

use std::collections::HashSet;

use rand::Rng;

use crate::quiz_engine::{
    models::{Character, QuestionCategory, QuizQuestion},
    shuffle::pick_random,
};

use super::{is_blank, with_sampled_distractors, MIN_ELIGIBLE};

/// "Who plays X in the movies?"
pub fn build_actor<R: Rng>(rng: &mut R, characters: &[Character]) -> Option<QuizQuestion> {
    build(rng, characters, QuestionCategory::Actor, |c| c.actor.as_deref(), |name| {
        format!("Who plays {name} in the movies?")
    })
}

/// "What is X's patronus?"
pub fn build_patronus<R: Rng>(rng: &mut R, characters: &[Character]) -> Option<QuizQuestion> {
    build(rng, characters, QuestionCategory::Patronus, |c| c.patronus.as_deref(), |name| {
        format!("What is {name}'s patronus?")
    })
}

/// Shared shape of the actor and patronus questions.
///
/// Needs at least [`MIN_ELIGIBLE`] characters with a non-blank field and
/// enough *distinct* other values for the distractors. Values are compared
/// as stored, so duplicates collapse before sampling and the correct value is
/// never offered twice.
fn build<R, F, P>(
    rng: &mut R,
    characters: &[Character],
    category: QuestionCategory,
    field: F,
    prompt: P,
) -> Option<QuizQuestion>
where
    R: Rng,
    F: Fn(&Character) -> Option<&str>,
    P: Fn(&str) -> String,
{
    let eligible: Vec<(&Character, &str)> = characters
        .iter()
        .filter_map(|c| field(c).filter(|v| !is_blank(v)).map(|v| (c, v)))
        .collect();

    if eligible.len() < MIN_ELIGIBLE {
        tracing::trace!(%category, eligible = eligible.len(), "too few eligible characters");
        return None;
    }

    let &(subject, correct) = pick_random(rng, &eligible)?;

    // First-seen order keeps the pool stable for a given input and seed.
    let mut seen = HashSet::new();
    let others: Vec<String> = eligible
        .iter()
        .map(|&(_, v)| v)
        .filter(|&v| v != correct && seen.insert(v))
        .map(str::to_string)
        .collect();

    with_sampled_distractors(rng, prompt(&subject.name), correct, &others, category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cast(actors: &[&str]) -> Vec<Character> {
        actors
            .iter()
            .enumerate()
            .map(|(i, a)| Character::new(format!("Character {i}")).with_actor(*a))
            .collect()
    }

    #[test]
    fn actor_question_has_four_distinct_options() {
        let characters = cast(&["A", "B", "C", "D", "E", "F"]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = build_actor(&mut rng, &characters).unwrap();
            assert_eq!(q.options.len(), 4);
            let unique: HashSet<_> = q.options.iter().collect();
            assert_eq!(unique.len(), 4, "duplicate option for seed={seed}");
            assert!(q.options.contains(&q.correct_answer));
            assert_eq!(q.category, QuestionCategory::Actor);
        }
    }

    #[test]
    fn prompt_names_the_character_who_owns_the_answer() {
        let characters = cast(&["A", "B", "C", "D"]);
        let mut rng = StdRng::seed_from_u64(3);
        let q = build_actor(&mut rng, &characters).unwrap();
        let owner = characters
            .iter()
            .find(|c| c.actor.as_deref() == Some(q.correct_answer.as_str()))
            .unwrap();
        assert_eq!(q.prompt, format!("Who plays {} in the movies?", owner.name));
    }

    #[test]
    fn fewer_than_four_eligible_characters_yield_nothing() {
        let mut characters = cast(&["A", "B", "C"]);
        characters.push(Character::new("Blank").with_actor("   "));
        characters.push(Character::new("Missing"));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_actor(&mut rng, &characters).is_none());
    }

    #[test]
    fn duplicate_values_collapse_before_the_distractor_check() {
        // Four eligible characters but only three distinct actors: whichever
        // subject is picked, at most two distinct other actors remain.
        let characters = cast(&["A", "A", "B", "C"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(build_actor(&mut rng, &characters).is_none(), "seed={seed}");
        }
    }

    #[test]
    fn patronus_question_uses_patronus_field() {
        let characters: Vec<Character> = ["Stag", "Otter", "Hare", "Doe", "Cat"]
            .iter()
            .enumerate()
            .map(|(i, p)| Character::new(format!("Wizard {i}")).with_patronus(*p))
            .collect();
        let mut rng = StdRng::seed_from_u64(11);
        let q = build_patronus(&mut rng, &characters).unwrap();
        assert_eq!(q.category, QuestionCategory::Patronus);
        assert!(q.prompt.ends_with("'s patronus?"));
        assert!(q.options.iter().all(|o| characters.iter().any(|c| c.patronus.as_ref() == Some(o))));
    }
}

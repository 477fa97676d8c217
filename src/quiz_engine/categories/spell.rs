use rand::Rng;

use crate::quiz_engine::{
    models::{QuestionCategory, QuizQuestion, Spell},
    shuffle::pick_random,
};

use super::{is_blank, with_sampled_distractors, MIN_ELIGIBLE};

/// "What does the spell X do?"
///
/// Distractors are the descriptions of every *other* spell by id. Unlike the
/// character builders the pool is not de-duplicated by text, so a description
/// shared by two spells can show up as both the answer and a distractor.
pub fn build<R: Rng>(rng: &mut R, spells: &[Spell]) -> Option<QuizQuestion> {
    let eligible: Vec<(&Spell, &str)> = spells
        .iter()
        .filter(|s| !s.name.is_empty())
        .filter_map(|s| s.description.as_deref().filter(|d| !is_blank(d)).map(|d| (s, d)))
        .collect();

    if eligible.len() < MIN_ELIGIBLE {
        tracing::trace!(eligible = eligible.len(), "too few spells with descriptions");
        return None;
    }

    let &(subject, correct) = pick_random(rng, &eligible)?;

    let others: Vec<String> = eligible
        .iter()
        .filter(|(s, _)| s.id != subject.id)
        .map(|&(_, d)| d.to_string())
        .collect();

    with_sampled_distractors(
        rng,
        format!("What does the spell \"{}\" do?", subject.name),
        correct,
        &others,
        QuestionCategory::Spell,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn spellbook(n: usize) -> Vec<Spell> {
        (0..n)
            .map(|i| Spell::new(format!("id-{i}"), format!("Spell {i}"), format!("Effect {i}")))
            .collect()
    }

    #[test]
    fn spell_question_pairs_name_with_its_description() {
        let spells = spellbook(6);
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = build(&mut rng, &spells).unwrap();
            let subject = spells
                .iter()
                .find(|s| s.description.as_deref() == Some(q.correct_answer.as_str()))
                .unwrap();
            assert_eq!(q.prompt, format!("What does the spell \"{}\" do?", subject.name));
            let unique: HashSet<_> = q.options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn blank_descriptions_and_nameless_spells_are_ineligible() {
        let mut spells = spellbook(3);
        spells.push(Spell::new("id-x", "Blank", "  "));
        spells.push(Spell { id: "id-y".into(), name: "Missing".into(), description: None });
        spells.push(Spell::new("id-z", "", "Has no name"));
        let mut rng = StdRng::seed_from_u64(5);
        assert!(build(&mut rng, &spells).is_none());
    }

    #[test]
    fn exactly_four_spells_use_all_other_descriptions() {
        let spells = spellbook(4);
        let mut rng = StdRng::seed_from_u64(8);
        let q = build(&mut rng, &spells).unwrap();
        let mut options = q.options.clone();
        options.sort();
        assert_eq!(options, vec!["Effect 0", "Effect 1", "Effect 2", "Effect 3"]);
    }
}

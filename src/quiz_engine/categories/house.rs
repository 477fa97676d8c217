use rand::Rng;

use crate::quiz_engine::{
    models::{Character, House, QuestionCategory, QuizQuestion},
    shuffle::{pick_random, shuffle},
};

/// "Which house is X in?"
///
/// Eligible characters carry one of the four canonical house names. The
/// options are always all four houses, shuffled, so no sampling is needed.
pub fn build<R: Rng>(rng: &mut R, characters: &[Character]) -> Option<QuizQuestion> {
    let eligible: Vec<(&Character, House)> = characters
        .iter()
        .filter_map(|c| c.house.as_deref().and_then(House::from_name).map(|h| (c, h)))
        .collect();

    let Some(&(subject, house)) = pick_random(rng, &eligible) else {
        tracing::trace!("no character with a known house");
        return None;
    };

    let names: Vec<String> = House::ALL.iter().map(|h| h.name().to_string()).collect();

    Some(QuizQuestion {
        prompt: format!("Which house is {} in?", subject.name),
        options: shuffle(rng, &names),
        correct_answer: house.name().to_string(),
        category: QuestionCategory::House,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    #[test]
    fn options_are_the_four_houses_and_answer_matches_subject() {
        let characters = vec![
            Character::new("Luna Lovegood").with_house("Ravenclaw"),
            Character::new("Argus Filch"),
        ];
        let mut rng = StepRng::new(0, 0);
        let q = build(&mut rng, &characters).unwrap();

        let options: HashSet<&str> = q.options.iter().map(String::as_str).collect();
        let houses: HashSet<&str> = House::ALL.iter().map(|h| h.name()).collect();
        assert_eq!(options, houses);
        assert_eq!(q.correct_answer, "Ravenclaw");
        assert_eq!(q.prompt, "Which house is Luna Lovegood in?");
    }

    #[test]
    fn unknown_or_blank_houses_are_ineligible() {
        let characters = vec![
            Character::new("Muggle").with_house(""),
            Character::new("Durmstrang student").with_house("Durmstrang"),
            Character::new("Lowercase").with_house("gryffindor"),
            Character::new("Nobody"),
        ];
        let mut rng = StepRng::new(0, 0);
        assert!(build(&mut rng, &characters).is_none());
    }
}

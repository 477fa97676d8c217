use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Source entities
// ---------------------------------------------------------------------------

/// A character record as served by the data source.
///
/// Optional fields may be missing or blank; a blank field simply makes the
/// character ineligible for the matching question category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub patronus: Option<String>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Character { name: name.into(), ..Character::default() }
    }

    pub fn with_house(mut self, house: impl Into<String>) -> Self {
        self.house = Some(house.into());
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_patronus(mut self, patronus: impl Into<String>) -> Self {
        self.patronus = Some(patronus.into());
        self
    }
}

/// A spell record as served by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spell {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Spell {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Spell {
            id: id.into(),
            name: name.into(),
            description: Some(description.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Houses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}

impl House {
    /// The four canonical houses, in the order used for option lists
    /// before shuffling.
    pub const ALL: [House; 4] = [
        House::Gryffindor,
        House::Hufflepuff,
        House::Ravenclaw,
        House::Slytherin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            House::Gryffindor => "Gryffindor",
            House::Hufflepuff => "Hufflepuff",
            House::Ravenclaw  => "Ravenclaw",
            House::Slytherin  => "Slytherin",
        }
    }

    /// Exact, case-sensitive match against the canonical names.
    pub fn from_name(name: &str) -> Option<House> {
        House::ALL.into_iter().find(|h| h.name() == name)
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    House,
    Actor,
    Patronus,
    Spell,
}

impl QuestionCategory {
    /// Categories in the fixed order each generation round attempts them.
    pub const ROUND_ORDER: [QuestionCategory; 4] = [
        QuestionCategory::House,
        QuestionCategory::Actor,
        QuestionCategory::Patronus,
        QuestionCategory::Spell,
    ];
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuestionCategory::House    => "house",
            QuestionCategory::Actor    => "actor",
            QuestionCategory::Patronus => "patronus",
            QuestionCategory::Spell    => "spell",
        };
        write!(f, "{}", s)
    }
}

/// Number of answer options on every question.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question.
///
/// Builders guarantee `options.len() == OPTION_COUNT` and that
/// `correct_answer` is one of `options`. Options are pairwise distinct except
/// for the spell category, whose distractor pool is not de-duplicated by text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub category: QuestionCategory,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result-screen rating, by percentage of correct answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Troll,
    Poor,
    Acceptable,
    ExceedsExpectations,
    Outstanding,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Grade {
        match percentage {
            90.. => Grade::Outstanding,
            70.. => Grade::ExceedsExpectations,
            50.. => Grade::Acceptable,
            30.. => Grade::Poor,
            _    => Grade::Troll,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::Outstanding         => "Outstanding",
            Grade::ExceedsExpectations => "Exceeds Expectations",
            Grade::Acceptable          => "Acceptable",
            Grade::Poor                => "Poor",
            Grade::Troll               => "Troll",
        };
        write!(f, "{}", s)
    }
}

/// Final score of a completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

impl QuizOutcome {
    pub fn new(score: usize, total: usize) -> Self {
        QuizOutcome { score, total }
    }

    /// Rounded to the nearest whole percent (halves round up); 0 for an
    /// empty quiz.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.score as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

impl fmt::Display for QuizOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

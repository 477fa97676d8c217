use std::env;

use serde::{Deserialize, Serialize};

/// Default number of generation rounds.
pub const DEFAULT_ROUNDS: usize = 4;
/// Default cap on questions per quiz.
pub const DEFAULT_QUIZ_LENGTH: usize = 10;
/// Public Harry Potter API.
pub const DEFAULT_API_BASE_URL: &str = "https://hp-api.onrender.com/api";

/// Shape of a generated quiz.
///
/// Each round attempts one question per category, so the accumulator holds
/// at most `rounds * 4` questions before it is shuffled and cut to
/// `quiz_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub rounds: usize,
    pub quiz_length: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            rounds: DEFAULT_ROUNDS,
            quiz_length: DEFAULT_QUIZ_LENGTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HpApiConfig {
    pub base_url: String,
}

impl HpApiConfig {
    /// Read `QUIZZARD_API_BASE_URL`, falling back to the public API when it is
    /// unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZZARD_API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        HpApiConfig { base_url }
    }
}

impl Default for HpApiConfig {
    fn default() -> Self {
        HpApiConfig { base_url: DEFAULT_API_BASE_URL.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_config_fills_missing_fields_with_defaults() {
        let cfg: QuizConfig = serde_json::from_str(r#"{"quiz_length": 5}"#).unwrap();
        assert_eq!(cfg, QuizConfig { rounds: 4, quiz_length: 5 });
    }
}

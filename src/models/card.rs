//! Card is a question/answer pair with optional tags. Only text is used.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Card {
    /// Builds a card as given. No trimming or validation happens here.
    pub fn new(question: impl Into<String>, answer: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            tags,
        }
    }

    /// Trims question and answer, returning `None` if either ends up empty.
    pub fn validated(question: &str, answer: &str, tags: Vec<String>) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self::new(question, answer, tags))
    }
}

/// Splits comma-separated tag input. Each tag is trimmed and empty ones are dropped.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of answer options on every quiz question.
pub const QUIZ_OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz question cannot be empty")]
    EmptyQuestion,

    #[error("quiz option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for 4 options")]
    CorrectIndexOutOfRange { index: usize },
}

//
// ─── QUIZ ITEM ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question with a fixed answer key.
///
/// Options keep their order; the item is static for the whole session.
/// Deserialization goes through [`QuizItem::new`], so a decoded item is
/// always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuizItemRecord")]
pub struct QuizItem {
    question: String,
    options: [String; QUIZ_OPTION_COUNT],
    correct_index: usize,
}

impl QuizItem {
    /// Creates a validated quiz item. Texts are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuestion` or `QuizError::EmptyOption` for blank texts.
    /// Returns `QuizError::CorrectIndexOutOfRange` if `correct_index` is not a valid option.
    pub fn new(
        question: impl Into<String>,
        options: [String; QUIZ_OPTION_COUNT],
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        let question = question.into().trim().to_owned();
        if question.is_empty() {
            return Err(QuizError::EmptyQuestion);
        }

        let options = options.map(|option| option.trim().to_owned());
        if let Some(index) = options.iter().position(String::is_empty) {
            return Err(QuizError::EmptyOption { index });
        }

        if correct_index >= QUIZ_OPTION_COUNT {
            return Err(QuizError::CorrectIndexOutOfRange {
                index: correct_index,
            });
        }

        Ok(Self {
            question,
            options,
            correct_index,
        })
    }

    /// The built-in daily question.
    #[must_use]
    pub fn daily() -> Self {
        Self {
            question: "Which topping is the most popular in bubble tea?".to_owned(),
            options: [
                "Pudding".to_owned(),
                "Tapioca Pearls".to_owned(),
                "Jelly".to_owned(),
                "Red Bean".to_owned(),
            ],
            correct_index: 1,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Unvalidated wire shape of a [`QuizItem`].
#[derive(Deserialize)]
struct QuizItemRecord {
    question: String,
    options: [String; QUIZ_OPTION_COUNT],
    correct_index: usize,
}

impl TryFrom<QuizItemRecord> for QuizItem {
    type Error = QuizError;

    fn try_from(record: QuizItemRecord) -> Result<Self, Self::Error> {
        QuizItem::new(record.question, record.options, record.correct_index)
    }
}

impl Default for QuizItem {
    fn default() -> Self {
        Self::daily()
    }
}

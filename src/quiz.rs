//! Quiz questions read by the board
//!
//! A quiz is an ordered list of question/answer pairs. The board shows the
//! item at the current log length; positions past the end show nothing.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::Error;

/// One question and its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuizItem {
    /// Question text
    #[garde(skip)]
    pub q: String,
    /// Answer text
    #[garde(skip)]
    pub a: String,
}

impl QuizItem {
    /// Creates a question/answer pair
    pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: a.into(),
        }
    }
}

/// Whether the board has run past the end of the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// There is a question for the current position
    InProgress,
    /// Every question has been used; scoring continues without text
    Exhausted,
}

/// An ordered, read-only list of questions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct Quiz {
    #[garde(length(max = crate::constants::quiz::MAX_QUESTIONS), dive)]
    items: Vec<QuizItem>,
}

impl Quiz {
    /// Wraps a list of questions
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self { items }
    }

    /// Parses a quiz from a JSON array of `{"q", "a"}` objects
    ///
    /// # Errors
    ///
    /// * `Error::Serialization` - `raw` is not a list of questions
    /// * `Error::Invalid` - the quiz holds more questions than allowed
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let quiz: Self = serde_json::from_str(raw)?;
        quiz.validate()?;
        Ok(quiz)
    }

    /// The question at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<&QuizItem> {
        self.items.get(index)
    }

    /// Phase of a board that has logged `answered` answers
    pub fn phase(&self, answered: usize) -> Phase {
        if answered < self.items.len() {
            Phase::InProgress
        } else {
            Phase::Exhausted
        }
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the quiz has no questions
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the questions in order
    pub fn iter(&self) -> impl Iterator<Item = &QuizItem> {
        self.items.iter()
    }
}

impl FromIterator<QuizItem> for Quiz {
    fn from_iter<I: IntoIterator<Item = QuizItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

use std::collections::HashMap;

use crate::{AnswerValue, Attachment, QuestionId};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(QuestionId),

    #[error("Type mismatch at question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers recorded during one flow.
///
/// Maps question ids to values. Only ids from the survey definition appear
/// here; the flow controller enforces that on insert. Created empty when a
/// flow starts, cleared on restart, and snapshotted once into the
/// submission record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<QuestionId, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the answer for the given question.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Check if an answer exists for the given question.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the answer for the given question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<AnswerValue> {
        self.values.remove(id)
    }

    /// Remove all answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of recorded answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no recorded answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // === Convenience accessors ===

    /// Get a text answer.
    pub fn get_text(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a single-choice answer.
    pub fn get_choice(&self, id: &QuestionId) -> Result<&str, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Choice(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Choice",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a multi-choice answer.
    pub fn get_choices(&self, id: &QuestionId) -> Result<&[String], AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Choices(list)) => Ok(list),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Choices",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get a rating answer.
    pub fn get_rating(&self, id: &QuestionId) -> Result<u8, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Rating(r)) => Ok(*r),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Rating",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Get an image answer's attachment. `Ok(None)` means the image answer
    /// exists but was cleared.
    pub fn get_attachment(&self, id: &QuestionId) -> Result<Option<&Attachment>, AnswerError> {
        match self.get(id) {
            Some(AnswerValue::Image(attachment)) => Ok(attachment.as_ref()),
            Some(other) => Err(AnswerError::TypeMismatch {
                id: id.clone(),
                expected: "Image",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(id.clone())),
        }
    }

    /// Check if the question has a usable answer.
    ///
    /// Returns `false` when the answer is missing, an empty string, an
    /// empty selection, or a cleared image. This is the single definition
    /// the advance gate builds on.
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        match self.get(id) {
            Some(value) => !value.is_empty(),
            None => false,
        }
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionId, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

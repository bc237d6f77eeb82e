use std::fmt;

/// Identifier of a question within a survey.
///
/// Ids are opaque strings, unique within one survey definition and stable
/// for its lifetime. They key the `Answers` map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

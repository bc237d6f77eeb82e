use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{Question, QuestionId};

/// Error type for malformed survey definitions.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("Duplicate question id: {0}")]
    DuplicateQuestionId(QuestionId),
}

/// Look-and-feel settings for the survey front-end. Opaque to the core.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyTheme {
    pub primary_color: String,
    pub font: String,
}

/// Notification preferences attached to a survey.
///
/// Carried as plain data for the deployment; delivery is the hosting
/// backend's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    pub enabled: bool,
    pub recipients: String,
    pub notify_on_critical: bool,
}

/// The top-level structure describing one deployed survey.
///
/// Presentation-agnostic: questions carry prompts and kinds, nothing about
/// rendering. The question order is the step order and is fixed at
/// construction time.
#[derive(Debug, Clone)]
pub struct SurveyDefinition {
    id: String,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    questions: Vec<Question>,
    active: bool,
    theme: Option<SurveyTheme>,
    notifications: Option<NotificationConfig>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    ///
    /// Fails if two questions share an id.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, DefinitionError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id().clone()) {
                return Err(DefinitionError::DuplicateQuestionId(question.id().clone()));
            }
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            created_at: Utc::now(),
            questions,
            active: true,
            theme: None,
            notifications: None,
        })
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the front-end theme.
    pub fn with_theme(mut self, theme: SurveyTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the notification preferences.
    pub fn with_notifications(mut self, notifications: NotificationConfig) -> Self {
        self.notifications = Some(notifications);
        self
    }

    /// Mark the survey as not accepting submissions.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn theme(&self) -> Option<&SurveyTheme> {
        self.theme.as_ref()
    }

    pub fn notifications(&self) -> Option<&NotificationConfig> {
        self.notifications.as_ref()
    }

    /// Get the questions in step order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at the given step index.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

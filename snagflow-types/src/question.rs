use crate::QuestionId;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The id under which this question's answer is recorded.
    id: QuestionId,

    /// The prompt text shown to the reporter.
    prompt: String,

    /// Optional secondary text shown under the prompt.
    description: Option<String>,

    /// The kind of question (determines input type and answer shape).
    kind: QuestionKind,

    /// Whether an answer is required before the flow may advance.
    required: bool,
}

impl Question {
    /// Create a new required question.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            description: None,
            kind,
            required: true,
        }
    }

    /// Mark this question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the secondary description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Whether an answer is required before advancing past this question.
    pub fn required(&self) -> bool {
        self.required
    }
}

/// The kind of question, determining input type and answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Single-line text input.
    ShortText,

    /// Multi-line text input.
    LongText,

    /// Pick exactly one option from a list.
    SingleChoice(ChoiceQuestion),

    /// Pick any number of options from a list.
    MultiChoice(ChoiceQuestion),

    /// Numeric rating on a small scale.
    Rating(RatingQuestion),

    /// Calendar date input.
    Date,

    /// Photo attachment, uploaded alongside the report.
    Image,
}

impl QuestionKind {
    /// Check if this is a free-text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::ShortText | Self::LongText)
    }

    /// Check if this is a choice-like kind.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice(_) | Self::MultiChoice(_))
    }

    /// Get the choice list for choice-like kinds.
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            Self::SingleChoice(q) | Self::MultiChoice(q) => Some(&q.choices),
            _ => None,
        }
    }

    /// Short kind name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShortText => "short text",
            Self::LongText => "long text",
            Self::SingleChoice(_) => "single choice",
            Self::MultiChoice(_) => "multi choice",
            Self::Rating(_) => "rating",
            Self::Date => "date",
            Self::Image => "image",
        }
    }
}

/// Configuration for a choice question.
///
/// The choice list exists only on choice-like kinds, so a text question
/// can never carry options by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceQuestion {
    /// The options, in display order.
    pub choices: Vec<String>,
}

impl ChoiceQuestion {
    /// Create a new choice configuration.
    pub fn new(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for a rating question.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingQuestion {
    /// The highest selectable rating; the scale runs from 1 to `max`.
    pub max: u8,
}

impl RatingQuestion {
    /// Create a rating question with the conventional 1-5 scale.
    pub fn new() -> Self {
        Self { max: 5 }
    }

    /// Create with a custom upper bound.
    pub fn with_max(max: u8) -> Self {
        Self { max }
    }
}

impl Default for RatingQuestion {
    fn default() -> Self {
        Self::new()
    }
}

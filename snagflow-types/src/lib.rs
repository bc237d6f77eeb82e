//! Core types for the snagflow crates.
//!
//! This crate provides the foundational types for maintenance-reporting
//! surveys:
//! - `SurveyDefinition` - The deployed survey structure
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `Answers` and `AnswerValue` - Recorded answers, typed per question kind
//! - `SubmissionRecord` and `Report` - A finished submission and its
//!   persisted, triageable form
//! - `SubmissionGateway` trait - The persistence boundary

mod question_id;
pub use question_id::QuestionId;

mod answer;
pub use answer::{AnswerValue, Attachment};

mod answers;
pub use answers::{AnswerError, Answers};

mod question;
pub use question::{ChoiceQuestion, Question, QuestionKind, RatingQuestion};

mod survey;
pub use survey::{DefinitionError, NotificationConfig, SurveyDefinition, SurveyTheme};

mod report;
pub use report::{
    Report, ReportId, ReportIdError, ReportPriority, ReportStatus, SubmissionRecord,
};

mod error;
pub use error::GatewayError;

mod traits;
pub use traits::SubmissionGateway;

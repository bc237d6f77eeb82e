use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Answers;

/// Error type for report id parsing.
#[derive(Debug, thiserror::Error)]
#[error("Report id must be exactly seven digits, got {0:?}")]
pub struct ReportIdError(pub String);

/// The display identifier of a submitted report.
///
/// Seven decimal digits, drawn uniformly at random when a submission is
/// attempted. This is the number shown to the reporter and quoted back to
/// maintenance staff; it is not a primary key and collisions are not
/// checked for.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Smallest id in the range.
    pub const MIN: u32 = 1_000_000;
    /// Largest id in the range.
    pub const MAX: u32 = 9_999_999;

    /// Draw a fresh id uniformly from the seven-digit range.
    pub fn generate() -> Self {
        let n = rand::thread_rng().gen_range(Self::MIN..=Self::MAX);
        Self(n.to_string())
    }

    /// Parse an id, requiring exactly seven digits with no leading zero.
    pub fn parse(s: &str) -> Result<Self, ReportIdError> {
        let valid = s.len() == 7
            && s.bytes().all(|b| b.is_ascii_digit())
            && !s.starts_with('0');
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(ReportIdError(s.to_string()))
        }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReportId({})", self.0)
    }
}

/// Workflow status of a persisted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Archived,
}

impl ReportStatus {
    /// All statuses, in board-column order.
    pub const ALL: [ReportStatus; 4] = [
        Self::New,
        Self::InProgress,
        Self::Completed,
        Self::Archived,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Triage priority of a persisted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPriority {
    #[default]
    Normal,
    High,
    Critical,
}

impl ReportPriority {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for ReportPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A finalized submission, constructed once at the moment submission is
/// attempted and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub id: ReportId,
    pub survey_id: String,
    pub answers: Answers,
    pub created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Assemble a record from an answer snapshot, stamped with the current
    /// time.
    pub fn new(id: ReportId, survey_id: impl Into<String>, answers: Answers) -> Self {
        Self {
            id,
            survey_id: survey_id.into(),
            answers,
            created_at: Utc::now(),
        }
    }
}

/// A persisted report, as the admin side sees it: the submitted fields
/// plus the triage workflow state.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: ReportId,
    pub survey_id: String,
    pub answers: Answers,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub priority: ReportPriority,
    pub internal_notes: String,
}

impl Report {
    /// Wrap a fresh submission as a persisted report in its initial
    /// workflow state.
    pub fn from_submission(record: SubmissionRecord) -> Self {
        Self {
            id: record.id,
            survey_id: record.survey_id,
            answers: record.answers,
            created_at: record.created_at,
            status: ReportStatus::default(),
            priority: ReportPriority::default(),
            internal_notes: String::new(),
        }
    }
}

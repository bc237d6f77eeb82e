use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use snagflow_types::{
    AnswerValue, Answers, Attachment, QuestionId, Report, ReportId, ReportPriority, ReportStatus,
    SubmissionRecord,
};

/// Answer ids of the deployed maintenance survey, as they map onto the
/// backend's columns.
pub(crate) const ANSWER_NAME: &str = "name";
pub(crate) const ANSWER_CATEGORY: &str = "category";
pub(crate) const ANSWER_LOCATION: &str = "location";
pub(crate) const ANSWER_DETAILS: &str = "details";
pub(crate) const ANSWER_IMAGE: &str = "image";

/// Insert payload for one new report row.
#[derive(Debug, Serialize)]
pub(crate) struct NewReportRow {
    pub report_id: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub details: String,
    pub image_url: Option<String>,
    pub status: ReportStatus,
    pub priority: ReportPriority,
}

impl NewReportRow {
    /// Flatten a submission record into the table's columns. `image_url`
    /// is the storage URL from a completed upload, or `None`.
    pub fn from_record(record: &SubmissionRecord, image_url: Option<String>) -> Self {
        Self {
            report_id: record.id.as_str().to_string(),
            name: text_answer(&record.answers, ANSWER_NAME),
            category: choice_answer(&record.answers, ANSWER_CATEGORY),
            location: text_answer(&record.answers, ANSWER_LOCATION),
            details: text_answer(&record.answers, ANSWER_DETAILS),
            image_url,
            status: ReportStatus::New,
            priority: ReportPriority::Normal,
        }
    }
}

fn text_answer(answers: &Answers, id: &str) -> String {
    answers
        .get(&QuestionId::new(id))
        .and_then(AnswerValue::as_text)
        .unwrap_or_default()
        .to_string()
}

fn choice_answer(answers: &Answers, id: &str) -> String {
    answers
        .get(&QuestionId::new(id))
        .and_then(AnswerValue::as_choice)
        .unwrap_or_default()
        .to_string()
}

/// One row of the reports table, as the backend returns it.
#[derive(Debug, Deserialize)]
pub(crate) struct ReportRow {
    pub report_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<ReportStatus>,
    #[serde(default)]
    pub priority: Option<ReportPriority>,
    #[serde(default)]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReportRow {
    /// Rebuild the typed report from the row. Rows whose id is not a
    /// valid report id are dropped (logged) - this app never writes such
    /// rows, but the table is not ours alone.
    pub fn into_report(self, survey_id: &str) -> Option<Report> {
        let id = match ReportId::parse(&self.report_id) {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "skipping row with malformed report id");
                return None;
            }
        };

        let mut answers = Answers::new();
        if let Some(name) = self.name {
            answers.insert(ANSWER_NAME, AnswerValue::Text(name));
        }
        if let Some(category) = self.category {
            answers.insert(ANSWER_CATEGORY, AnswerValue::Choice(category));
        }
        if let Some(location) = self.location {
            answers.insert(ANSWER_LOCATION, AnswerValue::Text(location));
        }
        if let Some(details) = self.details {
            answers.insert(ANSWER_DETAILS, AnswerValue::Text(details));
        }
        answers.insert(
            ANSWER_IMAGE,
            AnswerValue::Image(self.image_url.map(Attachment::Url)),
        );

        Some(Report {
            id,
            survey_id: survey_id.to_string(),
            answers,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            internal_notes: self.internal_notes.unwrap_or_default(),
        })
    }
}
